//! Order history filtering and dashboard aggregates

use landbridge_types::{DashboardStats, Order, OrderStatus};

/// Owner of the seeded demo orders; visible to every signed-in user
pub const DEMO_USER_ID: &str = "user_demo";

/// Orders visible to `user_id`, optionally narrowed to one status,
/// newest first
pub fn orders_for_user(orders: &[Order], user_id: &str, status: Option<OrderStatus>) -> Vec<Order> {
    let mut visible: Vec<Order> = orders
        .iter()
        .filter(|o| o.user_id == user_id || o.user_id == DEMO_USER_ID)
        .filter(|o| status.map(|s| o.status == s).unwrap_or(true))
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    visible
}

pub fn dashboard_stats(orders: &[Order]) -> DashboardStats {
    let delivered: Vec<&Order> = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered)
        .collect();

    let durations: Vec<f64> = delivered
        .iter()
        .filter_map(|o| o.actual_delivery.map(|at| at - o.created_at))
        .map(|d| d.num_minutes() as f64 / 60.0)
        .collect();
    let average_delivery_time = if durations.is_empty() {
        None
    } else {
        Some(durations.iter().sum::<f64>() / durations.len() as f64)
    };

    DashboardStats {
        total_orders: orders.len(),
        active_orders: orders.iter().filter(|o| o.status.is_active()).count(),
        delivered_orders: delivered.len(),
        total_spent: orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .map(|o| o.total_price as u64)
            .sum(),
        average_delivery_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use landbridge_types::Address;

    fn order(id: &str, user_id: &str, status: OrderStatus, day: u32, price: u32) -> Order {
        let created_at = Utc.with_ymd_and_hms(2024, 1, day, 10, 0, 0).unwrap();
        Order {
            id: id.to_string(),
            user_id: user_id.to_string(),
            tracking_number: format!("LB{}", id),
            status,
            origin: Address::default(),
            destination: Address::default(),
            items: vec![],
            total_price: price,
            created_at,
            estimated_delivery: created_at + Duration::days(2),
            actual_delivery: None,
        }
    }

    #[test]
    fn test_visible_orders_newest_first() {
        let orders = vec![
            order("a", "user_1", OrderStatus::Pending, 10, 1000),
            order("b", "user_2", OrderStatus::Pending, 11, 1000),
            order("c", DEMO_USER_ID, OrderStatus::Delivered, 12, 1000),
            order("d", "user_1", OrderStatus::InTransit, 13, 1000),
        ];
        let visible = orders_for_user(&orders, "user_1", None);
        let ids: Vec<&str> = visible.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "c", "a"]);
    }

    #[test]
    fn test_status_filter() {
        let orders = vec![
            order("a", "user_1", OrderStatus::Pending, 10, 1000),
            order("b", "user_1", OrderStatus::Delivered, 11, 1000),
        ];
        let visible = orders_for_user(&orders, "user_1", Some(OrderStatus::Delivered));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "b");
    }

    #[test]
    fn test_dashboard_stats() {
        let mut delivered = order("b", "user_1", OrderStatus::Delivered, 10, 2800);
        delivered.actual_delivery = Some(delivered.created_at + Duration::minutes(90));
        let orders = vec![
            order("a", "user_1", OrderStatus::InTransit, 11, 1500),
            delivered,
            order("c", "user_1", OrderStatus::Cancelled, 12, 900),
            order("d", "user_1", OrderStatus::Pending, 13, 1100),
        ];

        let stats = dashboard_stats(&orders);
        assert_eq!(stats.total_orders, 4);
        assert_eq!(stats.active_orders, 2);
        assert_eq!(stats.delivered_orders, 1);
        assert_eq!(stats.total_spent, 1500 + 2800 + 1100);
        assert_eq!(stats.average_delivery_time, Some(1.5));
    }

    #[test]
    fn test_dashboard_stats_empty() {
        let stats = dashboard_stats(&[]);
        assert_eq!(stats, DashboardStats::default());
    }
}
