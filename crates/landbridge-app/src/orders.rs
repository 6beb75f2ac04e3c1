//! Order history and dashboard queries for the signed-in user

use landbridge_domain::repository::OrderRepository;
use landbridge_domain::service::{dashboard_stats, orders_for_user};
use landbridge_types::{DashboardStats, Order, OrderStatus, Result};

use crate::session::Session;

pub struct OrderQueryService<'a> {
    orders: &'a dyn OrderRepository,
}

impl<'a> OrderQueryService<'a> {
    pub fn new(orders: &'a dyn OrderRepository) -> Self {
        Self { orders }
    }

    /// Order history, newest first, optionally narrowed to one status
    pub fn history(&self, session: &Session, status: Option<OrderStatus>) -> Result<Vec<Order>> {
        let user = session.require_user()?;
        Ok(orders_for_user(&self.orders.find_all()?, &user.id, status))
    }

    /// Find a visible order by its tracking number
    pub fn track(&self, session: &Session, tracking_number: &str) -> Result<Option<Order>> {
        Ok(self
            .history(session, None)?
            .into_iter()
            .find(|o| o.tracking_number == tracking_number))
    }

    pub fn dashboard(&self, session: &Session) -> Result<DashboardStats> {
        Ok(dashboard_stats(&self.history(session, None)?))
    }
}
