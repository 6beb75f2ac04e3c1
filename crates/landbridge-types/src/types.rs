//! Shared data model for shipments, orders and accounts

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Package dimensions in centimeters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Sum of the three sides (3辺の合計)
    pub fn total_size(&self) -> f64 {
        self.length + self.width + self.height
    }
}

/// Delivery speed option
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeliverySpeed {
    #[default]
    Normal,
    Express,
    TimeSpecified,
}

impl DeliverySpeed {
    /// Get display label in Japanese
    pub fn label(&self) -> &'static str {
        match self {
            DeliverySpeed::Normal => "通常配送",
            DeliverySpeed::Express => "速達",
            DeliverySpeed::TimeSpecified => "時間指定",
        }
    }
}

impl std::fmt::Display for DeliverySpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliverySpeed::Normal => write!(f, "normal"),
            DeliverySpeed::Express => write!(f, "express"),
            DeliverySpeed::TimeSpecified => write!(f, "timeSpecified"),
        }
    }
}

/// Kind of parcel; only names the order line item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PackageType {
    Letter,
    #[default]
    Parcel,
    LargeParcel,
}

impl PackageType {
    pub fn item_name(&self) -> &'static str {
        match self {
            PackageType::Letter => "書類",
            PackageType::Parcel => "小包",
            PackageType::LargeParcel => "大型荷物",
        }
    }
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    InTransit,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Get display label in Japanese
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "受付中",
            OrderStatus::Processing => "処理中",
            OrderStatus::InTransit => "配送中",
            OrderStatus::Delivered => "配送完了",
            OrderStatus::Cancelled => "キャンセル",
        }
    }

    /// Still moving through the pipeline
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Processing | OrderStatus::InTransit
        )
    }
}

/// Stored postal address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    /// 都道府県
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "〒{} {}{}{}", self.zip_code, self.state, self.city, self.street)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    /// kg
    pub weight: f64,
    pub dimensions: Dimensions,
    /// JPY
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub tracking_number: String,
    pub status: OrderStatus,
    pub origin: Address,
    pub destination: Address,
    pub items: Vec<OrderItem>,
    /// JPY
    pub total_price: u32,
    pub created_at: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_delivery: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

/// Registered account: password hash plus profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub password: String,
    pub user_data: User,
}

/// Aggregates shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_orders: usize,
    pub active_orders: usize,
    pub delivered_orders: usize,
    /// JPY
    pub total_spent: u64,
    /// Hours from creation to actual delivery, over delivered orders
    pub average_delivery_time: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_size() {
        assert_eq!(Dimensions::new(20.0, 20.0, 20.0).total_size(), 60.0);
    }

    #[test]
    fn test_speed_serializes_camel_case() {
        let json = serde_json::to_string(&DeliverySpeed::TimeSpecified).unwrap();
        assert_eq!(json, "\"timeSpecified\"");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&OrderStatus::InTransit).unwrap();
        assert_eq!(json, "\"in_transit\"");
        let back: OrderStatus = serde_json::from_str("\"delivered\"").unwrap();
        assert_eq!(back, OrderStatus::Delivered);
    }

    #[test]
    fn test_active_statuses() {
        assert!(OrderStatus::Pending.is_active());
        assert!(OrderStatus::InTransit.is_active());
        assert!(!OrderStatus::Delivered.is_active());
        assert!(!OrderStatus::Cancelled.is_active());
    }

    #[test]
    fn test_order_dates_parse_from_stored_json() {
        let json = r#"{
            "id": "order_001",
            "userId": "user_demo",
            "trackingNumber": "LB2024001",
            "status": "in_transit",
            "origin": {"street": "1-1-1 渋谷", "city": "渋谷区", "state": "東京都", "zipCode": "150-0002", "country": "日本"},
            "destination": {"street": "2-2-2 梅田", "city": "大阪市", "state": "大阪府", "zipCode": "530-0001", "country": "日本"},
            "items": [],
            "totalPrice": 1500,
            "createdAt": "2024-01-15T10:00:00Z",
            "estimatedDelivery": "2024-01-16T18:00:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.created_at.to_rfc3339(), "2024-01-15T10:00:00+00:00");
        assert!(order.actual_delivery.is_none());
        assert_eq!(order.origin.zip_code, "150-0002");
    }
}
