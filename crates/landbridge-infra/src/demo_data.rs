//! Demo account and orders for a fresh store

use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use crate::password::hash_password;
use landbridge_domain::repository::{AccountRepository, OrderRepository};
use landbridge_domain::service::DEMO_USER_ID;
use landbridge_types::{
    AccountRecord, Address, Dimensions, Order, OrderItem, OrderStatus, Result, User,
};

pub const DEMO_EMAIL: &str = "demo@landbridge.com";
pub const DEMO_PASSWORD: &str = "demo123";

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

fn address(street: &str, city: &str, state: &str, zip_code: &str) -> Address {
    Address {
        street: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip_code.to_string(),
        country: "日本".to_string(),
    }
}

fn demo_account(now: DateTime<Utc>) -> AccountRecord {
    AccountRecord {
        password: hash_password(DEMO_PASSWORD),
        user_data: User {
            id: DEMO_USER_ID.to_string(),
            email: DEMO_EMAIL.to_string(),
            name: "田中太郎".to_string(),
            phone: "090-1234-5678".to_string(),
            company: Some("株式会社デモ".to_string()),
            address: None,
            created_at: now,
            last_login: now,
        },
    }
}

pub fn demo_orders() -> Vec<Order> {
    vec![
        Order {
            id: "order_001".to_string(),
            user_id: DEMO_USER_ID.to_string(),
            tracking_number: "LB2024001".to_string(),
            status: OrderStatus::InTransit,
            origin: address("1-1-1 渋谷", "渋谷区", "東京都", "150-0002"),
            destination: address("2-2-2 梅田", "大阪市", "大阪府", "530-0001"),
            items: vec![OrderItem {
                id: "item_001".to_string(),
                name: "書類".to_string(),
                quantity: 1,
                weight: 0.5,
                dimensions: Dimensions::new(30.0, 20.0, 2.0),
                price: 1500,
            }],
            total_price: 1500,
            created_at: at(2024, 1, 15, 10, 0),
            estimated_delivery: at(2024, 1, 16, 18, 0),
            actual_delivery: None,
        },
        Order {
            id: "order_002".to_string(),
            user_id: DEMO_USER_ID.to_string(),
            tracking_number: "LB2024002".to_string(),
            status: OrderStatus::Delivered,
            origin: address("3-3-3 新宿", "新宿区", "東京都", "160-0022"),
            destination: address("4-4-4 天神", "福岡市", "福岡県", "810-0001"),
            items: vec![OrderItem {
                id: "item_002".to_string(),
                name: "商品サンプル".to_string(),
                quantity: 3,
                weight: 2.0,
                dimensions: Dimensions::new(40.0, 30.0, 20.0),
                price: 2800,
            }],
            total_price: 2800,
            created_at: at(2024, 1, 10, 14, 0),
            estimated_delivery: at(2024, 1, 12, 16, 0),
            actual_delivery: Some(at(2024, 1, 12, 15, 30)),
        },
    ]
}

/// Seed the demo account and orders. Existing data is left untouched:
/// the account is only added when missing, the orders only when the store
/// holds none.
pub fn initialize_demo_data(
    accounts: &dyn AccountRepository,
    orders: &dyn OrderRepository,
    now: DateTime<Utc>,
) -> Result<()> {
    if accounts.find_by_email(DEMO_EMAIL)?.is_none() {
        accounts.save(&demo_account(now))?;
        info!(email = DEMO_EMAIL, "seeded demo account");
    }

    if orders.find_all()?.is_empty() {
        orders.save_all(&demo_orders())?;
        info!("seeded demo orders");
    }

    Ok(())
}
