//! Demo data seeding against a directory-backed store

use chrono::Utc;
use tempfile::tempdir;

use landbridge_domain::repository::{AccountRepository, OrderRepository};
use landbridge_infra::password::verify_password;
use landbridge_infra::{
    initialize_demo_data, StoreAccountRepository, StoreOrderRepository, DEMO_EMAIL, DEMO_PASSWORD,
};
use landbridge_store::Store;
use landbridge_types::OrderStatus;

#[test]
fn test_seeds_fresh_store() {
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path().to_path_buf()).unwrap();
    let accounts = StoreAccountRepository::new(store.clone());
    let orders = StoreOrderRepository::new(store.clone());

    initialize_demo_data(&accounts, &orders, Utc::now()).unwrap();

    let demo = accounts.find_by_email(DEMO_EMAIL).unwrap().unwrap();
    assert!(verify_password(DEMO_PASSWORD, &demo.password));
    assert_eq!(demo.user_data.name, "田中太郎");

    let seeded = orders.find_all().unwrap();
    assert_eq!(seeded.len(), 2);
    assert_eq!(seeded[0].tracking_number, "LB2024001");
    assert_eq!(seeded[1].status, OrderStatus::Delivered);
    assert!(seeded[1].actual_delivery.is_some());
}

#[test]
fn test_seeding_keeps_existing_orders() {
    let store = Store::in_memory();
    let accounts = StoreAccountRepository::new(store.clone());
    let orders = StoreOrderRepository::new(store.clone());

    initialize_demo_data(&accounts, &orders, Utc::now()).unwrap();
    let mut current = orders.find_all().unwrap();
    current.remove(0);
    orders.save_all(&current).unwrap();

    initialize_demo_data(&accounts, &orders, Utc::now()).unwrap();
    assert_eq!(orders.find_all().unwrap().len(), 1);
    assert_eq!(accounts.find_all().unwrap().len(), 1);
}
