//! Infrastructure layer - store-backed repositories, password hashing, demo data

pub mod demo_data;
pub mod password;
pub mod persistence;

pub use demo_data::{initialize_demo_data, DEMO_EMAIL, DEMO_PASSWORD};
pub use persistence::{StoreAccountRepository, StoreOrderRepository, StoreSessionRepository};
