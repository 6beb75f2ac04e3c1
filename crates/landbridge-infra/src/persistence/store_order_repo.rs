//! Store-backed implementation of OrderRepository

use landbridge_domain::repository::OrderRepository;
use landbridge_store::Store;
use landbridge_types::{Error, Order};

use super::load_or_default;

const ORDERS_KEY: &str = "orders";

/// Keeps every order in one JSON array under the `orders` key
#[derive(Debug, Clone)]
pub struct StoreOrderRepository {
    store: Store,
}

impl StoreOrderRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl OrderRepository for StoreOrderRepository {
    fn find_all(&self) -> Result<Vec<Order>, Error> {
        load_or_default(&self.store, ORDERS_KEY)
    }

    fn save_all(&self, orders: &[Order]) -> Result<(), Error> {
        self.store.set(ORDERS_KEY, &orders)
    }
}
