//! Repository trait definitions for data persistence

use landbridge_types::Error;
use landbridge_types::{AccountRecord, Order, User};

/// Repository for orders. The collection is replaced as a whole.
pub trait OrderRepository {
    /// Load all orders
    fn find_all(&self) -> Result<Vec<Order>, Error>;

    /// Replace the stored collection
    fn save_all(&self, orders: &[Order]) -> Result<(), Error>;

    /// Append one order (read, push, write back)
    fn append(&self, order: Order) -> Result<(), Error> {
        let mut orders = self.find_all()?;
        orders.push(order);
        self.save_all(&orders)
    }
}

/// Repository for registered accounts (登録済みユーザー)
pub trait AccountRepository {
    /// Find an account by email
    fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>, Error>;

    /// Insert or replace an account, keyed by its email
    fn save(&self, record: &AccountRecord) -> Result<(), Error>;

    /// All accounts
    fn find_all(&self) -> Result<Vec<AccountRecord>, Error>;
}

/// Repository for the signed-in user
pub trait SessionRepository {
    fn load(&self) -> Result<Option<User>, Error>;

    fn save(&self, user: &User) -> Result<(), Error>;

    fn clear(&self) -> Result<(), Error>;
}
