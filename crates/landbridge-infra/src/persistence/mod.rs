//! Persistence implementations
//!
//! This module provides store-backed implementations of the repository traits.

mod store_account_repo;
mod store_order_repo;
mod store_session_repo;

pub use store_account_repo::StoreAccountRepository;
pub use store_order_repo::StoreOrderRepository;
pub use store_session_repo::StoreSessionRepository;

use serde::de::DeserializeOwned;
use tracing::warn;

use landbridge_store::Store;
use landbridge_types::{Error, Result, StorageError};

/// Read a collection, treating a corrupted blob as empty
pub(crate) fn load_or_default<T: DeserializeOwned + Default>(store: &Store, key: &str) -> Result<T> {
    match store.get::<T>(key) {
        Ok(value) => Ok(value.unwrap_or_default()),
        Err(Error::Storage(StorageError::Corrupted { key, reason })) => {
            warn!(%key, %reason, "discarding unreadable stored collection");
            Ok(T::default())
        }
        Err(e) => Err(e),
    }
}
