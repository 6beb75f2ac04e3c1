//! Repository wiring for the persistence layer

use std::path::PathBuf;

use chrono::Utc;

use landbridge_infra::{
    initialize_demo_data, StoreAccountRepository, StoreOrderRepository, StoreSessionRepository,
};
use landbridge_store::Store;
use landbridge_types::Result;

use crate::config::Config;

/// All repositories over one shared store
#[derive(Debug, Clone)]
pub struct Repositories {
    pub orders: StoreOrderRepository,
    pub accounts: StoreAccountRepository,
    pub sessions: StoreSessionRepository,
}

impl Repositories {
    pub fn new(store: Store) -> Self {
        Self {
            orders: StoreOrderRepository::new(store.clone()),
            accounts: StoreAccountRepository::new(store.clone()),
            sessions: StoreSessionRepository::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Store::in_memory())
    }

    /// Seed the demo account and orders if missing
    pub fn seed_demo_data(&self) -> Result<()> {
        initialize_demo_data(&self.accounts, &self.orders, Utc::now())
    }
}

/// Open the store at a custom directory
pub fn open_repositories_at(store_dir: PathBuf) -> Result<Repositories> {
    Ok(Repositories::new(Store::open(store_dir)?))
}

/// Open the configured store, seeding demo data when enabled
pub fn open_repositories(config: &Config) -> Result<Repositories> {
    let repos = open_repositories_at(config.store_dir()?)?;
    if config.seed_demo_data {
        repos.seed_demo_data()?;
    }
    Ok(repos)
}
