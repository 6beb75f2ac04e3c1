//! Store-backed implementation of AccountRepository

use std::collections::BTreeMap;

use landbridge_domain::repository::AccountRepository;
use landbridge_store::Store;
use landbridge_types::{AccountRecord, Error};

use super::load_or_default;

const ACCOUNTS_KEY: &str = "registered_users";

/// Registered accounts stored as an email-keyed map
#[derive(Debug, Clone)]
pub struct StoreAccountRepository {
    store: Store,
}

impl StoreAccountRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<BTreeMap<String, AccountRecord>, Error> {
        load_or_default(&self.store, ACCOUNTS_KEY)
    }
}

impl AccountRepository for StoreAccountRepository {
    fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>, Error> {
        Ok(self.load()?.remove(email))
    }

    fn save(&self, record: &AccountRecord) -> Result<(), Error> {
        let mut accounts = self.load()?;
        accounts.insert(record.user_data.email.clone(), record.clone());
        self.store.set(ACCOUNTS_KEY, &accounts)
    }

    fn find_all(&self) -> Result<Vec<AccountRecord>, Error> {
        Ok(self.load()?.into_values().collect())
    }
}
