//! Store-backed implementation of SessionRepository

use tracing::warn;

use landbridge_domain::repository::SessionRepository;
use landbridge_store::Store;
use landbridge_types::{Error, StorageError, User};

const SESSION_KEY: &str = "user";

#[derive(Debug, Clone)]
pub struct StoreSessionRepository {
    store: Store,
}

impl StoreSessionRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl SessionRepository for StoreSessionRepository {
    fn load(&self) -> Result<Option<User>, Error> {
        match self.store.get::<User>(SESSION_KEY) {
            Err(Error::Storage(StorageError::Corrupted { reason, .. })) => {
                warn!(%reason, "ignoring unreadable session");
                Ok(None)
            }
            other => other,
        }
    }

    fn save(&self, user: &User) -> Result<(), Error> {
        self.store.set(SESSION_KEY, user)
    }

    fn clear(&self) -> Result<(), Error> {
        self.store.remove(SESSION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_save_load_clear() {
        let repo = StoreSessionRepository::new(Store::in_memory());
        assert!(repo.load().unwrap().is_none());

        let user = User {
            id: "user_1".to_string(),
            email: "a@example.com".to_string(),
            name: "a".to_string(),
            phone: "03-0000-0000".to_string(),
            company: None,
            address: None,
            created_at: Utc::now(),
            last_login: Utc::now(),
        };
        repo.save(&user).unwrap();
        assert_eq!(repo.load().unwrap(), Some(user));

        repo.clear().unwrap();
        assert!(repo.load().unwrap().is_none());
    }
}
