//! Session context and mock account flows
//!
//! A `Session` is created once at start-up from the session repository and
//! passed explicitly to whatever needs the signed-in user. `AuthService`
//! mutates it on login, registration, logout and profile edits, and mirrors
//! every change back to storage.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use landbridge_domain::model::{LoginInput, ProfileInput, RegisterInput};
use landbridge_domain::repository::{AccountRepository, SessionRepository};
use landbridge_domain::service::validation::{validate_login, validate_profile, validate_register};
use landbridge_infra::password::{hash_password, verify_password};
use landbridge_types::{AccountRecord, AuthRejection, Result, User};

/// Who is signed in, if anyone
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Rebuild the session saved by a previous run
    pub fn restore(sessions: &dyn SessionRepository) -> Result<Self> {
        Ok(Self {
            user: sessions.load()?,
        })
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn require_user(&self) -> Result<&User> {
        self.user
            .as_ref()
            .ok_or_else(|| AuthRejection::NotSignedIn.into())
    }
}

pub struct AuthService<'a> {
    accounts: &'a dyn AccountRepository,
    sessions: &'a dyn SessionRepository,
}

impl<'a> AuthService<'a> {
    pub fn new(accounts: &'a dyn AccountRepository, sessions: &'a dyn SessionRepository) -> Self {
        Self { accounts, sessions }
    }

    fn sign_in(&self, session: &mut Session, user: User) -> Result<User> {
        self.sessions.save(&user)?;
        session.user = Some(user.clone());
        Ok(user)
    }

    pub fn login(
        &self,
        session: &mut Session,
        input: &LoginInput,
        now: DateTime<Utc>,
    ) -> Result<User> {
        validate_login(input).into_result()?;

        let mut record = self
            .accounts
            .find_by_email(&input.email)?
            .filter(|r| verify_password(&input.password, &r.password))
            .ok_or(AuthRejection::InvalidCredentials)?;

        record.user_data.last_login = now;
        self.accounts.save(&record)?;
        info!(email = %input.email, "signed in");
        self.sign_in(session, record.user_data)
    }

    /// Create an account and sign it in
    pub fn register(
        &self,
        session: &mut Session,
        input: &RegisterInput,
        now: DateTime<Utc>,
    ) -> Result<User> {
        validate_register(input).into_result()?;

        if self.accounts.find_by_email(&input.email)?.is_some() {
            return Err(AuthRejection::EmailAlreadyRegistered.into());
        }

        let user = User {
            id: format!("user_{}", Uuid::new_v4().simple()),
            email: input.email.clone(),
            name: input.name.clone(),
            phone: input.phone.clone(),
            company: input.company.clone().filter(|c| !c.is_empty()),
            address: None,
            created_at: now,
            last_login: now,
        };
        self.accounts.save(&AccountRecord {
            password: hash_password(&input.password),
            user_data: user.clone(),
        })?;
        info!(email = %input.email, user_id = %user.id, "registered account");
        self.sign_in(session, user)
    }

    pub fn logout(&self, session: &mut Session) -> Result<()> {
        self.sessions.clear()?;
        if let Some(user) = session.user.take() {
            info!(email = %user.email, "signed out");
        }
        Ok(())
    }

    /// Apply profile edits to the signed-in user
    pub fn update_profile(&self, session: &mut Session, input: &ProfileInput) -> Result<User> {
        validate_profile(input).into_result()?;
        let mut user = session.require_user()?.clone();

        user.name = input.name.clone();
        user.phone = input.phone.clone();
        user.company = input.company.clone().filter(|c| !c.is_empty());
        user.address = input.address.clone().filter(|a| !a.is_empty());

        if let Some(mut record) = self.accounts.find_by_email(&user.email)? {
            record.user_data = user.clone();
            self.accounts.save(&record)?;
        }
        self.sign_in(session, user)
    }
}
