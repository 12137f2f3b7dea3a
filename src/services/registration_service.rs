//! Registration service - Validates and persists new user credentials.
//!
//! Single-shot request/response workflow: validate input, check for an
//! existing email, hash the password, insert the record. No retries and
//! no intermediate persisted state.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::MSG_FIELDS_REQUIRED;
use crate::domain::{Password, UserAccount};
use crate::errors::{AppError, AppResult};
use crate::infra::UserAccountRepository;

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a new user account
    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<UserAccount>;
}

/// Concrete implementation of RegistrationService using the repository.
pub struct Registrar {
    repo: Arc<dyn UserAccountRepository>,
}

impl Registrar {
    /// Create new registration service instance with repository
    pub fn new(repo: Arc<dyn UserAccountRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl RegistrationService for Registrar {
    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<UserAccount> {
        // Missing input is a client error; no persistence access happens
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AppError::validation(MSG_FIELDS_REQUIRED));
        }

        // Fast-path uniqueness check. The unique index on email remains the
        // authoritative guard; the repository maps a constraint violation on
        // insert to the same conflict error.
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&password)?.into_string();
        self.repo.create(username, email, password_hash).await
    }
}
