//! UserAccount repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::user_account::{self, ActiveModel, Entity as UserAccountEntity};
use crate::domain::UserAccount;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// UserAccount repository trait for dependency injection.
///
/// Registration performs exactly one read (`find_by_email`) and one write
/// (`create`) per request; there is no update or delete surface.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserAccountRepository: Send + Sync {
    /// Find an account by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserAccount>>;

    /// Create a new account; the store assigns the id
    async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> AppResult<UserAccount>;
}

/// Concrete implementation of UserAccountRepository over SeaORM
pub struct UserAccountStore {
    db: DatabaseConnection,
}

impl UserAccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserAccountRepository for UserAccountStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserAccount>> {
        let result = UserAccountEntity::find()
            .filter(user_account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(UserAccount::from))
    }

    async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> AppResult<UserAccount> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(Utc::now()),
        };

        // Two concurrent registrations can both pass the service-level
        // pre-check; the unique index on email decides the winner and the
        // loser surfaces as a conflict, not a storage failure.
        let model = active_model.insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                AppError::conflict("User")
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(UserAccount::from(model))
    }
}
