//! UserAccount domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::MSG_REGISTERED;

/// UserAccount domain entity.
///
/// Created exactly once on successful registration; this service never
/// updates or deletes records. `email` is unique across all accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    /// Create a new account entity
    pub fn new(id: Uuid, username: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Registration response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// Human-readable confirmation message
    #[schema(example = "User registered successfully")]
    pub message: String,
    /// Identifier assigned by the persistence layer
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub user_id: Uuid,
}

impl From<UserAccount> for RegisterResponse {
    fn from(account: UserAccount) -> Self {
        Self {
            message: MSG_REGISTERED.to_string(),
            user_id: account.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_carries_assigned_id() {
        let id = Uuid::new_v4();
        let account = UserAccount::new(
            id,
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hashed".to_string(),
        );

        let response = RegisterResponse::from(account);
        assert_eq!(response.user_id, id);
        assert_eq!(response.message, "User registered successfully");
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let account = UserAccount::new(
            Uuid::new_v4(),
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$argon2id$v=19$secret".to_string(),
        );

        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }
}
