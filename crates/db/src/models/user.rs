//! User entity model and DTOs.

use musiclib_core::error::CoreError;
use musiclib_core::types::{EntityId, Timestamp};
use musiclib_core::validation::{required, validate_input};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full user row from the `users` table.
///
/// Contains the stored password -- deliberately not `Serialize`.
/// Use [`UserResponse`] for every external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: EntityId,
    pub login: String,
    /// Stored and compared as plaintext.
    pub password: String,
    /// Starts at 1, incremented on every password change.
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: EntityId,
    pub login: String,
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            login: user.login,
            version: user.version,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Request body for `POST /user`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUserPayload {
    #[validate(
        required(message = "login is required"),
        length(min = 1, message = "login must not be empty")
    )]
    pub login: Option<String>,
    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password must not be empty")
    )]
    pub password: Option<String>,
}

/// Validated fields for inserting a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub login: String,
    pub password: String,
}

impl TryFrom<CreateUserPayload> for NewUser {
    type Error = CoreError;

    fn try_from(payload: CreateUserPayload) -> Result<Self, Self::Error> {
        validate_input(&payload)?;
        Ok(Self {
            login: required(payload.login, "login")?,
            password: required(payload.password, "password")?,
        })
    }
}

/// Request body for `PUT /user/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordPayload {
    #[validate(
        required(message = "oldPassword is required"),
        length(min = 1, message = "oldPassword must not be empty")
    )]
    pub old_password: Option<String>,
    #[validate(
        required(message = "newPassword is required"),
        length(min = 1, message = "newPassword must not be empty")
    )]
    pub new_password: Option<String>,
}

/// Validated password change: the presented secret and its replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

impl TryFrom<UpdatePasswordPayload> for PasswordChange {
    type Error = CoreError;

    fn try_from(payload: UpdatePasswordPayload) -> Result<Self, Self::Error> {
        validate_input(&payload)?;
        Ok(Self {
            old_password: required(payload.old_password, "oldPassword")?,
            new_password: required(payload.new_password, "newPassword")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn response_never_carries_password() {
        let now = chrono::Utc::now();
        let user = User {
            id: EntityId::new_v4(),
            login: "ann".into(),
            password: "hunter2".into(),
            version: 1,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["login"], "ann");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn password_payload_uses_camel_case() {
        let payload: UpdatePasswordPayload = serde_json::from_value(serde_json::json!({
            "oldPassword": "a",
            "newPassword": "b"
        }))
        .unwrap();
        assert_eq!(
            PasswordChange::try_from(payload).unwrap(),
            PasswordChange {
                old_password: "a".into(),
                new_password: "b".into(),
            }
        );
    }

    #[test]
    fn empty_new_password_is_rejected() {
        let payload = UpdatePasswordPayload {
            old_password: Some("a".into()),
            new_password: Some(String::new()),
        };
        assert_matches!(
            PasswordChange::try_from(payload),
            Err(CoreError::Validation(msg)) if msg == "newPassword must not be empty"
        );
    }
}
