//! User service: CRUD plus the password-change check.
//!
//! Every user that leaves this service is a [`UserResponse`], so the stored
//! password never reaches a handler.

use std::sync::Arc;

use musiclib_core::error::CoreError;
use musiclib_core::types::EntityId;
use musiclib_db::gateway::UserGateway;
use musiclib_db::models::user::{NewUser, PasswordChange, UserResponse};

use crate::error::{AppError, AppResult};

const ENTITY: &str = "User";

/// Message returned when the presented current password is wrong.
pub const INCORRECT_PASSWORD: &str = "Incorrect password";

#[derive(Clone)]
pub struct UserService {
    gateway: Arc<dyn UserGateway>,
}

impl UserService {
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.gateway.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get(&self, id: EntityId) -> AppResult<UserResponse> {
        self.gateway
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, input: &NewUser) -> AppResult<UserResponse> {
        let user = self.gateway.create(input).await?;
        tracing::info!(id = %user.id, login = %user.login, "User created");
        Ok(user.into())
    }

    /// Replace the password if `change.old_password` matches the stored one.
    ///
    /// The write itself is a single compare-and-set. When it does not apply,
    /// one lookup decides between "wrong password" (403) and "no such
    /// user" (404).
    pub async fn change_password(
        &self,
        id: EntityId,
        change: &PasswordChange,
    ) -> AppResult<UserResponse> {
        if let Some(user) = self.gateway.change_password(id, change).await? {
            tracing::info!(%id, version = user.version, "User password changed");
            return Ok(user.into());
        }

        match self.gateway.find_by_id(id).await? {
            Some(_) => {
                tracing::warn!(%id, "Password change rejected: incorrect current password");
                Err(AppError::Core(CoreError::Forbidden(
                    INCORRECT_PASSWORD.to_string(),
                )))
            }
            None => Err(not_found(id)),
        }
    }

    pub async fn delete(&self, id: EntityId) -> AppResult<()> {
        if !self.gateway.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(%id, "User deleted");
        Ok(())
    }
}

fn not_found(id: EntityId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}
