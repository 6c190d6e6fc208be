//! In-process gateway used by tests and by database-less local runs.
//!
//! Each conditional mutation runs under a single write-lock acquisition, so
//! the "row must exist" check and the write cannot interleave with another
//! request.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use musiclib_core::types::EntityId;
use tokio::sync::RwLock;

use super::{CatalogGateway, CatalogRecord, GatewayResult, UserGateway};
use crate::models::user::{NewUser, PasswordChange, User};

/// One catalog table keyed by id.
pub struct MemoryTable<R: CatalogRecord> {
    rows: RwLock<HashMap<EntityId, R>>,
}

impl<R: CatalogRecord> Default for MemoryTable<R> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<R: CatalogRecord> CatalogGateway<R> for MemoryTable<R> {
    async fn list(&self) -> GatewayResult<Vec<R>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EntityId) -> GatewayResult<Option<R>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn create(&self, input: &R::Input) -> GatewayResult<R> {
        let record = R::from_input(EntityId::new_v4(), input);
        self.rows.write().await.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn replace(&self, id: EntityId, input: &R::Input) -> GatewayResult<Option<R>> {
        let mut rows = self.rows.write().await;
        Ok(rows.get_mut(&id).map(|row| {
            *row = R::from_input(id, input);
            row.clone()
        }))
    }

    async fn delete(&self, id: EntityId) -> GatewayResult<bool> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }
}

/// The `users` table.
#[derive(Default)]
pub struct MemoryUsers {
    rows: RwLock<HashMap<EntityId, User>>,
}

#[async_trait]
impl UserGateway for MemoryUsers {
    async fn list(&self) -> GatewayResult<Vec<User>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EntityId) -> GatewayResult<Option<User>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn create(&self, input: &NewUser) -> GatewayResult<User> {
        let now = Utc::now();
        let user = User {
            id: EntityId::new_v4(),
            login: input.login.clone(),
            password: input.password.clone(),
            version: 1,
            created_at: now,
            updated_at: now,
        };
        self.rows.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn change_password(
        &self,
        id: EntityId,
        change: &PasswordChange,
    ) -> GatewayResult<Option<User>> {
        let mut rows = self.rows.write().await;
        let Some(user) = rows.get_mut(&id) else {
            return Ok(None);
        };
        if user.password != change.old_password {
            return Ok(None);
        }
        user.password.clone_from(&change.new_password);
        user.version += 1;
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: EntityId) -> GatewayResult<bool> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }
}
