//! Generic CRUD service shared by tracks, artists, and albums.

use std::sync::Arc;

use musiclib_core::error::CoreError;
use musiclib_core::types::EntityId;
use musiclib_db::gateway::{CatalogGateway, CatalogRecord};

use crate::error::{AppError, AppResult};

pub struct CatalogService<R: CatalogRecord> {
    gateway: Arc<dyn CatalogGateway<R>>,
}

impl<R: CatalogRecord> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<R: CatalogRecord> CatalogService<R> {
    pub fn new(gateway: Arc<dyn CatalogGateway<R>>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> AppResult<Vec<R>> {
        Ok(self.gateway.list().await?)
    }

    pub async fn get(&self, id: EntityId) -> AppResult<R> {
        self.gateway
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<R>(id))
    }

    pub async fn create(&self, input: &R::Input) -> AppResult<R> {
        let record = self.gateway.create(input).await?;
        tracing::info!(entity = R::ENTITY, id = %record.id(), "Record created");
        Ok(record)
    }

    /// Full-field replacement of an existing record.
    pub async fn replace(&self, id: EntityId, input: &R::Input) -> AppResult<R> {
        let record = self
            .gateway
            .replace(id, input)
            .await?
            .ok_or_else(|| not_found::<R>(id))?;
        tracing::info!(entity = R::ENTITY, %id, "Record replaced");
        Ok(record)
    }

    pub async fn delete(&self, id: EntityId) -> AppResult<()> {
        if !self.gateway.delete(id).await? {
            return Err(not_found::<R>(id));
        }
        tracing::info!(entity = R::ENTITY, %id, "Record deleted");
        Ok(())
    }
}

fn not_found<R: CatalogRecord>(id: EntityId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: R::ENTITY,
        id,
    })
}
