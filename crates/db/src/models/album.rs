//! Album entity model and DTOs.

use musiclib_core::error::CoreError;
use musiclib_core::types::EntityId;
use musiclib_core::validation::{required, validate_input};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::gateway::CatalogRecord;

/// A row from the `albums` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: EntityId,
    pub name: String,
    pub year: i32,
    pub artist_id: Option<EntityId>,
}

/// Request body for both `POST /album` and `PUT /album/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AlbumPayload {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
    #[validate(required(message = "year is required"))]
    pub year: Option<i32>,
    pub artist_id: Option<EntityId>,
}

/// Validated album fields used for insert and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlbum {
    pub name: String,
    pub year: i32,
    pub artist_id: Option<EntityId>,
}

impl TryFrom<AlbumPayload> for NewAlbum {
    type Error = CoreError;

    fn try_from(payload: AlbumPayload) -> Result<Self, Self::Error> {
        validate_input(&payload)?;
        Ok(Self {
            name: required(payload.name, "name")?,
            year: required(payload.year, "year")?,
            artist_id: payload.artist_id,
        })
    }
}

impl CatalogRecord for Album {
    type Input = NewAlbum;

    const ENTITY: &'static str = "Album";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_input(id: EntityId, input: &NewAlbum) -> Self {
        Self {
            id,
            name: input.name.clone(),
            year: input.year,
            artist_id: input.artist_id,
        }
    }
}
