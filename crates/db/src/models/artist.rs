//! Artist entity model and DTOs.

use musiclib_core::error::CoreError;
use musiclib_core::types::EntityId;
use musiclib_core::validation::{required, validate_input};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::gateway::CatalogRecord;

/// A row from the `artists` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Artist {
    pub id: EntityId,
    pub name: String,
    pub grammy: bool,
}

/// Request body for both `POST /artist` and `PUT /artist/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ArtistPayload {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
    #[validate(required(message = "grammy is required"))]
    pub grammy: Option<bool>,
}

/// Validated artist fields used for insert and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArtist {
    pub name: String,
    pub grammy: bool,
}

impl TryFrom<ArtistPayload> for NewArtist {
    type Error = CoreError;

    fn try_from(payload: ArtistPayload) -> Result<Self, Self::Error> {
        validate_input(&payload)?;
        Ok(Self {
            name: required(payload.name, "name")?,
            grammy: required(payload.grammy, "grammy")?,
        })
    }
}

impl CatalogRecord for Artist {
    type Input = NewArtist;

    const ENTITY: &'static str = "Artist";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_input(id: EntityId, input: &NewArtist) -> Self {
        Self {
            id,
            name: input.name.clone(),
            grammy: input.grammy,
        }
    }
}
