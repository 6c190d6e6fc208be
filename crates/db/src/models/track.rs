//! Track entity model and DTOs.

use musiclib_core::error::CoreError;
use musiclib_core::types::EntityId;
use musiclib_core::validation::{required, validate_input};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::gateway::CatalogRecord;

/// A row from the `tracks` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: EntityId,
    pub name: String,
    pub artist_id: Option<EntityId>,
    pub album_id: Option<EntityId>,
    /// Length in seconds; fractional values are kept as sent.
    pub duration: f64,
}

/// Request body for both `POST /track` and `PUT /track/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrackPayload {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
    pub artist_id: Option<EntityId>,
    pub album_id: Option<EntityId>,
    #[validate(required(message = "duration is required"))]
    pub duration: Option<f64>,
}

/// Validated track fields used for insert and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrack {
    pub name: String,
    pub artist_id: Option<EntityId>,
    pub album_id: Option<EntityId>,
    pub duration: f64,
}

impl TryFrom<TrackPayload> for NewTrack {
    type Error = CoreError;

    fn try_from(payload: TrackPayload) -> Result<Self, Self::Error> {
        validate_input(&payload)?;
        Ok(Self {
            name: required(payload.name, "name")?,
            artist_id: payload.artist_id,
            album_id: payload.album_id,
            duration: required(payload.duration, "duration")?,
        })
    }
}

impl CatalogRecord for Track {
    type Input = NewTrack;

    const ENTITY: &'static str = "Track";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_input(id: EntityId, input: &NewTrack) -> Self {
        Self {
            id,
            name: input.name.clone(),
            artist_id: input.artist_id,
            album_id: input.album_id,
            duration: input.duration,
        }
    }
}
