//! Handlers for the catalog resources (`/track`, `/artist`, `/album`).
//!
//! The three resources share one request pattern, so the handlers are
//! generic over [`CatalogResource`]. Every id-addressed handler parses the
//! identifier before the body and before any gateway call.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use musiclib_core::error::CoreError;
use musiclib_core::validation::parse_entity_id;
use musiclib_db::gateway::CatalogRecord;
use musiclib_db::models::album::{Album, AlbumPayload, NewAlbum};
use musiclib_db::models::artist::{Artist, ArtistPayload, NewArtist};
use musiclib_db::models::track::{NewTrack, Track, TrackPayload};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppResult;
use crate::services::CatalogService;
use crate::state::AppState;

/// A catalog record exposed over HTTP.
pub trait CatalogResource: CatalogRecord + Serialize {
    /// Request body accepted by create and replace.
    type Payload: DeserializeOwned + Send + 'static;

    /// Shape-validate a payload into the gateway's write model.
    fn into_input(payload: Self::Payload) -> Result<Self::Input, CoreError>;

    fn service(state: &AppState) -> &CatalogService<Self>;
}

impl CatalogResource for Track {
    type Payload = TrackPayload;

    fn into_input(payload: TrackPayload) -> Result<NewTrack, CoreError> {
        NewTrack::try_from(payload)
    }

    fn service(state: &AppState) -> &CatalogService<Self> {
        &state.tracks
    }
}

impl CatalogResource for Artist {
    type Payload = ArtistPayload;

    fn into_input(payload: ArtistPayload) -> Result<NewArtist, CoreError> {
        NewArtist::try_from(payload)
    }

    fn service(state: &AppState) -> &CatalogService<Self> {
        &state.artists
    }
}

impl CatalogResource for Album {
    type Payload = AlbumPayload;

    fn into_input(payload: AlbumPayload) -> Result<NewAlbum, CoreError> {
        NewAlbum::try_from(payload)
    }

    fn service(state: &AppState) -> &CatalogService<Self> {
        &state.albums
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /{resource}
pub async fn list<R: CatalogResource>(State(state): State<AppState>) -> AppResult<Json<Vec<R>>> {
    let records = R::service(&state).list().await?;
    Ok(Json(records))
}

/// POST /{resource}
pub async fn create<R: CatalogResource>(
    State(state): State<AppState>,
    body: Result<Json<R::Payload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<R>)> {
    let Json(payload) = body?;
    let input = R::into_input(payload)?;
    let record = R::service(&state).create(&input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /{resource}/{id}
pub async fn get_by_id<R: CatalogResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<R>> {
    let id = parse_entity_id(&id)?;
    let record = R::service(&state).get(id).await?;
    Ok(Json(record))
}

/// PUT /{resource}/{id}
///
/// Full replacement: the body must pass the same validation as create.
pub async fn replace<R: CatalogResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<R::Payload>, JsonRejection>,
) -> AppResult<Json<R>> {
    let id = parse_entity_id(&id)?;
    let Json(payload) = body?;
    let input = R::into_input(payload)?;
    let record = R::service(&state).replace(id, &input).await?;
    Ok(Json(record))
}

/// DELETE /{resource}/{id}
pub async fn delete<R: CatalogResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_entity_id(&id)?;
    R::service(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
