use std::sync::Arc;

use musiclib_db::gateway::{Gateways, Storage};

use crate::config::ServerConfig;
use crate::services::{AlbumService, ArtistService, TrackService, UserService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (every service only holds an `Arc` to its gateway).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Backend the gateways were built over (reported by `/health`).
    pub storage: Storage,
    pub tracks: TrackService,
    pub artists: ArtistService,
    pub albums: AlbumService,
    pub users: UserService,
}

impl AppState {
    /// Wire one service per entity family onto its gateway.
    pub fn new(config: ServerConfig, gateways: Gateways) -> Self {
        Self {
            config: Arc::new(config),
            storage: gateways.storage,
            tracks: TrackService::new(gateways.tracks),
            artists: ArtistService::new(gateways.artists),
            albums: AlbumService::new(gateways.albums),
            users: UserService::new(gateways.users),
        }
    }
}
