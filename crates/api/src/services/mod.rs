//! Entity services.
//!
//! Services sit between the handlers and the persistence gateway: they turn
//! "no such row" outcomes into [`CoreError::NotFound`](musiclib_core::error::CoreError)
//! and enforce the password check before a user mutation.

pub mod catalog;
pub mod user;

use musiclib_db::models::album::Album;
use musiclib_db::models::artist::Artist;
use musiclib_db::models::track::Track;

pub use catalog::CatalogService;
pub use user::UserService;

pub type TrackService = CatalogService<Track>;
pub type ArtistService = CatalogService<Artist>;
pub type AlbumService = CatalogService<Album>;
