//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod album_repo;
pub mod artist_repo;
pub mod track_repo;
pub mod user_repo;

pub use album_repo::AlbumRepo;
pub use artist_repo::ArtistRepo;
pub use track_repo::TrackRepo;
pub use user_repo::UserRepo;
