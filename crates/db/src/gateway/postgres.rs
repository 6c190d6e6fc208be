//! PostgreSQL gateway backed by the `sqlx` repositories.

use async_trait::async_trait;
use musiclib_core::types::EntityId;

use super::{CatalogGateway, GatewayResult, UserGateway};
use crate::models::album::{Album, NewAlbum};
use crate::models::artist::{Artist, NewArtist};
use crate::models::track::{NewTrack, Track};
use crate::models::user::{NewUser, PasswordChange, User};
use crate::repositories::{AlbumRepo, ArtistRepo, TrackRepo, UserRepo};
use crate::DbPool;

/// Shares one pool across every entity family.
#[derive(Debug, Clone)]
pub struct PgGateway {
    pool: DbPool,
}

impl PgGateway {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Implements [`CatalogGateway`] for a record type by forwarding to its repo.
macro_rules! catalog_via_repo {
    ($record:ty, $input:ty, $repo:ident) => {
        #[async_trait]
        impl CatalogGateway<$record> for PgGateway {
            async fn list(&self) -> GatewayResult<Vec<$record>> {
                $repo::list(&self.pool).await
            }

            async fn find_by_id(&self, id: EntityId) -> GatewayResult<Option<$record>> {
                $repo::find_by_id(&self.pool, id).await
            }

            async fn create(&self, input: &$input) -> GatewayResult<$record> {
                $repo::create(&self.pool, input).await
            }

            async fn replace(
                &self,
                id: EntityId,
                input: &$input,
            ) -> GatewayResult<Option<$record>> {
                $repo::replace(&self.pool, id, input).await
            }

            async fn delete(&self, id: EntityId) -> GatewayResult<bool> {
                $repo::delete(&self.pool, id).await
            }
        }
    };
}

catalog_via_repo!(Track, NewTrack, TrackRepo);
catalog_via_repo!(Artist, NewArtist, ArtistRepo);
catalog_via_repo!(Album, NewAlbum, AlbumRepo);

#[async_trait]
impl UserGateway for PgGateway {
    async fn list(&self) -> GatewayResult<Vec<User>> {
        UserRepo::list(&self.pool).await
    }

    async fn find_by_id(&self, id: EntityId) -> GatewayResult<Option<User>> {
        UserRepo::find_by_id(&self.pool, id).await
    }

    async fn create(&self, input: &NewUser) -> GatewayResult<User> {
        UserRepo::create(&self.pool, input).await
    }

    async fn change_password(
        &self,
        id: EntityId,
        change: &PasswordChange,
    ) -> GatewayResult<Option<User>> {
        UserRepo::update_password_if_matches(
            &self.pool,
            id,
            &change.old_password,
            &change.new_password,
        )
        .await
    }

    async fn delete(&self, id: EntityId) -> GatewayResult<bool> {
        UserRepo::delete(&self.pool, id).await
    }
}
