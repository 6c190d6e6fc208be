//! Repository for the `albums` table.

use musiclib_core::types::EntityId;
use sqlx::PgPool;

use crate::models::album::{Album, NewAlbum};

const COLUMNS: &str = "id, name, year, artist_id";

/// Provides CRUD operations for albums.
pub struct AlbumRepo;

impl AlbumRepo {
    pub async fn create(pool: &PgPool, input: &NewAlbum) -> Result<Album, sqlx::Error> {
        let query = format!(
            "INSERT INTO albums (name, year, artist_id) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(&input.name)
            .bind(input.year)
            .bind(input.artist_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE id = $1");
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums");
        sqlx::query_as::<_, Album>(&query).fetch_all(pool).await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: EntityId,
        input: &NewAlbum,
    ) -> Result<Option<Album>, sqlx::Error> {
        let query = format!(
            "UPDATE albums SET name = $2, year = $3, artist_id = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.year)
            .bind(input.artist_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
