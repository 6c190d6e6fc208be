//! Persistence gateway.
//!
//! Services talk to storage only through the traits in this module. Every
//! mutation is a single conditional operation: `replace` returns `None` and
//! `delete` returns `false` when the row is gone, so callers never need a
//! separate existence check before writing.
//!
//! Two backends implement the traits:
//! - [`postgres::PgGateway`] delegates to the `sqlx` repositories.
//! - [`memory::MemoryTable`] / [`memory::MemoryUsers`] keep rows in a
//!   `tokio::sync::RwLock<HashMap<..>>`.

use std::sync::Arc;

use async_trait::async_trait;
use musiclib_core::types::EntityId;

use crate::models::album::Album;
use crate::models::artist::Artist;
use crate::models::track::Track;
use crate::models::user::{NewUser, PasswordChange, User};
use crate::DbPool;

pub mod memory;
pub mod postgres;

/// Gateway operations surface the driver error unchanged; the in-memory
/// backend never fails.
pub type GatewayResult<T> = Result<T, sqlx::Error>;

/// A catalog row that is created and replaced wholesale from one validated
/// input type.
pub trait CatalogRecord: Clone + Send + Sync + 'static {
    /// Validated write model used for both create and full replacement.
    type Input: Send + Sync;

    /// Entity name used in not-found errors and log lines.
    const ENTITY: &'static str;

    fn id(&self) -> EntityId;

    /// Build the stored row for `input` under a freshly assigned `id`.
    fn from_input(id: EntityId, input: &Self::Input) -> Self;
}

/// CRUD access to one catalog table (tracks, artists, albums).
#[async_trait]
pub trait CatalogGateway<R: CatalogRecord>: Send + Sync {
    async fn list(&self) -> GatewayResult<Vec<R>>;

    async fn find_by_id(&self, id: EntityId) -> GatewayResult<Option<R>>;

    /// Insert a row; the gateway assigns the identifier.
    async fn create(&self, input: &R::Input) -> GatewayResult<R>;

    /// Replace every writable field. Returns `None` if no row has `id`.
    async fn replace(&self, id: EntityId, input: &R::Input) -> GatewayResult<Option<R>>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: EntityId) -> GatewayResult<bool>;
}

/// Access to the `users` table.
#[async_trait]
pub trait UserGateway: Send + Sync {
    async fn list(&self) -> GatewayResult<Vec<User>>;

    async fn find_by_id(&self, id: EntityId) -> GatewayResult<Option<User>>;

    async fn create(&self, input: &NewUser) -> GatewayResult<User>;

    /// Compare-and-set the password.
    ///
    /// Stores `change.new_password` and bumps `version` only when the user
    /// exists and its current password equals `change.old_password`.
    /// Returns `None` otherwise; the caller distinguishes the two cases.
    async fn change_password(
        &self,
        id: EntityId,
        change: &PasswordChange,
    ) -> GatewayResult<Option<User>>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: EntityId) -> GatewayResult<bool>;
}

/// Which backend a [`Gateways`] bundle was built over.
#[derive(Debug, Clone)]
pub enum Storage {
    Postgres(DbPool),
    Memory,
}

impl Storage {
    pub fn name(&self) -> &'static str {
        match self {
            Storage::Postgres(_) => "postgres",
            Storage::Memory => "memory",
        }
    }

    /// Whether the backing store is reachable.
    pub async fn is_healthy(&self) -> bool {
        match self {
            Storage::Postgres(pool) => crate::health_check(pool).await.is_ok(),
            Storage::Memory => true,
        }
    }
}

/// One gateway handle per entity family, built once at startup.
#[derive(Clone)]
pub struct Gateways {
    pub tracks: Arc<dyn CatalogGateway<Track>>,
    pub artists: Arc<dyn CatalogGateway<Artist>>,
    pub albums: Arc<dyn CatalogGateway<Album>>,
    pub users: Arc<dyn UserGateway>,
    pub storage: Storage,
}

impl Gateways {
    /// All families backed by one PostgreSQL pool.
    pub fn postgres(pool: DbPool) -> Self {
        let gateway = postgres::PgGateway::new(pool.clone());
        Self {
            tracks: Arc::new(gateway.clone()),
            artists: Arc::new(gateway.clone()),
            albums: Arc::new(gateway.clone()),
            users: Arc::new(gateway),
            storage: Storage::Postgres(pool),
        }
    }

    /// All families backed by empty in-process tables.
    pub fn in_memory() -> Self {
        Self {
            tracks: Arc::new(memory::MemoryTable::<Track>::default()),
            artists: Arc::new(memory::MemoryTable::<Artist>::default()),
            albums: Arc::new(memory::MemoryTable::<Album>::default()),
            users: Arc::new(memory::MemoryUsers::default()),
            storage: Storage::Memory,
        }
    }
}
