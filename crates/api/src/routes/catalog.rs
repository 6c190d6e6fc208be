//! Route definitions shared by the catalog resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog::{self, CatalogResource};
use crate::state::AppState;

/// Routes mounted at `/track`, `/artist`, or `/album`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> replace
/// DELETE /{id}   -> delete
/// ```
pub fn router<R: CatalogResource>() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list::<R>).post(catalog::create::<R>))
        .route(
            "/{id}",
            get(catalog::get_by_id::<R>)
                .put(catalog::replace::<R>)
                .delete(catalog::delete::<R>),
        )
}
