pub mod catalog;
pub mod health;
pub mod user;

use axum::Router;
use musiclib_db::models::album::Album;
use musiclib_db::models::artist::Artist;
use musiclib_db::models::track::Track;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /track          list, create
/// /track/{id}     get, replace, delete
///
/// /artist         list, create
/// /artist/{id}    get, replace, delete
///
/// /album          list, create
/// /album/{id}     get, replace, delete
///
/// /user           list, create
/// /user/{id}      get, change password, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/track", catalog::router::<Track>())
        .nest("/artist", catalog::router::<Artist>())
        .nest("/album", catalog::router::<Album>())
        .nest("/user", user::router())
}
