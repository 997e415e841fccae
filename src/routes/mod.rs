use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod doc;
pub mod favorites;
pub mod health;
pub mod params;
pub mod people;
pub mod planets;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/people", people::router())
        .nest("/planets", planets::router())
        .nest("/favorites", favorites::router())
}
