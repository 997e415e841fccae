use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use uuid::Uuid;

use crate::{
    dto::favorites::{AddFavoritePersonRequest, AddFavoritePlanetRequest, FavoritesList},
    error::AppResult,
    middleware::auth::AuthUser,
    models::{FavoritePerson, FavoritePlanet},
    response::ApiResponse,
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_favorites))
        .route("/people", post(add_favorite_person))
        .route("/people/{people_id}", delete(remove_favorite_person))
        .route("/planets", post(add_favorite_planet))
        .route("/planets/{planet_id}", delete(remove_favorite_planet))
}

#[utoipa::path(
    get,
    path = "/api/favorites",
    responses(
        (status = 200, description = "Favorites of the authenticated user", body = ApiResponse<FavoritesList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<FavoritesList>>> {
    let resp = favorite_service::list_favorites(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/favorites/people",
    request_body = AddFavoritePersonRequest,
    responses(
        (status = 200, description = "Added to favorites", body = ApiResponse<FavoritePerson>),
        (status = 400, description = "Person not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<AddFavoritePersonRequest>,
) -> AppResult<Json<ApiResponse<FavoritePerson>>> {
    let resp = favorite_service::add_favorite_person(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/favorites/people/{people_id}",
    params(
        ("people_id" = Uuid, Path, description = "People ID")
    ),
    responses(
        (status = 200, description = "Removed from favorites", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Favorite not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    user: AuthUser,
    Path(people_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = favorite_service::remove_favorite_person(&state, &user, people_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/favorites/planets",
    request_body = AddFavoritePlanetRequest,
    responses(
        (status = 200, description = "Added to favorites", body = ApiResponse<FavoritePlanet>),
        (status = 400, description = "Planet not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<AddFavoritePlanetRequest>,
) -> AppResult<Json<ApiResponse<FavoritePlanet>>> {
    let resp = favorite_service::add_favorite_planet(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/favorites/planets/{planet_id}",
    params(
        ("planet_id" = Uuid, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Removed from favorites", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Favorite not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    user: AuthUser,
    Path(planet_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = favorite_service::remove_favorite_planet(&state, &user, planet_id).await?;
    Ok(Json(resp))
}
