use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::planets::{PlanetList, UpsertPlanetRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Planet,
    response::ApiResponse,
    routes::params::Pagination,
    services::planet_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_planets).post(create_planet))
        .route(
            "/{planet_id}",
            get(get_planet).put(replace_planet).delete(delete_planet),
        )
}

#[utoipa::path(
    get,
    path = "/api/planets",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "List planets", body = ApiResponse<PlanetList>)
    ),
    tag = "Planets"
)]
pub async fn list_planets(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<PlanetList>>> {
    let resp = planet_service::list_planets(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/planets/{planet_id}",
    params(
        ("planet_id" = Uuid, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = ApiResponse<Planet>),
        (status = 404, description = "Planet not found")
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Planet>>> {
    let resp = planet_service::get_planet(&state, planet_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/planets",
    request_body = UpsertPlanetRequest,
    responses(
        (status = 200, description = "Planet created", body = ApiResponse<Planet>),
        (status = 409, description = "Duplicate name")
    ),
    security(("bearer_auth" = [])),
    tag = "Planets"
)]
pub async fn create_planet(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<UpsertPlanetRequest>,
) -> AppResult<Json<ApiResponse<Planet>>> {
    let resp = planet_service::create_planet(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/planets/{planet_id}",
    params(
        ("planet_id" = Uuid, Path, description = "Planet ID")
    ),
    request_body = UpsertPlanetRequest,
    responses(
        (status = 200, description = "Planet replaced", body = ApiResponse<Planet>),
        (status = 404, description = "Planet not found"),
        (status = 409, description = "Duplicate name")
    ),
    security(("bearer_auth" = [])),
    tag = "Planets"
)]
pub async fn replace_planet(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(planet_id): Path<Uuid>,
    Json(payload): Json<UpsertPlanetRequest>,
) -> AppResult<Json<ApiResponse<Planet>>> {
    let resp = planet_service::replace_planet(&state, planet_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/planets/{planet_id}",
    params(
        ("planet_id" = Uuid, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet deleted with its favorite rows", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Planet not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Planets"
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(planet_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = planet_service::delete_planet(&state, planet_id).await?;
    Ok(Json(resp))
}
