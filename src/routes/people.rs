use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::people::{PersonList, UpsertPersonRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Person,
    response::ApiResponse,
    routes::params::Pagination,
    services::people_service,
    state::AppState,
};

// Catalog reads are public; mutations need a token.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_people).post(create_person))
        .route(
            "/{people_id}",
            get(get_person).put(replace_person).delete(delete_person),
        )
}

#[utoipa::path(
    get,
    path = "/api/people",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "List people", body = ApiResponse<PersonList>)
    ),
    tag = "People"
)]
pub async fn list_people(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<PersonList>>> {
    let resp = people_service::list_people(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/people/{people_id}",
    params(
        ("people_id" = Uuid, Path, description = "People ID")
    ),
    responses(
        (status = 200, description = "Get person", body = ApiResponse<Person>),
        (status = 404, description = "Person not found")
    ),
    tag = "People"
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(people_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Person>>> {
    let resp = people_service::get_person(&state, people_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/people",
    request_body = UpsertPersonRequest,
    responses(
        (status = 200, description = "Person created", body = ApiResponse<Person>),
        (status = 409, description = "Duplicate name")
    ),
    security(("bearer_auth" = [])),
    tag = "People"
)]
pub async fn create_person(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<UpsertPersonRequest>,
) -> AppResult<Json<ApiResponse<Person>>> {
    let resp = people_service::create_person(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/people/{people_id}",
    params(
        ("people_id" = Uuid, Path, description = "People ID")
    ),
    request_body = UpsertPersonRequest,
    responses(
        (status = 200, description = "Person replaced", body = ApiResponse<Person>),
        (status = 404, description = "Person not found"),
        (status = 409, description = "Duplicate name")
    ),
    security(("bearer_auth" = [])),
    tag = "People"
)]
pub async fn replace_person(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(people_id): Path<Uuid>,
    Json(payload): Json<UpsertPersonRequest>,
) -> AppResult<Json<ApiResponse<Person>>> {
    let resp = people_service::replace_person(&state, people_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/people/{people_id}",
    params(
        ("people_id" = Uuid, Path, description = "People ID")
    ),
    responses(
        (status = 200, description = "Person deleted with its favorite rows", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Person not found")
    ),
    security(("bearer_auth" = [])),
    tag = "People"
)]
pub async fn delete_person(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(people_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = people_service::delete_person(&state, people_id).await?;
    Ok(Json(resp))
}
