use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::planets::{PlanetList, UpsertPlanetRequest},
    entity::{self, planet},
    error::{AppError, AppResult},
    models::Planet,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_planets(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<PlanetList>> {
    let (page, limit, offset) = pagination.normalize();
    let rows = entity::Planet::find()
        .order_by_asc(planet::Column::Name)
        .offset(offset as u64)
        .limit(limit as u64)
        .all(&state.orm)
        .await?;

    let total = entity::Planet::find().count(&state.orm).await?;

    let items = rows.into_iter().map(Planet::from).collect();
    let meta = Meta::new(page, limit, total as i64);
    Ok(ApiResponse::success("OK", PlanetList { items }, Some(meta)))
}

pub async fn get_planet(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Planet>> {
    let planet = entity::Planet::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::success("OK", planet.into(), Some(Meta::empty())))
}

pub async fn create_planet(
    state: &AppState,
    payload: UpsertPlanetRequest,
) -> AppResult<ApiResponse<Planet>> {
    let duplicate = entity::Planet::find()
        .filter(planet::Column::Name.eq(payload.name.as_str()))
        .one(&state.orm)
        .await?;
    if duplicate.is_some() {
        return Err(AppError::Conflict(
            "A planet with this name already exists".to_string(),
        ));
    }

    let created = planet::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        diameter: Set(payload.diameter),
        rotation_period: Set(payload.rotation_period),
        orbital_period: Set(payload.orbital_period),
        gravity: Set(payload.gravity),
        population: Set(payload.population),
        climate: Set(payload.climate),
        terrain: Set(payload.terrain),
        surface_water: Set(payload.surface_water),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Planet created",
        created.into(),
        Some(Meta::empty()),
    ))
}

pub async fn replace_planet(
    state: &AppState,
    id: Uuid,
    payload: UpsertPlanetRequest,
) -> AppResult<ApiResponse<Planet>> {
    let existing = entity::Planet::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if payload.name != existing.name {
        let duplicate = entity::Planet::find()
            .filter(planet::Column::Name.eq(payload.name.as_str()))
            .one(&state.orm)
            .await?;
        if duplicate.is_some() {
            return Err(AppError::Conflict(
                "A planet with this name already exists".to_string(),
            ));
        }
    }

    let updated = planet::ActiveModel {
        id: Set(id),
        name: Set(payload.name),
        diameter: Set(payload.diameter),
        rotation_period: Set(payload.rotation_period),
        orbital_period: Set(payload.orbital_period),
        gravity: Set(payload.gravity),
        population: Set(payload.population),
        climate: Set(payload.climate),
        terrain: Set(payload.terrain),
        surface_water: Set(payload.surface_water),
        created_at: NotSet,
    }
    .update(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Planet updated",
        updated.into(),
        Some(Meta::empty()),
    ))
}

pub async fn delete_planet(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = entity::Planet::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Planet deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
