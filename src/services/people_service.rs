use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::people::{PersonList, UpsertPersonRequest},
    entity::{self, people},
    error::{AppError, AppResult},
    models::Person,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_people(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<PersonList>> {
    let (page, limit, offset) = pagination.normalize();
    let rows = entity::People::find()
        .order_by_asc(people::Column::Name)
        .offset(offset as u64)
        .limit(limit as u64)
        .all(&state.orm)
        .await?;

    let total = entity::People::find().count(&state.orm).await?;

    let items = rows.into_iter().map(Person::from).collect();
    let meta = Meta::new(page, limit, total as i64);
    Ok(ApiResponse::success("OK", PersonList { items }, Some(meta)))
}

pub async fn get_person(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Person>> {
    let person = entity::People::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::success("OK", person.into(), Some(Meta::empty())))
}

pub async fn create_person(
    state: &AppState,
    payload: UpsertPersonRequest,
) -> AppResult<ApiResponse<Person>> {
    let duplicate = entity::People::find()
        .filter(people::Column::Name.eq(payload.name.as_str()))
        .one(&state.orm)
        .await?;
    if duplicate.is_some() {
        return Err(AppError::Conflict(
            "A person with this name already exists".to_string(),
        ));
    }

    let created = people::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        height: Set(payload.height),
        mass: Set(payload.mass),
        hair_color: Set(payload.hair_color),
        skin_color: Set(payload.skin_color),
        eye_color: Set(payload.eye_color),
        birth_year: Set(payload.birth_year),
        gender: Set(payload.gender),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Person created",
        created.into(),
        Some(Meta::empty()),
    ))
}

/// Full replacement of every descriptive field; there is no partial update.
pub async fn replace_person(
    state: &AppState,
    id: Uuid,
    payload: UpsertPersonRequest,
) -> AppResult<ApiResponse<Person>> {
    let existing = entity::People::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if payload.name != existing.name {
        let duplicate = entity::People::find()
            .filter(people::Column::Name.eq(payload.name.as_str()))
            .one(&state.orm)
            .await?;
        if duplicate.is_some() {
            return Err(AppError::Conflict(
                "A person with this name already exists".to_string(),
            ));
        }
    }

    let updated = people::ActiveModel {
        id: Set(id),
        name: Set(payload.name),
        height: Set(payload.height),
        mass: Set(payload.mass),
        hair_color: Set(payload.hair_color),
        skin_color: Set(payload.skin_color),
        eye_color: Set(payload.eye_color),
        birth_year: Set(payload.birth_year),
        gender: Set(payload.gender),
        created_at: NotSet,
    }
    .update(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Person updated",
        updated.into(),
        Some(Meta::empty()),
    ))
}

pub async fn delete_person(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = entity::People::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Person deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
