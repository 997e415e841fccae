use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};
use uuid::Uuid;

use crate::{
    dto::users::UserList,
    entity::{self, user},
    error::{AppError, AppResult},
    models::User,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_users(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<UserList>> {
    let (page, limit, offset) = pagination.normalize();
    let rows = entity::User::find()
        .order_by_asc(user::Column::Email)
        .offset(offset as u64)
        .limit(limit as u64)
        .all(&state.orm)
        .await?;

    let total = entity::User::find().count(&state.orm).await?;

    let items = rows.into_iter().map(User::from).collect();
    let meta = Meta::new(page, limit, total as i64);
    Ok(ApiResponse::success("OK", UserList { items }, Some(meta)))
}

pub async fn get_user(state: &AppState, id: Uuid) -> AppResult<ApiResponse<User>> {
    let user = entity::User::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::success("OK", user.into(), Some(Meta::empty())))
}

/// Deletes the account; favorite rows go with it via the cascade rules.
pub async fn delete_user(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = entity::User::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(user_id = %id, "user deleted");
    Ok(ApiResponse::success(
        "User deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
