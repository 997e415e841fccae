use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    dto::favorites::{AddFavoritePersonRequest, AddFavoritePlanetRequest, FavoritesList},
    entity::{self, favorite_people, favorite_planet},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{FavoritePerson, FavoritePlanet},
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Both favorite lists of one user, each row denormalized with the
/// related catalog name.
pub async fn list_favorites(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<FavoritesList>> {
    let people_rows = entity::FavoritePeople::find()
        .filter(favorite_people::Column::UserId.eq(user.user_id))
        .order_by_desc(favorite_people::Column::CreatedAt)
        .find_also_related(entity::People)
        .all(&state.orm)
        .await?;

    let planet_rows = entity::FavoritePlanet::find()
        .filter(favorite_planet::Column::UserId.eq(user.user_id))
        .order_by_desc(favorite_planet::Column::CreatedAt)
        .find_also_related(entity::Planet)
        .all(&state.orm)
        .await?;

    let people = people_rows
        .into_iter()
        .map(|(fav, person)| FavoritePerson::from_related(fav, person.as_ref()))
        .collect();
    let planets = planet_rows
        .into_iter()
        .map(|(fav, planet)| FavoritePlanet::from_related(fav, planet.as_ref()))
        .collect();

    Ok(ApiResponse::success(
        "OK",
        FavoritesList { people, planets },
        Some(Meta::empty()),
    ))
}

pub async fn add_favorite_person(
    state: &AppState,
    user: &AuthUser,
    payload: AddFavoritePersonRequest,
) -> AppResult<ApiResponse<FavoritePerson>> {
    let person = entity::People::find_by_id(payload.people_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::BadRequest("Person not found".into()))?;

    let existing = entity::FavoritePeople::find()
        .filter(favorite_people::Column::UserId.eq(user.user_id))
        .filter(favorite_people::Column::PeopleId.eq(payload.people_id))
        .one(&state.orm)
        .await?;

    // Adding an existing favorite is a no-op; the unique constraint on
    // (user_id, people_id) backs this up at the database level.
    let favorite = if let Some(fav) = existing {
        fav
    } else {
        favorite_people::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user.user_id),
            people_id: Set(payload.people_id),
            created_at: NotSet,
        }
        .insert(&state.orm)
        .await?
    };

    Ok(ApiResponse::success(
        "Added to favorites",
        FavoritePerson::from_related(favorite, Some(&person)),
        Some(Meta::empty()),
    ))
}

pub async fn remove_favorite_person(
    state: &AppState,
    user: &AuthUser,
    people_id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = entity::FavoritePeople::delete_many()
        .filter(favorite_people::Column::UserId.eq(user.user_id))
        .filter(favorite_people::Column::PeopleId.eq(people_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Removed from favorites",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn add_favorite_planet(
    state: &AppState,
    user: &AuthUser,
    payload: AddFavoritePlanetRequest,
) -> AppResult<ApiResponse<FavoritePlanet>> {
    let planet = entity::Planet::find_by_id(payload.planet_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::BadRequest("Planet not found".into()))?;

    let existing = entity::FavoritePlanet::find()
        .filter(favorite_planet::Column::UserId.eq(user.user_id))
        .filter(favorite_planet::Column::PlanetId.eq(payload.planet_id))
        .one(&state.orm)
        .await?;

    let favorite = if let Some(fav) = existing {
        fav
    } else {
        favorite_planet::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user.user_id),
            planet_id: Set(payload.planet_id),
            created_at: NotSet,
        }
        .insert(&state.orm)
        .await?
    };

    Ok(ApiResponse::success(
        "Added to favorites",
        FavoritePlanet::from_related(favorite, Some(&planet)),
        Some(Meta::empty()),
    ))
}

pub async fn remove_favorite_planet(
    state: &AppState,
    user: &AuthUser,
    planet_id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = entity::FavoritePlanet::delete_many()
        .filter(favorite_planet::Column::UserId.eq(user.user_id))
        .filter(favorite_planet::Column::PlanetId.eq(planet_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Removed from favorites",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
