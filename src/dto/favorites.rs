use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{FavoritePerson, FavoritePlanet};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddFavoritePersonRequest {
    pub people_id: Uuid,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddFavoritePlanetRequest {
    pub planet_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FavoritesList {
    pub people: Vec<FavoritePerson>,
    pub planets: Vec<FavoritePlanet>,
}
