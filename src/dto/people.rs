use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Person;

/// Full-replacement payload: used for both create and update, every
/// descriptive field is taken as-is.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpsertPersonRequest {
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PersonList {
    pub items: Vec<Person>,
}
