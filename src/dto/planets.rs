use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Planet;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpsertPlanetRequest {
    pub name: String,
    pub diameter: Option<String>,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlanetList {
    pub items: Vec<Planet>,
}
