use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity;

/// API shape of an account. The password hash stays in the entity layer
/// and is never serialized.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::user::Model> for User {
    fn from(m: entity::user::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            is_active: m.is_active,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::people::Model> for Person {
    fn from(m: entity::people::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            height: m.height,
            mass: m.mass,
            hair_color: m.hair_color,
            skin_color: m.skin_color,
            eye_color: m.eye_color,
            birth_year: m.birth_year,
            gender: m.gender,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Planet {
    pub id: Uuid,
    pub name: String,
    pub diameter: Option<String>,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::planet::Model> for Planet {
    fn from(m: entity::planet::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            diameter: m.diameter,
            rotation_period: m.rotation_period,
            orbital_period: m.orbital_period,
            gravity: m.gravity,
            population: m.population,
            climate: m.climate,
            terrain: m.terrain,
            surface_water: m.surface_water,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

/// Favorite row denormalized with the related person's name,
/// `null` when the relation is absent.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoritePerson {
    pub id: Uuid,
    pub user_id: Uuid,
    pub people_id: Uuid,
    pub people_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl FavoritePerson {
    pub fn from_related(
        m: entity::favorite_people::Model,
        person: Option<&entity::people::Model>,
    ) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            people_id: m.people_id,
            people_name: person.map(|p| p.name.clone()),
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoritePlanet {
    pub id: Uuid,
    pub user_id: Uuid,
    pub planet_id: Uuid,
    pub planet_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl FavoritePlanet {
    pub fn from_related(
        m: entity::favorite_planet::Model,
        planet: Option<&entity::planet::Model>,
    ) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            planet_id: m.planet_id,
            planet_name: planet.map(|p| p.name.clone()),
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}
