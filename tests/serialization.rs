use chrono::Utc;
use uuid::Uuid;

use axum_starwars_api::{
    entity,
    models::{FavoritePerson, FavoritePlanet, Person, User},
};

fn sample_user() -> entity::user::Model {
    entity::user::Model {
        id: Uuid::new_v4(),
        email: "leia@rebellion.org".into(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$secret".into(),
        is_active: true,
        created_at: Utc::now().fixed_offset(),
    }
}

fn sample_person(name: &str) -> entity::people::Model {
    entity::people::Model {
        id: Uuid::new_v4(),
        name: name.into(),
        height: Some("172".into()),
        mass: None,
        hair_color: Some("blond".into()),
        skin_color: None,
        eye_color: Some("blue".into()),
        birth_year: None,
        gender: Some("male".into()),
        created_at: Utc::now().fixed_offset(),
    }
}

#[test]
fn user_serialization_never_exposes_password() {
    let user = User::from(sample_user());
    let value = serde_json::to_value(&user).expect("serialize user");
    let obj = value.as_object().expect("user is a json object");

    assert_eq!(obj["email"], "leia@rebellion.org");
    assert_eq!(obj["is_active"], true);
    assert!(!obj.contains_key("password"));
    assert!(!obj.contains_key("password_hash"));
}

#[test]
fn person_serialization_is_flat() {
    let person = Person::from(sample_person("Luke Skywalker"));
    let value = serde_json::to_value(&person).expect("serialize person");
    let obj = value.as_object().expect("person is a json object");

    assert_eq!(obj["name"], "Luke Skywalker");
    assert_eq!(obj["height"], "172");
    assert!(obj["mass"].is_null());
}

#[test]
fn favorite_person_denormalizes_related_name() {
    let person = sample_person("Darth Vader");
    let favorite = entity::favorite_people::Model {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        people_id: person.id,
        created_at: Utc::now().fixed_offset(),
    };

    let view = FavoritePerson::from_related(favorite, Some(&person));
    let value = serde_json::to_value(&view).expect("serialize favorite");
    assert_eq!(value["people_name"], "Darth Vader");
    assert_eq!(value["people_id"], serde_json::json!(person.id));
}

#[test]
fn favorite_person_name_is_null_without_relation() {
    let favorite = entity::favorite_people::Model {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        people_id: Uuid::new_v4(),
        created_at: Utc::now().fixed_offset(),
    };

    let view = FavoritePerson::from_related(favorite, None);
    let value = serde_json::to_value(&view).expect("serialize favorite");
    assert!(value["people_name"].is_null());
}

#[test]
fn favorite_planet_name_follows_relation() {
    let planet = entity::planet::Model {
        id: Uuid::new_v4(),
        name: "Tatooine".into(),
        diameter: Some("10465".into()),
        rotation_period: None,
        orbital_period: None,
        gravity: None,
        population: None,
        climate: Some("arid".into()),
        terrain: Some("desert".into()),
        surface_water: None,
        created_at: Utc::now().fixed_offset(),
    };
    let favorite = entity::favorite_planet::Model {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        planet_id: planet.id,
        created_at: Utc::now().fixed_offset(),
    };

    let with_relation = FavoritePlanet::from_related(favorite.clone(), Some(&planet));
    assert_eq!(with_relation.planet_name.as_deref(), Some("Tatooine"));

    let without_relation = FavoritePlanet::from_related(favorite, None);
    assert_eq!(without_relation.planet_name, None);
}
