use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    Set, Statement,
};
use uuid::Uuid;

use axum_starwars_api::{
    db::{create_orm_conn, run_migrations},
    dto::{
        auth::RegisterRequest,
        favorites::{AddFavoritePersonRequest, AddFavoritePlanetRequest},
        people::UpsertPersonRequest,
        planets::UpsertPlanetRequest,
    },
    entity::{self, favorite_people, favorite_planet},
    error::AppError,
    middleware::auth::AuthUser,
    services::{auth_service, favorite_service, people_service, planet_service, user_service},
    state::AppState,
};

// Integration flow: register -> favorite a person and a planet -> cascade
// deletes keep the join tables consistent with their parents.
#[tokio::test]
async fn favorites_and_cascade_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url =
        match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                eprintln!(
                    "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
                );
                return Ok(());
            }
        };

    let state = setup_state(&database_url).await?;

    // Register a user; the same email twice must be rejected.
    let registered = auth_service::register_user(
        &state,
        RegisterRequest {
            email: "han@falcon.io".into(),
            password: "neversolo".into(),
        },
    )
    .await?;
    let user_id = registered.data.unwrap().id;

    let duplicate_email = auth_service::register_user(
        &state,
        RegisterRequest {
            email: "han@falcon.io".into(),
            password: "neversolo".into(),
        },
    )
    .await;
    assert!(matches!(duplicate_email, Err(AppError::Conflict(_))));

    // Seed one catalog row of each kind.
    let person = people_service::create_person(&state, person_payload("Luke Skywalker"))
        .await?
        .data
        .unwrap();
    let planet = planet_service::create_planet(&state, planet_payload("Tatooine"))
        .await?
        .data
        .unwrap();

    // Catalog names are unique on both sides.
    let duplicate_person_name =
        people_service::create_person(&state, person_payload("Luke Skywalker")).await;
    assert!(matches!(duplicate_person_name, Err(AppError::Conflict(_))));

    let duplicate_planet_name =
        planet_service::create_planet(&state, planet_payload("Tatooine")).await;
    assert!(matches!(duplicate_planet_name, Err(AppError::Conflict(_))));

    let user = AuthUser { user_id };

    // Favorite the person; the view carries the denormalized name.
    let favorite = favorite_service::add_favorite_person(
        &state,
        &user,
        AddFavoritePersonRequest {
            people_id: person.id,
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(favorite.people_name.as_deref(), Some("Luke Skywalker"));

    // Adding the same favorite again returns the existing row.
    let again = favorite_service::add_favorite_person(
        &state,
        &user,
        AddFavoritePersonRequest {
            people_id: person.id,
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(again.id, favorite.id);

    // A second row for the same (user, people) pair violates the unique
    // constraint when inserted directly.
    let direct_duplicate = favorite_people::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        people_id: Set(person.id),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await;
    assert!(direct_duplicate.is_err());

    favorite_service::add_favorite_planet(
        &state,
        &user,
        AddFavoritePlanetRequest {
            planet_id: planet.id,
        },
    )
    .await?;

    // Same story for the (user, planet) pair.
    let direct_planet_duplicate = favorite_planet::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        planet_id: Set(planet.id),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await;
    assert!(direct_planet_duplicate.is_err());

    let favorites = favorite_service::list_favorites(&state, &user)
        .await?
        .data
        .unwrap();
    assert_eq!(favorites.people.len(), 1);
    assert_eq!(favorites.planets.len(), 1);

    // Deleting the person cascades its favorite rows away.
    people_service::delete_person(&state, person.id).await?;
    let favorites = favorite_service::list_favorites(&state, &user)
        .await?
        .data
        .unwrap();
    assert!(favorites.people.is_empty());
    assert_eq!(favorites.planets.len(), 1);

    // Deleting the user cascades the remaining favorites; the planet stays.
    user_service::delete_user(&state, user_id).await?;
    let leftover = entity::FavoritePlanet::find()
        .filter(favorite_planet::Column::UserId.eq(user_id))
        .all(&state.orm)
        .await?;
    assert!(leftover.is_empty());

    let planet_still_there = entity::Planet::find_by_id(planet.id).one(&state.orm).await?;
    assert!(planet_still_there.is_some());

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE favorite_people, favorite_planet, people, planet, \"user\" RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(AppState { orm })
}

fn person_payload(name: &str) -> UpsertPersonRequest {
    UpsertPersonRequest {
        name: name.into(),
        height: Some("172".into()),
        mass: Some("77".into()),
        hair_color: Some("blond".into()),
        skin_color: Some("fair".into()),
        eye_color: Some("blue".into()),
        birth_year: Some("19BBY".into()),
        gender: Some("male".into()),
    }
}

fn planet_payload(name: &str) -> UpsertPlanetRequest {
    UpsertPlanetRequest {
        name: name.into(),
        diameter: Some("10465".into()),
        rotation_period: Some("23".into()),
        orbital_period: Some("304".into()),
        gravity: Some("1 standard".into()),
        population: Some("200000".into()),
        climate: Some("arid".into()),
        terrain: Some("desert".into()),
        surface_water: Some("1".into()),
    }
}
