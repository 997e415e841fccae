use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use axum_starwars_api::{
    config::AppConfig,
    db::{OrmConn, create_orm_conn, run_migrations},
    entity::{self, people, planet, user},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let user_id = ensure_user(&orm, "demo@example.com", "demo123").await?;
    seed_people(&orm).await?;
    seed_planets(&orm).await?;

    println!("Seed completed. Demo user ID: {user_id}");
    Ok(())
}

async fn ensure_user(orm: &OrmConn, email: &str, password: &str) -> anyhow::Result<Uuid> {
    if let Some(existing) = entity::User::find()
        .filter(user::Column::Email.eq(email))
        .one(orm)
        .await?
    {
        println!("User {email} already present");
        return Ok(existing.id);
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let created = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        password_hash: Set(password_hash),
        is_active: Set(true),
        created_at: NotSet,
    }
    .insert(orm)
    .await?;

    println!("Created user {email}");
    Ok(created.id)
}

async fn seed_people(orm: &OrmConn) -> anyhow::Result<()> {
    let entries = vec![
        ("Luke Skywalker", "172", "77", "blond", "fair", "blue", "19BBY", "male"),
        ("Leia Organa", "150", "49", "brown", "light", "brown", "19BBY", "female"),
        ("Darth Vader", "202", "136", "none", "white", "yellow", "41.9BBY", "male"),
        ("Obi-Wan Kenobi", "182", "77", "auburn, white", "fair", "blue-gray", "57BBY", "male"),
    ];

    for (name, height, mass, hair, skin, eye, birth, gender) in entries {
        let exists = entity::People::find()
            .filter(people::Column::Name.eq(name))
            .one(orm)
            .await?;
        if exists.is_some() {
            continue;
        }

        people::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            height: Set(Some(height.to_string())),
            mass: Set(Some(mass.to_string())),
            hair_color: Set(Some(hair.to_string())),
            skin_color: Set(Some(skin.to_string())),
            eye_color: Set(Some(eye.to_string())),
            birth_year: Set(Some(birth.to_string())),
            gender: Set(Some(gender.to_string())),
            created_at: NotSet,
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded people");
    Ok(())
}

async fn seed_planets(orm: &OrmConn) -> anyhow::Result<()> {
    let entries = vec![
        ("Tatooine", "10465", "23", "304", "1 standard", "200000", "arid", "desert", "1"),
        ("Alderaan", "12500", "24", "364", "1 standard", "2000000000", "temperate", "grasslands, mountains", "40"),
        ("Hoth", "7200", "23", "549", "1.1 standard", "unknown", "frozen", "tundra, ice caves", "100"),
        ("Dagobah", "8900", "23", "341", "N/A", "unknown", "murky", "swamp, jungles", "8"),
    ];

    for (name, diameter, rotation, orbital, gravity, population, climate, terrain, water) in
        entries
    {
        let exists = entity::Planet::find()
            .filter(planet::Column::Name.eq(name))
            .one(orm)
            .await?;
        if exists.is_some() {
            continue;
        }

        planet::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            diameter: Set(Some(diameter.to_string())),
            rotation_period: Set(Some(rotation.to_string())),
            orbital_period: Set(Some(orbital.to_string())),
            gravity: Set(Some(gravity.to_string())),
            population: Set(Some(population.to_string())),
            climate: Set(Some(climate.to_string())),
            terrain: Set(Some(terrain.to_string())),
            surface_water: Set(Some(water.to_string())),
            created_at: NotSet,
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded planets");
    Ok(())
}
