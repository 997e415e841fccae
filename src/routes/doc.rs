use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        favorites::{AddFavoritePersonRequest, AddFavoritePlanetRequest, FavoritesList},
        people::{PersonList, UpsertPersonRequest},
        planets::{PlanetList, UpsertPlanetRequest},
        users::UserList,
    },
    models::{FavoritePerson, FavoritePlanet, Person, Planet, User},
    response::{ApiResponse, Meta},
    routes::{auth, favorites, health, params, people, planets, users},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        users::list_users,
        users::get_user,
        users::delete_user,
        people::list_people,
        people::get_person,
        people::create_person,
        people::replace_person,
        people::delete_person,
        planets::list_planets,
        planets::get_planet,
        planets::create_planet,
        planets::replace_planet,
        planets::delete_planet,
        favorites::list_favorites,
        favorites::add_favorite_person,
        favorites::remove_favorite_person,
        favorites::add_favorite_planet,
        favorites::remove_favorite_planet
    ),
    components(
        schemas(
            User,
            Person,
            Planet,
            FavoritePerson,
            FavoritePlanet,
            UserList,
            PersonList,
            PlanetList,
            FavoritesList,
            UpsertPersonRequest,
            UpsertPlanetRequest,
            AddFavoritePersonRequest,
            AddFavoritePlanetRequest,
            params::Pagination,
            Meta,
            ApiResponse<User>,
            ApiResponse<Person>,
            ApiResponse<Planet>,
            ApiResponse<UserList>,
            ApiResponse<PersonList>,
            ApiResponse<PlanetList>,
            ApiResponse<FavoritesList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Users", description = "User account endpoints"),
        (name = "People", description = "People catalog endpoints"),
        (name = "Planets", description = "Planet catalog endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
