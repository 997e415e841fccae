pub mod favorite_people;
pub mod favorite_planet;
pub mod people;
pub mod planet;
pub mod user;

pub use favorite_people::Entity as FavoritePeople;
pub use favorite_planet::Entity as FavoritePlanet;
pub use people::Entity as People;
pub use planet::Entity as Planet;
pub use user::Entity as User;
