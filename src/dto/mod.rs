pub mod auth;
pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;
