pub mod auth;
pub mod visit;
