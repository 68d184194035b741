pub mod auth;
pub mod pastes;
