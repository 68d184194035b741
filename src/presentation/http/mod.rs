pub mod auth;
pub mod difficulty;
pub mod graphql;
pub mod health;
