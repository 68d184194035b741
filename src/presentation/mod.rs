pub mod graphql;
pub mod http;
pub mod router;
pub mod ws;
