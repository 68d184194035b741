pub mod introspection;
pub mod mutation;
pub mod query;
pub mod schema;
pub mod subscription;
pub mod types;

pub use schema::{DvgaSchema, Schemas, build_schema};

/// Per-request facts the resolvers record or act on.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    pub user_agent: Option<String>,
    pub ip_addr: Option<String>,
    pub bearer: Option<String>,
}

use axum::http::HeaderMap;

use crate::application::access;
use crate::bootstrap::app_context::AppContext;
use crate::domain::difficulty::Difficulty;
use crate::presentation::http::auth::cookie_from_headers;

/// Router state shared by the HTTP and WebSocket GraphQL endpoints.
#[derive(Clone)]
pub struct GraphQLState {
    pub ctx: AppContext,
    pub schemas: Schemas,
}

impl GraphQLState {
    pub fn new(ctx: AppContext) -> Self {
        let schemas = Schemas::build(&ctx);
        Self { ctx, schemas }
    }

    pub fn difficulty(&self, headers: &HeaderMap) -> Difficulty {
        let mode_header = headers
            .get(access::MODE_HEADER)
            .and_then(|v| v.to_str().ok());
        let cookie = cookie_from_headers(headers, access::SESSION_COOKIE);
        access::resolve_difficulty(self.ctx.session_signer(), mode_header, cookie.as_deref())
    }
}
