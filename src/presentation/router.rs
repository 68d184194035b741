use axum::Router;
use axum::extract::MatchedPath;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::bootstrap::app_context::AppContext;
use crate::presentation::graphql::GraphQLState;
use crate::presentation::{http, ws};

/// The complete, statically known route table.
pub fn build_router(ctx: AppContext) -> Router {
    let gql = GraphQLState::new(ctx.clone());

    // Any origin may call the API, credentials included.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            ::http::Method::GET,
            ::http::Method::POST,
            ::http::Method::OPTIONS,
        ])
        .allow_headers([
            ::http::header::CONTENT_TYPE,
            ::http::header::AUTHORIZATION,
            ::http::HeaderName::from_static(crate::application::access::MODE_HEADER),
        ])
        .allow_credentials(true);

    Router::new()
        .merge(http::graphql::routes(gql.clone()))
        .merge(ws::subscriptions::routes(gql))
        .merge(http::difficulty::routes(ctx.clone()))
        .merge(http::health::routes(ctx.clone()))
        .nest_service("/static", ServeDir::new(&ctx.cfg.static_dir))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &::http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}
