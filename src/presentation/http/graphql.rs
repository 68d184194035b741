use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql::{BatchRequest, ServerError};
use async_graphql_axum::{GraphQLBatchRequest, GraphQLResponse};
use axum::{
    Router,
    extract::{ConnectInfo, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};

use crate::bootstrap::app_context::AppContext;
use crate::domain::difficulty::Difficulty;
use crate::presentation::graphql::introspection::requests_introspection;
use crate::presentation::graphql::{GraphQLState, RequestMeta};
use crate::presentation::http::auth::Bearer;

pub fn routes(state: GraphQLState) -> Router {
    Router::new()
        .route("/graphql", get(graphql_handler).post(graphql_handler))
        .route("/graphiql", get(graphiql))
        .with_state(state)
}

/// Single or batched operations over GET and POST.
pub async fn graphql_handler(
    State(state): State<GraphQLState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    bearer: Option<Bearer>,
    headers: HeaderMap,
    req: GraphQLBatchRequest,
) -> Response {
    let difficulty = state.difficulty(&headers);
    let batch = req.into_inner();

    if difficulty == Difficulty::Expert {
        if batch_len(&batch) > 1 {
            return reject("Batch queries are disabled in expert mode");
        }
        if requests(&batch).iter().any(|r| requests_introspection(&r.query)) {
            return reject("Introspection is disabled in expert mode");
        }
    }

    record_audits(&state.ctx, &batch).await;

    let meta = RequestMeta {
        user_agent: headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        ip_addr: connect_info.map(|ConnectInfo(addr)| addr.ip().to_string()),
        bearer: bearer.map(|b| b.0),
    };
    let batch = attach_meta(batch, meta);
    let schema = state.schemas.for_difficulty(difficulty);
    GraphQLResponse::from(schema.execute_batch(batch).await).into_response()
}

pub async fn graphiql() -> impl IntoResponse {
    Html(
        GraphiQLSource::build()
            .endpoint("/graphql")
            .subscription_endpoint("/subscriptions")
            .finish(),
    )
}

fn reject(message: &str) -> Response {
    let rejected = async_graphql::Response::from_errors(vec![ServerError::new(message, None)]);
    (StatusCode::BAD_REQUEST, GraphQLResponse::from(rejected)).into_response()
}

fn requests(batch: &BatchRequest) -> Vec<&async_graphql::Request> {
    match batch {
        BatchRequest::Single(req) => vec![req],
        BatchRequest::Batch(requests) => requests.iter().collect(),
    }
}

fn batch_len(batch: &BatchRequest) -> usize {
    match batch {
        BatchRequest::Single(_) => 1,
        BatchRequest::Batch(requests) => requests.len(),
    }
}

fn attach_meta(batch: BatchRequest, meta: RequestMeta) -> BatchRequest {
    match batch {
        BatchRequest::Single(req) => BatchRequest::Single(req.data(meta)),
        BatchRequest::Batch(requests) => BatchRequest::Batch(
            requests
                .into_iter()
                .map(|req| req.data(meta.clone()))
                .collect(),
        ),
    }
}

async fn record_audits(ctx: &AppContext, batch: &BatchRequest) {
    let audits = ctx.audit_repo();
    for req in requests(batch) {
        let operation = req.operation_name.as_deref().unwrap_or("No Operation");
        if let Err(e) = audits.record(operation, &req.query).await {
            tracing::warn!(error = ?e, "audit_record_failed");
        }
    }
}
