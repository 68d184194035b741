use async_graphql::http::WebSocketProtocols;
use async_graphql_axum::{GraphQLProtocol, GraphQLWebSocket};
use axum::{
    Router,
    extract::{State, WebSocketUpgrade},
    http::{HeaderMap, header},
    response::Response,
    routing::get,
};

use crate::presentation::graphql::GraphQLState;

pub fn routes(state: GraphQLState) -> Router {
    Router::new()
        .route("/subscriptions", get(graphql_ws_handler))
        .with_state(state)
}

/// Upgrades to GraphQL over WebSocket, speaking `graphql-ws` or
/// `graphql-transport-ws`, whichever the client lists first.
pub async fn graphql_ws_handler(
    State(state): State<GraphQLState>,
    headers: HeaderMap,
    protocol: GraphQLProtocol,
    websocket: WebSocketUpgrade,
) -> Response {
    let schema = state
        .schemas
        .for_difficulty(state.difficulty(&headers))
        .clone();
    let negotiated = negotiated_protocol(&headers).unwrap_or(state.ctx.subscription_protocol());
    websocket
        .protocols([negotiated])
        .on_upgrade(move |stream| GraphQLWebSocket::new(stream, schema, protocol).serve())
}

/// First client-offered sub-protocol we can serve; the same choice the
/// `GraphQLProtocol` extractor makes, so the reply matches what is spoken.
fn negotiated_protocol(headers: &HeaderMap) -> Option<&'static str> {
    headers
        .get(header::SEC_WEBSOCKET_PROTOCOL)
        .and_then(|v| v.to_str().ok())?
        .split(',')
        .find_map(|p| p.trim().parse::<WebSocketProtocols>().ok())
        .map(|p| p.sec_websocket_protocol())
}
