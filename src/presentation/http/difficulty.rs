use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    routing::get,
};
use serde::Serialize;

use crate::application::access;
use crate::bootstrap::app_context::AppContext;
use crate::domain::difficulty::Difficulty;
use crate::presentation::http::auth::build_session_cookie;

#[derive(Debug, Serialize)]
pub struct DifficultyResp {
    pub difficulty: &'static str,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/difficulty/:level", get(set_difficulty))
        .with_state(ctx)
}

/// Stores the level in a session cookie signed with the per-process key.
pub async fn set_difficulty(
    State(ctx): State<AppContext>,
    Path(level): Path<String>,
) -> Result<(HeaderMap, Json<DifficultyResp>), StatusCode> {
    let level: Difficulty = level.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    let value = access::session_cookie_value(ctx.session_signer(), level).map_err(|e| {
        tracing::error!(error = ?e, "session_cookie_sign_failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let cookie = build_session_cookie(access::SESSION_COOKIE, &value);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&cookie).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?,
    );
    Ok((
        headers,
        Json(DifficultyResp {
            difficulty: level.as_str(),
        }),
    ))
}
