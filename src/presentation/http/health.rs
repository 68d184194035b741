use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

use crate::bootstrap::app_context::AppContext;

/// Liveness plus a sqlite round-trip; `degraded` when the database is unreachable.
pub async fn health(State(ctx): State<AppContext>) -> Json<Value> {
    let db_ok = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&ctx.pool())
        .await
        .is_ok();
    if !db_ok {
        tracing::warn!("health_check_db_unreachable");
    }
    Json(json!({
        "status": if db_ok { "ok" } else { "degraded" },
        "uptime_secs": ctx.uptime().as_secs(),
    }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new().route("/health", get(health)).with_state(ctx)
}
