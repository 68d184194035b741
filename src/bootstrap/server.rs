use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::{Config, PARSER_NESTING_CEILING};
use crate::bootstrap::setup::{self, SetupStep};
use crate::presentation::router::build_router;

/// A configured application with its listener bound but not yet serving.
pub struct Prepared {
    pub ctx: AppContext,
    pub listener: TcpListener,
    pub app: Router,
}

impl Prepared {
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }
}

/// configure -> setup -> register handlers -> bind.
pub async fn prepare(cfg: Config, step: &dyn SetupStep) -> anyhow::Result<Prepared> {
    let ctx = AppContext::connect(cfg).await?;
    if let Some(report) = setup::prepare(&ctx, step).await? {
        info!(?report, "setup_complete");
    }

    if let Err(e) = tokio::fs::create_dir_all(&ctx.cfg.upload_dir).await {
        tracing::warn!(error = ?e, dir = %ctx.cfg.upload_dir, "Failed to create upload dir");
    }

    let app = build_router(ctx.clone());
    let listener = TcpListener::bind(ctx.cfg.bind_addr()).await?;
    Ok(Prepared { ctx, listener, app })
}

/// Serves until the process is killed.
pub async fn serve(prepared: Prepared) -> anyhow::Result<()> {
    let Prepared { ctx, listener, app } = prepared;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        url = %ctx.cfg.graphql_url(),
        subscriptions = ctx.subscription_protocol(),
        recursion_limit = ctx.cfg.recursion_limit.min(PARSER_NESTING_CEILING),
        "DVGA server running"
    );
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

pub async fn run(cfg: Config, step: &dyn SetupStep) -> anyhow::Result<()> {
    let prepared = prepare(cfg, step).await?;
    serve(prepared).await
}
