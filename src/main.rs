use dotenvy::dotenv;

use dvga::bootstrap::config::Config;
use dvga::bootstrap::server;
use dvga::bootstrap::setup::SeedDemoData;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "dvga=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    tracing::info!(?cfg, "Starting DVGA");

    server::run(cfg, &SeedDemoData).await
}
