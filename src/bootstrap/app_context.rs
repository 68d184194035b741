use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::stream::BoxStream;

use crate::application::ports::audit_repository::AuditRepository;
use crate::application::ports::owner_repository::OwnerRepository;
use crate::application::ports::paste_event_publisher::PasteEventPublisher;
use crate::application::ports::paste_repository::PasteRepository;
use crate::bootstrap::config::{Config, SUBSCRIPTION_PROTOCOL};
use crate::domain::paste::Paste;
use crate::infrastructure::auth::tokens::TokenService;
use crate::application::ports::session_signer::SessionSigner;
use crate::infrastructure::crypto::HmacSessionSigner;
use crate::infrastructure::db::repositories::audit_repository_sqlx::SqlxAuditRepository;
use crate::infrastructure::db::repositories::owner_repository_sqlx::SqlxOwnerRepository;
use crate::infrastructure::db::repositories::paste_repository_sqlx::SqlxPasteRepository;
use crate::infrastructure::db::{self, DbPool};
use crate::infrastructure::realtime::BroadcastPastePublisher;

const PASTE_EVENT_CAPACITY: usize = 256;

/// Everything a handler needs, built once in `main` and cloned into the router.
#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    pool: DbPool,
    paste_repo: Arc<dyn PasteRepository>,
    owner_repo: Arc<dyn OwnerRepository>,
    audit_repo: Arc<dyn AuditRepository>,
    paste_events: BroadcastPastePublisher,
    tokens: TokenService,
    session_signer: HmacSessionSigner,
    started_at: Instant,
}

impl AppServices {
    pub fn new(
        pool: DbPool,
        paste_repo: Arc<dyn PasteRepository>,
        owner_repo: Arc<dyn OwnerRepository>,
        audit_repo: Arc<dyn AuditRepository>,
        paste_events: BroadcastPastePublisher,
        tokens: TokenService,
        session_signer: HmacSessionSigner,
    ) -> Self {
        Self {
            pool,
            paste_repo,
            owner_repo,
            audit_repo,
            paste_events,
            tokens,
            session_signer,
            started_at: Instant::now(),
        }
    }

    pub fn sqlx(pool: DbPool, cfg: &Config) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(SqlxPasteRepository::new(pool.clone())),
            Arc::new(SqlxOwnerRepository::new(pool.clone())),
            Arc::new(SqlxAuditRepository::new(pool)),
            BroadcastPastePublisher::new(PASTE_EVENT_CAPACITY),
            TokenService::from_config(cfg),
            HmacSessionSigner::generate(),
        )
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    /// Opens the database and attaches the sqlx-backed services.
    pub async fn connect(cfg: Config) -> anyhow::Result<Self> {
        let pool = db::connect_pool(&cfg.database_url, cfg.track_modifications).await?;
        let services = AppServices::sqlx(pool, &cfg);
        Ok(Self::new(cfg, services))
    }

    pub fn pool(&self) -> DbPool {
        self.services.pool.clone()
    }

    pub fn paste_repo(&self) -> Arc<dyn PasteRepository> {
        self.services.paste_repo.clone()
    }

    pub fn owner_repo(&self) -> Arc<dyn OwnerRepository> {
        self.services.owner_repo.clone()
    }

    pub fn audit_repo(&self) -> Arc<dyn AuditRepository> {
        self.services.audit_repo.clone()
    }

    pub fn paste_events(&self) -> &dyn PasteEventPublisher {
        &self.services.paste_events
    }

    pub fn subscribe_pastes(&self) -> BoxStream<'static, Paste> {
        self.services.paste_events.subscribe()
    }

    pub fn tokens(&self) -> &TokenService {
        &self.services.tokens
    }

    pub fn session_signer(&self) -> &dyn SessionSigner {
        &self.services.session_signer
    }

    pub fn uptime(&self) -> Duration {
        self.services.started_at.elapsed()
    }

    pub fn subscription_protocol(&self) -> &'static str {
        SUBSCRIPTION_PROTOCOL
    }
}
