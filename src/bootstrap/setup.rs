use async_trait::async_trait;
use rand::RngCore;
use tracing::info;

use crate::bootstrap::app_context::AppContext;
use crate::domain::owner::ANONYMOUS_OWNER;
use crate::domain::paste::NewPaste;
use crate::infrastructure::db;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupReport {
    pub owners_created: usize,
    pub pastes_created: usize,
}

/// One-shot initialization run before the listener is bound.
#[async_trait]
pub trait SetupStep: Send + Sync {
    async fn run(&self, ctx: &AppContext) -> anyhow::Result<SetupReport>;
}

/// Seeds the demo accounts and pastes unless owners already exist.
pub struct SeedDemoData;

const DEMO_PASTES: &[(&str, &str, bool, bool)] = &[
    (
        "Welcome",
        "Pastes are shared with everyone unless marked private.",
        true,
        false,
    ),
    (
        "Testing",
        "My first paste, please ignore.",
        true,
        false,
    ),
    (
        "Operator notes",
        "Backup job runs at 02:00. Database lives next to the binary.",
        false,
        false,
    ),
    (
        "Read once",
        "This paste is deleted the first time it is read.",
        false,
        true,
    ),
];

#[async_trait]
impl SetupStep for SeedDemoData {
    async fn run(&self, ctx: &AppContext) -> anyhow::Result<SetupReport> {
        let owners = ctx.owner_repo();
        if owners.count().await? > 0 {
            info!("setup_skipped_existing_data");
            return Ok(SetupReport::default());
        }

        let mut report = SetupReport::default();
        let mut admin_password = [0u8; 12];
        rand::thread_rng().fill_bytes(&mut admin_password);
        let admin = owners
            .create_owner("admin", &hex::encode(admin_password))
            .await?;
        let operator = owners.create_owner("operator", "password123").await?;
        owners.create_owner(ANONYMOUS_OWNER, "dvga").await?;
        report.owners_created = 3;

        let pastes = ctx.paste_repo();
        for (i, (title, content, public, burn)) in DEMO_PASTES.iter().enumerate() {
            let owner_id = if i % 2 == 0 { admin.id } else { operator.id };
            pastes
                .create(&NewPaste {
                    title: title.to_string(),
                    content: content.to_string(),
                    public: *public,
                    burn: *burn,
                    user_agent: Some("dvga-setup".into()),
                    ip_addr: Some("127.0.0.1".into()),
                    owner_id,
                })
                .await?;
            report.pastes_created += 1;
        }
        info!(
            owners = report.owners_created,
            pastes = report.pastes_created,
            "setup_seeded_demo_data"
        );
        Ok(report)
    }
}

/// Applies migrations, then runs `step` when setup is enabled.
pub async fn prepare(ctx: &AppContext, step: &dyn SetupStep) -> anyhow::Result<Option<SetupReport>> {
    db::migrate(&ctx.pool()).await?;
    if !ctx.cfg.run_setup {
        return Ok(None);
    }
    let report = step.run(ctx).await?;
    Ok(Some(report))
}
