use async_trait::async_trait;

use crate::domain::audit::Audit;

#[async_trait]
pub trait AuditRepository: Send + Sync {
    async fn record(&self, operation: &str, query: &str) -> anyhow::Result<()>;
    async fn list(&self) -> anyhow::Result<Vec<Audit>>;
}
