use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::audit_repository::AuditRepository;
use crate::domain::audit::Audit;
use crate::infrastructure::db::DbPool;

pub struct SqlxAuditRepository {
    pub pool: DbPool,
}

impl SqlxAuditRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditRepository for SqlxAuditRepository {
    async fn record(&self, operation: &str, query: &str) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO audits (gqloperation, gqlquery, timestamp) VALUES (?, ?, ?)")
            .bind(operation)
            .bind(query)
            .bind(chrono::Utc::now())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<Audit>> {
        let rows = sqlx::query("SELECT id, gqloperation, gqlquery, timestamp FROM audits ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .iter()
            .map(|r| Audit {
                id: r.get("id"),
                gqloperation: r.get("gqloperation"),
                gqlquery: r.get("gqlquery"),
                timestamp: r.get("timestamp"),
            })
            .collect())
    }
}
