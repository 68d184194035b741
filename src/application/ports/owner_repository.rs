use async_trait::async_trait;

use crate::domain::owner::Owner;

#[async_trait]
pub trait OwnerRepository: Send + Sync {
    async fn create_owner(&self, username: &str, password: &str) -> anyhow::Result<Owner>;
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<Owner>>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Owner>>;
    async fn list(&self, id: Option<i64>) -> anyhow::Result<Vec<Owner>>;
    async fn count(&self) -> anyhow::Result<i64>;
}
