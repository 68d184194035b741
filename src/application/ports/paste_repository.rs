use async_trait::async_trait;

use crate::domain::paste::{NewPaste, Paste};

#[async_trait]
pub trait PasteRepository: Send + Sync {
    /// `filter` is a raw SQL fragment matched against title and content.
    async fn list(
        &self,
        public: Option<bool>,
        limit: Option<i64>,
        filter: Option<&str>,
    ) -> anyhow::Result<Vec<Paste>>;
    async fn find(&self, id: Option<i64>, title: Option<&str>) -> anyhow::Result<Option<Paste>>;
    async fn search(&self, keyword: &str) -> anyhow::Result<Vec<Paste>>;
    async fn list_by_owner(&self, owner_id: i64) -> anyhow::Result<Vec<Paste>>;
    async fn create(&self, paste: &NewPaste) -> anyhow::Result<Paste>;
    async fn update(
        &self,
        id: i64,
        title: Option<&str>,
        content: Option<&str>,
    ) -> anyhow::Result<Option<Paste>>;
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}
