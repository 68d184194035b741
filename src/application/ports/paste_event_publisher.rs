use async_trait::async_trait;

use crate::domain::paste::Paste;

#[async_trait]
pub trait PasteEventPublisher: Send + Sync {
    async fn publish(&self, paste: &Paste) -> anyhow::Result<()>;
}
