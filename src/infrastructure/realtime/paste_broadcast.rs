use async_trait::async_trait;
use futures_util::{StreamExt, stream::BoxStream};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use crate::application::ports::paste_event_publisher::PasteEventPublisher;
use crate::domain::paste::Paste;

#[derive(Clone)]
pub struct BroadcastPastePublisher {
    sender: broadcast::Sender<Paste>,
}

impl BroadcastPastePublisher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Lagged receivers silently skip the pastes they missed.
    pub fn subscribe(&self) -> BoxStream<'static, Paste> {
        BroadcastStream::new(self.sender.subscribe())
            .filter_map(|evt| async move { evt.ok() })
            .boxed()
    }
}

#[async_trait]
impl PasteEventPublisher for BroadcastPastePublisher {
    async fn publish(&self, paste: &Paste) -> anyhow::Result<()> {
        match self.sender.send(paste.clone()) {
            Ok(_) => Ok(()),
            // Nobody subscribed yet.
            Err(broadcast::error::SendError(_)) => Ok(()),
        }
    }
}
