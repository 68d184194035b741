use crate::application::ports::owner_repository::OwnerRepository;
use crate::application::ports::paste_event_publisher::PasteEventPublisher;
use crate::application::ports::paste_repository::PasteRepository;
use crate::domain::owner::ANONYMOUS_OWNER;
use crate::domain::paste::{NewPaste, Paste};

pub struct CreatePaste<'a, P, O, E>
where
    P: PasteRepository + ?Sized,
    O: OwnerRepository + ?Sized,
    E: PasteEventPublisher + ?Sized,
{
    pub pastes: &'a P,
    pub owners: &'a O,
    pub events: &'a E,
}

#[derive(Debug, Clone, Default)]
pub struct CreatePasteRequest {
    pub title: String,
    pub content: String,
    pub public: bool,
    pub burn: bool,
    pub user_agent: Option<String>,
    pub ip_addr: Option<String>,
    /// Username taken from a verified access token, if the caller sent one.
    pub identity: Option<String>,
}

impl<'a, P, O, E> CreatePaste<'a, P, O, E>
where
    P: PasteRepository + ?Sized,
    O: OwnerRepository + ?Sized,
    E: PasteEventPublisher + ?Sized,
{
    pub async fn execute(&self, req: CreatePasteRequest) -> anyhow::Result<Paste> {
        let owner_id = resolve_owner_id(self.owners, req.identity.as_deref()).await?;
        let paste = self
            .pastes
            .create(&NewPaste {
                title: req.title,
                content: req.content,
                public: req.public,
                burn: req.burn,
                user_agent: req.user_agent,
                ip_addr: req.ip_addr,
                owner_id,
            })
            .await?;
        self.events.publish(&paste).await?;
        Ok(paste)
    }
}

/// Falls back to the shared anonymous account when no known identity is given.
pub async fn resolve_owner_id<O: OwnerRepository + ?Sized>(
    owners: &O,
    identity: Option<&str>,
) -> anyhow::Result<i64> {
    if let Some(name) = identity {
        if let Some(owner) = owners.find_by_username(name).await? {
            return Ok(owner.id);
        }
    }
    owners
        .find_by_username(ANONYMOUS_OWNER)
        .await?
        .map(|o| o.id)
        .ok_or_else(|| anyhow::anyhow!("owner {ANONYMOUS_OWNER} is missing; run setup first"))
}
