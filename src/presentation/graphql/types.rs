use async_graphql::{Context, Object, Result, SimpleObject};

use crate::bootstrap::app_context::AppContext;
use crate::domain::audit::Audit;
use crate::domain::owner::Owner;
use crate::domain::paste::Paste;

#[derive(Clone)]
pub struct PasteObject(pub Paste);

#[Object(name = "PasteObject")]
impl PasteObject {
    async fn id(&self) -> i64 {
        self.0.id
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn content(&self) -> &str {
        &self.0.content
    }

    async fn public(&self) -> bool {
        self.0.public
    }

    async fn user_agent(&self) -> Option<&str> {
        self.0.user_agent.as_deref()
    }

    async fn ip_addr(&self) -> Option<&str> {
        self.0.ip_addr.as_deref()
    }

    async fn owner_id(&self) -> i64 {
        self.0.owner_id
    }

    async fn burn(&self) -> bool {
        self.0.burn
    }

    /// Together with `OwnerObject.pastes` this allows unbounded nesting.
    async fn owner(&self, ctx: &Context<'_>) -> Result<Option<OwnerObject>> {
        let app = ctx.data::<AppContext>()?;
        let owner = app.owner_repo().find_by_id(self.0.owner_id).await?;
        Ok(owner.map(OwnerObject))
    }
}

#[derive(Clone)]
pub struct OwnerObject(pub Owner);

#[Object(name = "OwnerObject")]
impl OwnerObject {
    async fn id(&self) -> i64 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.username
    }

    async fn pastes(&self, ctx: &Context<'_>) -> Result<Vec<PasteObject>> {
        let app = ctx.data::<AppContext>()?;
        let pastes = app.paste_repo().list_by_owner(self.0.id).await?;
        Ok(pastes.into_iter().map(PasteObject).collect())
    }
}

/// Account view without the password column.
pub struct UserObject(pub Owner);

#[Object(name = "UserObject")]
impl UserObject {
    async fn id(&self) -> i64 {
        self.0.id
    }

    async fn username(&self) -> &str {
        &self.0.username
    }
}

pub struct AuditObject(pub Audit);

#[Object(name = "AuditObject")]
impl AuditObject {
    async fn id(&self) -> i64 {
        self.0.id
    }

    async fn gqloperation(&self) -> &str {
        &self.0.gqloperation
    }

    async fn gqlquery(&self) -> &str {
        &self.0.gqlquery
    }

    async fn timestamp(&self) -> chrono::DateTime<chrono::Utc> {
        self.0.timestamp
    }
}

#[derive(SimpleObject)]
pub struct LoginResult {
    pub access_token: String,
    pub refresh_token: String,
}
