use async_graphql::{Context, Object, Result};

use crate::application::use_cases::auth::me::GetMe;
use crate::application::use_cases::pastes::read_and_burn::ReadAndBurn;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::graphql::types::{AuditObject, PasteObject, UserObject};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Lists pastes, newest first. `filter` is matched against title and content.
    async fn pastes(
        &self,
        ctx: &Context<'_>,
        public: Option<bool>,
        limit: Option<i32>,
        filter: Option<String>,
    ) -> Result<Vec<PasteObject>> {
        let app = ctx.data::<AppContext>()?;
        let pastes = app
            .paste_repo()
            .list(public, limit.map(i64::from), filter.as_deref())
            .await?;
        Ok(pastes.into_iter().map(PasteObject).collect())
    }

    async fn paste(
        &self,
        ctx: &Context<'_>,
        id: Option<i64>,
        title: Option<String>,
    ) -> Result<Option<PasteObject>> {
        let app = ctx.data::<AppContext>()?;
        let paste = app.paste_repo().find(id, title.as_deref()).await?;
        Ok(paste.map(PasteObject))
    }

    async fn read_and_burn(&self, ctx: &Context<'_>, id: i64) -> Result<Option<PasteObject>> {
        let app = ctx.data::<AppContext>()?;
        let repo = app.paste_repo();
        let uc = ReadAndBurn {
            repo: repo.as_ref(),
        };
        Ok(uc.execute(id).await?.map(PasteObject))
    }

    async fn search(&self, ctx: &Context<'_>, keyword: String) -> Result<Vec<PasteObject>> {
        let app = ctx.data::<AppContext>()?;
        let pastes = app.paste_repo().search(&keyword).await?;
        Ok(pastes.into_iter().map(PasteObject).collect())
    }

    async fn users(&self, ctx: &Context<'_>, id: Option<i64>) -> Result<Vec<UserObject>> {
        let app = ctx.data::<AppContext>()?;
        let owners = app.owner_repo().list(id).await?;
        Ok(owners.into_iter().map(UserObject).collect())
    }

    async fn me(&self, ctx: &Context<'_>, token: String) -> Result<Option<UserObject>> {
        let app = ctx.data::<AppContext>()?;
        let repo = app.owner_repo();
        let uc = GetMe {
            repo: repo.as_ref(),
            tokens: app.tokens(),
        };
        Ok(uc.execute(&token).await?.map(UserObject))
    }

    async fn audits(&self, ctx: &Context<'_>) -> Result<Vec<AuditObject>> {
        let app = ctx.data::<AppContext>()?;
        let audits = app.audit_repo().list().await?;
        Ok(audits.into_iter().map(AuditObject).collect())
    }

    async fn system_health(&self, ctx: &Context<'_>) -> Result<String> {
        let app = ctx.data::<AppContext>()?;
        Ok(format!("System Uptime: {}s", app.uptime().as_secs()))
    }
}
