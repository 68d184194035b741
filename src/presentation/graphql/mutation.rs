use std::path::Path;

use async_graphql::{Context, Object, Result};

use crate::application::use_cases::auth::create_user::CreateUser;
use crate::application::use_cases::auth::login::{Login, LoginRequest};
use crate::application::use_cases::pastes::create_paste::{CreatePaste, CreatePasteRequest};
use crate::application::use_cases::pastes::upload_paste::UploadPaste;
use crate::bootstrap::app_context::AppContext;
use crate::infrastructure::auth::tokens::TokenKind;
use crate::presentation::graphql::RequestMeta;
use crate::presentation::graphql::types::{LoginResult, PasteObject, UserObject};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_paste(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: String,
        #[graphql(default = true)] public: bool,
        #[graphql(default = false)] burn: bool,
    ) -> Result<PasteObject> {
        let app = ctx.data::<AppContext>()?;
        let meta = ctx.data_opt::<RequestMeta>().cloned().unwrap_or_default();
        let identity = meta
            .bearer
            .as_deref()
            .and_then(|t| app.tokens().verify(t, TokenKind::Access).ok())
            .map(|claims| claims.identity);
        let pastes = app.paste_repo();
        let owners = app.owner_repo();
        let uc = CreatePaste {
            pastes: pastes.as_ref(),
            owners: owners.as_ref(),
            events: app.paste_events(),
        };
        let paste = uc
            .execute(CreatePasteRequest {
                title,
                content,
                public,
                burn,
                user_agent: meta.user_agent,
                ip_addr: meta.ip_addr,
                identity,
            })
            .await?;
        Ok(PasteObject(paste))
    }

    /// No ownership check.
    async fn edit_paste(
        &self,
        ctx: &Context<'_>,
        id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Option<PasteObject>> {
        let app = ctx.data::<AppContext>()?;
        let paste = app
            .paste_repo()
            .update(id, title.as_deref(), content.as_deref())
            .await?;
        Ok(paste.map(PasteObject))
    }

    /// No ownership check.
    async fn delete_paste(&self, ctx: &Context<'_>, id: i64) -> Result<bool> {
        let app = ctx.data::<AppContext>()?;
        Ok(app.paste_repo().delete(id).await?)
    }

    async fn upload_paste(
        &self,
        ctx: &Context<'_>,
        filename: String,
        content: String,
    ) -> Result<String> {
        let app = ctx.data::<AppContext>()?;
        let pastes = app.paste_repo();
        let owners = app.owner_repo();
        let uc = UploadPaste {
            upload_dir: Path::new(&app.cfg.upload_dir),
            pastes: pastes.as_ref(),
            owners: owners.as_ref(),
        };
        Ok(uc.execute(&filename, &content).await?)
    }

    async fn create_user(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> Result<UserObject> {
        let app = ctx.data::<AppContext>()?;
        let repo = app.owner_repo();
        let uc = CreateUser {
            repo: repo.as_ref(),
        };
        Ok(UserObject(uc.execute(&username, &password).await?))
    }

    async fn login(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> Result<LoginResult> {
        let app = ctx.data::<AppContext>()?;
        let repo = app.owner_repo();
        let uc = Login {
            repo: repo.as_ref(),
        };
        let owner = uc
            .execute(&LoginRequest { username, password })
            .await?
            .ok_or_else(|| async_graphql::Error::new("Username or Password is incorrect"))?;
        let tokens = app.tokens();
        Ok(LoginResult {
            access_token: tokens.issue(&owner.username, TokenKind::Access)?,
            refresh_token: tokens.issue(&owner.username, TokenKind::Refresh)?,
        })
    }
}
