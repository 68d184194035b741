use async_graphql::{Context, Result, Subscription};
use futures_util::{Stream, StreamExt, future};

use crate::bootstrap::app_context::AppContext;
use crate::domain::paste::PasteMatch;
use crate::presentation::graphql::types::PasteObject;

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Pastes created after the subscription starts, optionally narrowed by id or title.
    async fn paste(
        &self,
        ctx: &Context<'_>,
        id: Option<i64>,
        title: Option<String>,
    ) -> Result<impl Stream<Item = PasteObject>> {
        let app = ctx.data::<AppContext>()?;
        let wanted = PasteMatch { id, title };
        Ok(app
            .subscribe_pastes()
            .filter(move |p| future::ready(wanted.matches(p)))
            .map(PasteObject))
    }
}
