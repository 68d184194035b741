use async_graphql::Schema;

use crate::bootstrap::app_context::AppContext;
use crate::domain::difficulty::Difficulty;
use crate::presentation::graphql::mutation::MutationRoot;
use crate::presentation::graphql::query::QueryRoot;
use crate::presentation::graphql::subscription::SubscriptionRoot;

pub type DvgaSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

/// Beginner mode has no depth limit and lets selection sets nest up to
/// `recursion_limit` (past the default of 32, up to the parser's own ceiling
/// of 64). Expert mode caps depth and hides introspection.
pub fn build_schema(ctx: &AppContext, difficulty: Difficulty) -> DvgaSchema {
    let builder = Schema::build(QueryRoot, MutationRoot, SubscriptionRoot).data(ctx.clone());
    match difficulty {
        Difficulty::Beginner => builder
            .limit_recursive_depth(ctx.cfg.recursion_limit)
            .finish(),
        Difficulty::Expert => builder
            .limit_depth(ctx.cfg.expert_max_depth)
            .disable_introspection()
            .finish(),
    }
}

/// Both schemas are built once; requests pick one by difficulty.
#[derive(Clone)]
pub struct Schemas {
    beginner: DvgaSchema,
    expert: DvgaSchema,
}

impl Schemas {
    pub fn build(ctx: &AppContext) -> Self {
        Self {
            beginner: build_schema(ctx, Difficulty::Beginner),
            expert: build_schema(ctx, Difficulty::Expert),
        }
    }

    pub fn for_difficulty(&self, difficulty: Difficulty) -> &DvgaSchema {
        match difficulty {
            Difficulty::Beginner => &self.beginner,
            Difficulty::Expert => &self.expert,
        }
    }
}
