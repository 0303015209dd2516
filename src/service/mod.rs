//! The user service boundary consumed by the GraphQL resolvers.
//!
//! Resolvers only ever talk to [`UserService`]; persistence, locking and
//! article counting live behind it.

pub mod context;

pub use context::RequestContext;

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ArticlesCountFilter, User, UserId, UserUpdateForm};
use crate::error::ServiceResult;

#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_user_by_id(&self, ctx: &RequestContext, id: UserId) -> ServiceResult<User>;

    /// Applies only the populated slots of `form`.
    async fn update_user(&self, ctx: &RequestContext, form: UserUpdateForm) -> ServiceResult<User>;

    async fn count_user_articles(
        &self,
        ctx: &RequestContext,
        id: UserId,
        filter: ArticlesCountFilter,
    ) -> ServiceResult<u64>;
}

/// Shared handle registered as schema data.
pub type ServiceHandle = Arc<dyn UserService>;
