use async_graphql::{Context, ErrorExtensions, Object, Result};
use chrono::{DateTime, Utc};
use tracing::instrument;

use super::{request_context, user_service};
use crate::domain::{ArticleStatus, ArticlesCountFilter, User};
use crate::error::ResolverError;

/// GraphQL view of a [`User`].
#[derive(Debug, Clone)]
pub struct UserObject(pub User);

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self(user)
    }
}

#[Object(name = "User", rename_fields = "snake_case")]
impl UserObject {
    async fn username(&self) -> Option<&str> {
        Some(&self.0.username)
    }

    async fn hash(&self) -> Option<&str> {
        Some(&self.0.hash)
    }

    async fn enabled(&self) -> Option<bool> {
        Some(self.0.enabled)
    }

    async fn plan(&self) -> Option<&str> {
        Some(&self.0.plan)
    }

    async fn last_login_at(&self) -> Option<DateTime<Utc>> {
        self.0.last_login_at
    }

    async fn created_at(&self) -> Option<DateTime<Utc>> {
        Some(self.0.created_at)
    }

    async fn updated_at(&self) -> Option<DateTime<Utc>> {
        Some(self.0.updated_at)
    }

    /// Number of articles the user has read.
    async fn read(&self, ctx: &Context<'_>) -> Result<Option<u64>> {
        count_articles(ctx, &self.0, ArticleStatus::Read).await.map(Some)
    }

    /// Number of articles the user has not read yet.
    async fn unread(&self, ctx: &Context<'_>) -> Result<Option<u64>> {
        count_articles(ctx, &self.0, ArticleStatus::Unread).await.map(Some)
    }
}

// Counts are fetched on every resolution; nothing is cached on the user.
// A failed count nulls only its own field.
#[instrument(skip(ctx, user), fields(user_id = user.id))]
async fn count_articles(ctx: &Context<'_>, user: &User, status: ArticleStatus) -> Result<u64> {
    let service = user_service(ctx)?;
    service
        .count_user_articles(&request_context(ctx), user.id, ArticlesCountFilter::new(status))
        .await
        .map_err(|e| ResolverError::from(e).extend())
}
