use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use tracing::instrument;

use super::args::parse_user_id;
use super::{request_context, user_service, UserObject};
use crate::domain::User;
use crate::error::ResolverError;
use crate::service::{RequestContext, UserService};

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// Get a user by their ID
    async fn user(&self, ctx: &Context<'_>, uid: ID) -> Result<Option<UserObject>> {
        let service = user_service(ctx)?;
        fetch_user(service.as_ref(), &request_context(ctx), &uid)
            .await
            .map(|user| Some(UserObject::from(user)))
            .map_err(|e| e.extend())
    }
}

/// Coerces `uid` and loads the user. Invalid tokens never reach the service.
#[instrument(skip(service, ctx))]
pub async fn fetch_user(
    service: &dyn UserService,
    ctx: &RequestContext,
    uid: &str,
) -> Result<User, ResolverError> {
    let id = parse_user_id(Some(uid))?;
    Ok(service.get_user_by_id(ctx, id).await?)
}
