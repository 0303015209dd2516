use async_graphql::{Context, ErrorExtensions, MaybeUndefined, Object, Result, ID};
use tracing::instrument;

use super::args::UpdateUserArgs;
use super::{request_context, user_service, UserObject};
use crate::domain::User;
use crate::error::ResolverError;
use crate::service::{RequestContext, UserService};

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Update the account status and/or plan of a user. Omitted arguments
    /// leave the corresponding attribute untouched.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        uid: Option<ID>,
        enabled: MaybeUndefined<bool>,
        plan: MaybeUndefined<String>,
    ) -> Result<Option<UserObject>> {
        let service = user_service(ctx)?;
        let args = UpdateUserArgs { uid, enabled, plan };
        apply_user_update(service.as_ref(), &request_context(ctx), args)
            .await
            .map(|user| Some(UserObject::from(user)))
            .map_err(|e| e.extend())
    }
}

/// Builds the partial update form and hands it to the service.
#[instrument(skip(service, ctx))]
pub async fn apply_user_update(
    service: &dyn UserService,
    ctx: &RequestContext,
    args: UpdateUserArgs,
) -> Result<User, ResolverError> {
    let form = args.into_form()?;
    Ok(service.update_user(ctx, form).await?)
}
