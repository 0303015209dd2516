//! GraphQL schema for the user admin surface.
//!
//! The service handle is registered as schema data. A [`RequestContext`] may
//! be attached per request; when absent, calls run without cancellation or
//! deadline.

pub mod args;
pub mod mutation;
pub mod query;
pub mod user;

pub use mutation::UserMutation;
pub use query::UserQuery;
pub use user::UserObject;

use async_graphql::{Context, EmptySubscription, MergedObject, Result, Schema};

use crate::service::{RequestContext, ServiceHandle};

pub type AdminSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(UserQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(UserMutation);

pub fn build_schema(service: ServiceHandle) -> AdminSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(service)
        .finish()
}

pub(crate) fn user_service<'a>(ctx: &Context<'a>) -> Result<&'a ServiceHandle> {
    ctx.data::<ServiceHandle>()
}

pub(crate) fn request_context(ctx: &Context<'_>) -> RequestContext {
    ctx.data_opt::<RequestContext>().cloned().unwrap_or_default()
}
