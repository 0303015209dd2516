use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::actor_framework::{ResourceClient, ResourceError};
use crate::domain::{ArticlesCountFilter, User, UserCreate, UserId, UserUpdateForm};
use crate::error::{ServiceError, ServiceResult};
use crate::service::{RequestContext, UserService};
use crate::user_actor::{UserAction, UserRecord};

/// Client for interacting with the user actor. Implements [`UserService`]
/// for the in-memory backend.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<UserRecord>,
    plans: Arc<[String]>,
}

impl UserClient {
    /// `plans` lists the accepted plan names; an empty list accepts any plan.
    pub fn new(inner: ResourceClient<UserRecord>, plans: Vec<String>) -> Self {
        Self {
            inner,
            plans: plans.into(),
        }
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn create_user(&self, user: UserCreate) -> ServiceResult<UserId> {
        debug!("Sending request");
        self.check_plan(&user.plan)?;
        self.inner
            .create(user)
            .await
            .map_err(|e| map_resource_error(None, e))
    }

    pub async fn shutdown(&self) -> ServiceResult<()> {
        self.inner
            .shutdown()
            .await
            .map_err(|e| map_resource_error(None, e))
    }

    fn check_plan(&self, plan: &str) -> ServiceResult<()> {
        if self.plans.is_empty() || self.plans.iter().any(|p| p == plan) {
            Ok(())
        } else {
            Err(ServiceError::UnknownPlan(plan.to_string()))
        }
    }
}

fn map_resource_error(id: Option<UserId>, err: ResourceError) -> ServiceError {
    match (err, id) {
        (ResourceError::NotFound(_), Some(id)) => ServiceError::NotFound(id),
        (ResourceError::Rejected(msg), _) => ServiceError::Rejected(msg),
        (e, _) => ServiceError::ActorCommunicationError(e.to_string()),
    }
}

#[async_trait]
impl UserService for UserClient {
    #[instrument(skip(self, ctx))]
    async fn get_user_by_id(&self, ctx: &RequestContext, id: UserId) -> ServiceResult<User> {
        debug!("Sending request");
        ctx.scope(self.inner.get(id))
            .await?
            .map_err(|e| map_resource_error(Some(id), e))?
            .map(|record| record.user)
            .ok_or(ServiceError::NotFound(id))
    }

    #[instrument(skip(self, ctx))]
    async fn update_user(&self, ctx: &RequestContext, form: UserUpdateForm) -> ServiceResult<User> {
        debug!("Sending request");
        if let Some(plan) = &form.plan {
            self.check_plan(plan)?;
        }
        // Once the update is sent it is applied, so its reply is awaited
        // without racing cancellation or the deadline.
        ctx.check()?;
        let id = form.id;
        self.inner
            .update(id, form)
            .await
            .map(|record| record.user)
            .map_err(|e| map_resource_error(Some(id), e))
    }

    #[instrument(skip(self, ctx), fields(status = %filter.status))]
    async fn count_user_articles(
        &self,
        ctx: &RequestContext,
        id: UserId,
        filter: ArticlesCountFilter,
    ) -> ServiceResult<u64> {
        debug!("Sending request");
        ctx.scope(self.inner.perform_action(id, UserAction::CountArticles(filter)))
            .await?
            .map_err(|e| map_resource_error(Some(id), e))
    }
}
