//! # Mock Framework
//!
//! Utilities for testing resolvers in isolation.
//!
//! Use [`create_mock_service`] to get a service handle and a receiver.
//! Every call made through the handle shows up on the receiver; use helpers
//! like [`expect_get_user`] or [`expect_update_user`] to assert it and answer.
//! A call that never shows up (`try_recv` fails) was never made.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::{mpsc, oneshot};

use crate::domain::{ArticlesCountFilter, User, UserId, UserUpdateForm};
use crate::error::{ServiceError, ServiceResult};
use crate::service::{RequestContext, ServiceHandle, UserService};

pub type Responder<T> = oneshot::Sender<ServiceResult<T>>;

/// A recorded call to the user service, waiting for the test to answer it.
#[derive(Debug)]
pub enum ServiceCall {
    GetUserById {
        id: UserId,
        respond_to: Responder<User>,
    },
    UpdateUser {
        form: UserUpdateForm,
        respond_to: Responder<User>,
    },
    CountUserArticles {
        id: UserId,
        filter: ArticlesCountFilter,
        respond_to: Responder<u64>,
    },
}

struct MockUserService {
    sender: mpsc::Sender<ServiceCall>,
}

impl MockUserService {
    async fn call<T>(&self, build: impl FnOnce(Responder<T>) -> ServiceCall) -> ServiceResult<T> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ServiceError::ActorCommunicationError("Mock closed".to_string()))?;
        response
            .await
            .map_err(|_| ServiceError::ActorCommunicationError("Mock dropped".to_string()))?
    }
}

#[async_trait]
impl UserService for MockUserService {
    async fn get_user_by_id(&self, _ctx: &RequestContext, id: UserId) -> ServiceResult<User> {
        self.call(|respond_to| ServiceCall::GetUserById { id, respond_to }).await
    }

    async fn update_user(&self, _ctx: &RequestContext, form: UserUpdateForm) -> ServiceResult<User> {
        self.call(|respond_to| ServiceCall::UpdateUser { form, respond_to }).await
    }

    async fn count_user_articles(
        &self,
        _ctx: &RequestContext,
        id: UserId,
        filter: ArticlesCountFilter,
    ) -> ServiceResult<u64> {
        self.call(|respond_to| ServiceCall::CountUserArticles { id, filter, respond_to })
            .await
    }
}

/// Creates a mock service handle and a receiver for asserting calls.
pub fn create_mock_service(buffer_size: usize) -> (ServiceHandle, mpsc::Receiver<ServiceCall>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (Arc::new(MockUserService { sender }), receiver)
}

/// Helper to verify that the next call is GetUserById
pub async fn expect_get_user(
    receiver: &mut mpsc::Receiver<ServiceCall>,
) -> Option<(UserId, Responder<User>)> {
    match receiver.recv().await {
        Some(ServiceCall::GetUserById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next call is UpdateUser
pub async fn expect_update_user(
    receiver: &mut mpsc::Receiver<ServiceCall>,
) -> Option<(UserUpdateForm, Responder<User>)> {
    match receiver.recv().await {
        Some(ServiceCall::UpdateUser { form, respond_to }) => Some((form, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next call is CountUserArticles
pub async fn expect_count_articles(
    receiver: &mut mpsc::Receiver<ServiceCall>,
) -> Option<(UserId, ArticlesCountFilter, Responder<u64>)> {
    match receiver.recv().await {
        Some(ServiceCall::CountUserArticles {
            id,
            filter,
            respond_to,
        }) => Some((id, filter, respond_to)),
        _ => None,
    }
}

pub fn sample_user(id: UserId) -> User {
    let created = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
    User {
        id,
        username: format!("user_{id}"),
        hash: "$2y$10$hash".to_string(),
        enabled: true,
        plan: "free".to_string(),
        last_login_at: None,
        created_at: created,
        updated_at: created,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ArticleStatus;

    #[tokio::test]
    async fn test_mock_service() {
        let (service, mut receiver) = create_mock_service(10);

        let count_task = tokio::spawn(async move {
            let filter = ArticlesCountFilter::new(ArticleStatus::Read);
            service.count_user_articles(&RequestContext::new(), 1, filter).await
        });

        let (id, filter, responder) = expect_count_articles(&mut receiver)
            .await
            .expect("Expected CountUserArticles request");
        assert_eq!(id, 1);
        assert_eq!(filter.status, ArticleStatus::Read);
        responder.send(Ok(5)).unwrap();

        let result = count_task.await.unwrap();
        assert_eq!(result, Ok(5));
    }
}
