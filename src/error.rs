use async_graphql::ErrorExtensions;
use thiserror::Error;

use crate::domain::UserId;

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Errors returned across the user service boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error("user not found: {0}")]
    NotFound(UserId),
    #[error("unknown plan: {0}")]
    UnknownPlan(String),
    #[error("user update rejected: {0}")]
    Rejected(String),
    #[error("request cancelled")]
    Cancelled,
    #[error("request deadline exceeded")]
    DeadlineExceeded,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ServiceError {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::UnknownPlan(_) => "UNKNOWN_PLAN",
            ServiceError::Rejected(_) => "REJECTED",
            ServiceError::Cancelled => "CANCELLED",
            ServiceError::DeadlineExceeded => "DEADLINE_EXCEEDED",
            ServiceError::ActorCommunicationError(_) => "UNAVAILABLE",
        }
    }
}

/// Errors surfaced by GraphQL resolvers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolverError {
    #[error("{0}")]
    InvalidArgument(String),
    /// Service failures keep their original message.
    #[error(transparent)]
    Upstream(#[from] ServiceError),
}

impl ResolverError {
    pub fn code(&self) -> &'static str {
        match self {
            ResolverError::InvalidArgument(_) => "INVALID_ARGUMENT",
            ResolverError::Upstream(e) => e.code(),
        }
    }
}

impl ErrorExtensions for ResolverError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
