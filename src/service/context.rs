use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::{ServiceError, ServiceResult};

/// Per-request scope carrying the cancellation signal and an optional deadline.
///
/// Cloning shares the same cancellation token, so cancelling any clone
/// cancels every call made under the request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Fails if the request is already cancelled or past its deadline.
    pub fn check(&self) -> ServiceResult<()> {
        if self.token.is_cancelled() {
            return Err(ServiceError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => Err(ServiceError::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    /// Drives `fut` until it completes, the request is cancelled, or the
    /// deadline passes, whichever comes first.
    pub async fn scope<F: Future>(&self, fut: F) -> ServiceResult<F::Output> {
        self.check()?;

        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(ServiceError::Cancelled),
            _ = expired => Err(ServiceError::DeadlineExceeded),
            output = fut => Ok(output),
        }
    }
}
