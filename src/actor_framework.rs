use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any record must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    /// Read-only queries answered by the actor against a single record
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Construct the full record from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, String>;

    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;

    fn handle_action(&self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResourceError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    Closed,
    #[error("Actor dropped")]
    Dropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, ResourceError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Shutdown,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient { sender };
        (actor, client)
    }

    /// Serves requests until a Shutdown message arrives or every client is dropped.
    pub async fn run(mut self) {
        info!("ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let id = (self.next_id_fn)();
                    match T::from_create(id.clone(), payload) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item);
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            let _ = respond_to.send(Err(ResourceError::Rejected(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let Some(item) = self.store.get_mut(&id) else {
                        let _ = respond_to.send(Err(ResourceError::NotFound(id.to_string())));
                        continue;
                    };
                    // Apply to a copy so a rejected patch leaves the stored record intact.
                    let mut updated = item.clone();
                    match updated.on_update(patch) {
                        Ok(()) => {
                            *item = updated.clone();
                            let _ = respond_to.send(Ok(updated));
                        }
                        Err(e) => {
                            let _ = respond_to.send(Err(ResourceError::Rejected(e)));
                        }
                    }
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get(&id) {
                        Some(item) => item.handle_action(action).map_err(ResourceError::Rejected),
                        None => Err(ResourceError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Shutdown => {
                    debug!("Shutdown requested");
                    break;
                }
            }
        }
        info!(records = self.store.len(), "ResourceActor stopped");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, ResourceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ResourceError::Closed)?;
        response.await.map_err(|_| ResourceError::Dropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T::Id, ResourceError> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, ResourceError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, ResourceError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, ResourceError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to })
            .await
    }

    pub async fn shutdown(&self) -> Result<(), ResourceError> {
        self.sender
            .send(ResourceRequest::Shutdown)
            .await
            .map_err(|_| ResourceError::Closed)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
