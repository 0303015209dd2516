use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::clients::UserClient;
use crate::config::AdminConfig;
use crate::error::ServiceResult;
use crate::service::ServiceHandle;
use crate::user_actor::UserRecord;

/// Owns the in-memory user backend.
///
/// Responsible for starting the user actor, seeding it from configuration, and
/// shutting it down.
pub struct AdminSystem {
    pub user_client: UserClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AdminSystem {
    pub async fn start(config: &AdminConfig) -> ServiceResult<Self> {
        info!("Starting admin system");

        let user_id_counter = AtomicU64::new(1);
        let next_user_id = move || user_id_counter.fetch_add(1, Ordering::SeqCst);

        let (user_actor, user_resource_client) =
            ResourceActor::<UserRecord>::new(config.service.channel_capacity, next_user_id);
        let user_client = UserClient::new(user_resource_client, config.service.plans.clone());
        let user_handle = tokio::spawn(user_actor.run());

        let system = Self {
            user_client,
            handles: vec![user_handle],
        };

        for seed in config.users.iter().cloned() {
            match system.user_client.create_user(seed.into()).await {
                Ok(id) => info!(user_id = id, "Seeded user"),
                Err(e) => {
                    error!(error = %e, "Seeding failed");
                    system.shutdown().await.ok();
                    return Err(e);
                }
            }
        }

        Ok(system)
    }

    /// Handle to register with the GraphQL schema.
    pub fn service(&self) -> ServiceHandle {
        Arc::new(self.user_client.clone())
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // Schema handles may still hold clients, so stop the actor explicitly.
        if let Err(e) = self.user_client.shutdown().await {
            error!(error = %e, "Shutdown request failed");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
