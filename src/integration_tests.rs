#[cfg(test)]
mod tests {
    use async_graphql::Request;

    use crate::app_system::AdminSystem;
    use crate::config::{AdminConfig, SeedUser};
    use crate::schema::build_schema;
    use crate::service::RequestContext;

    fn seed(username: &str, plan: &str, read: u64, unread: u64) -> SeedUser {
        SeedUser {
            username: username.to_string(),
            hash: format!("hash-{username}"),
            enabled: true,
            plan: plan.to_string(),
            last_login_at: None,
            read,
            unread,
        }
    }

    async fn start_system() -> AdminSystem {
        let config = AdminConfig {
            users: vec![seed("alice", "free", 10, 2), seed("bob", "premium", 0, 7)],
            ..Default::default()
        };
        AdminSystem::start(&config).await.unwrap()
    }

    #[tokio::test]
    async fn test_query_user_with_counts() {
        let system = start_system().await;
        let schema = build_schema(system.service());

        let response = schema
            .execute(r#"{ user(uid: "1") { username hash enabled plan read unread created_at } }"#)
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().unwrap();
        assert_eq!(data["user"]["username"], "alice");
        assert_eq!(data["user"]["hash"], "hash-alice");
        assert_eq!(data["user"]["read"], 10);
        assert_eq!(data["user"]["unread"], 2);
        assert!(data["user"]["created_at"].is_string());

        drop(schema);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_update_then_query() {
        let system = start_system().await;
        let schema = build_schema(system.service());

        let response = schema
            .execute(r#"mutation { updateUser(uid: "2", enabled: false) { enabled plan unread } }"#)
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["updateUser"]["enabled"], false);
        // Plan was not supplied, so it must be untouched.
        assert_eq!(data["updateUser"]["plan"], "premium");
        assert_eq!(data["updateUser"]["unread"], 7);

        let response = schema.execute(r#"{ user(uid: "2") { enabled plan } }"#).await;
        let data = response.data.into_json().unwrap();
        assert_eq!(data["user"]["enabled"], false);
        assert_eq!(data["user"]["plan"], "premium");

        drop(schema);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_backend_errors_surface() {
        let system = start_system().await;
        let schema = build_schema(system.service());

        let response = schema.execute(r#"{ user(uid: "99") { username } }"#).await;
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "user not found: 99");

        let response = schema
            .execute(r#"mutation { updateUser(uid: "1", plan: "gold") { plan } }"#)
            .await;
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "unknown plan: gold");

        drop(schema);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_cancelled_request() {
        let system = start_system().await;
        let schema = build_schema(system.service());

        let ctx = RequestContext::new();
        ctx.cancel();
        let request = Request::new(r#"{ user(uid: "1") { username } }"#).data(ctx);
        let response = schema.execute(request).await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "request cancelled");
        let extensions = serde_json::to_value(&response.errors[0].extensions).unwrap();
        assert_eq!(extensions["code"], "CANCELLED");

        drop(schema);
        system.shutdown().await.unwrap();
    }
}
