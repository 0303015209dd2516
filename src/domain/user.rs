use chrono::{DateTime, Utc};

/// Internal numeric user identifier.
pub type UserId = u64;

/// Represents a registered account as seen by the admin surface.
///
/// Read and unread article counts are not part of the entity; they are
/// computed by the service on every request.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub hash: String,
    pub enabled: bool,
    pub plan: String,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for an existing user.
///
/// A `None` slot means "leave unchanged", which is distinct from
/// `Some(false)` or `Some(String::new())`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserUpdateForm {
    pub id: UserId,
    pub enabled: Option<bool>,
    pub plan: Option<String>,
}

impl UserUpdateForm {
    /// Creates a form that targets `id` and changes nothing.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            enabled: None,
            plan: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_none() && self.plan.is_none()
    }
}

/// Payload for seeding a user into a backing store.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: String,
    pub hash: String,
    pub enabled: bool,
    pub plan: String,
    pub last_login_at: Option<DateTime<Utc>>,
    pub read: u64,
    pub unread: u64,
}
