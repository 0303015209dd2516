use chrono::Utc;

use super::actions::UserAction;
use crate::actor_framework::Entity;
use crate::domain::{ArticleStatus, User, UserCreate, UserId, UserUpdateForm};

/// A stored user together with the per-status article tally used for counts.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub user: User,
    pub read: u64,
    pub unread: u64,
}

impl Entity for UserRecord {
    type Id = UserId;
    type CreatePayload = UserCreate;
    type Patch = UserUpdateForm;
    type Action = UserAction;
    type ActionResult = u64;

    /// Creates a new record, stamping both timestamps with the current time.
    fn from_create(id: UserId, params: UserCreate) -> Result<Self, String> {
        if params.username.is_empty() {
            return Err("username required".to_string());
        }
        let now = Utc::now();
        Ok(Self {
            user: User {
                id,
                username: params.username,
                hash: params.hash,
                enabled: params.enabled,
                plan: params.plan,
                last_login_at: params.last_login_at,
                created_at: now,
                updated_at: now,
            },
            read: params.read,
            unread: params.unread,
        })
    }

    /// Applies the populated slots of the form. An empty form is a no-op and
    /// keeps `updated_at` as is.
    fn on_update(&mut self, form: UserUpdateForm) -> Result<(), String> {
        if form.is_empty() {
            return Ok(());
        }
        if let Some(enabled) = form.enabled {
            self.user.enabled = enabled;
        }
        if let Some(plan) = form.plan {
            self.user.plan = plan;
        }
        self.user.updated_at = Utc::now();
        Ok(())
    }

    fn handle_action(&self, action: UserAction) -> Result<u64, String> {
        match action {
            UserAction::CountArticles(filter) => Ok(match filter.status {
                ArticleStatus::Read => self.read,
                ArticleStatus::Unread => self.unread,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ArticlesCountFilter;

    fn record() -> UserRecord {
        let payload = UserCreate {
            username: "alice".to_string(),
            hash: "h".to_string(),
            enabled: true,
            plan: "free".to_string(),
            last_login_at: None,
            read: 4,
            unread: 9,
        };
        UserRecord::from_create(1, payload).unwrap()
    }

    #[test]
    fn test_partial_update_leaves_other_fields() {
        let mut rec = record();
        let form = UserUpdateForm {
            enabled: Some(false),
            ..UserUpdateForm::new(1)
        };
        rec.on_update(form).unwrap();

        assert!(!rec.user.enabled);
        assert_eq!(rec.user.plan, "free");
        assert!(rec.user.updated_at >= rec.user.created_at);
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut rec = record();
        let before = rec.clone();
        rec.on_update(UserUpdateForm::new(1)).unwrap();
        assert_eq!(rec, before);
    }

    #[test]
    fn test_count_by_status() {
        let rec = record();
        let read = UserAction::CountArticles(ArticlesCountFilter::new(ArticleStatus::Read));
        let unread = UserAction::CountArticles(ArticlesCountFilter::new(ArticleStatus::Unread));
        assert_eq!(rec.handle_action(read), Ok(4));
        assert_eq!(rec.handle_action(unread), Ok(9));
    }

    #[test]
    fn test_username_required() {
        let payload = UserCreate {
            username: String::new(),
            hash: String::new(),
            enabled: true,
            plan: "free".to_string(),
            last_login_at: None,
            read: 0,
            unread: 0,
        };
        assert!(UserRecord::from_create(1, payload).is_err());
    }
}
