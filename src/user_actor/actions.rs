use crate::domain::ArticlesCountFilter;

/// Read-only queries answered against a stored user record.
#[derive(Debug, Clone, Copy)]
pub enum UserAction {
    CountArticles(ArticlesCountFilter),
}
