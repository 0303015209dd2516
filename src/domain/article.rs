use std::fmt;

/// Read state of an article from a user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleStatus {
    Read,
    Unread,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Read => "read",
            ArticleStatus::Unread => "unread",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter for counting a user's articles. The user scope is passed alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticlesCountFilter {
    pub status: ArticleStatus,
}

impl ArticlesCountFilter {
    pub fn new(status: ArticleStatus) -> Self {
        Self { status }
    }
}
