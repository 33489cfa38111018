//! Comment entity - parent record for like notifications

/// A comment on a title, read when a like is recorded against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    /// Owner of the comment; the like notification target.
    pub user_id: String,
    /// Title the comment belongs to, forwarded for client navigation.
    pub title_id: Option<String>,
}

impl Comment {
    pub fn new(id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            title_id: None,
        }
    }
}
