use crate::{id::*, language::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id          : CommentId,
    pub name        : String,
    pub email       : Option<String>,
    pub message     : String,
    pub created_at  : TimestampMs,
    pub likes       : u64,
    /// The current viewer has liked this comment.
    pub liked       : bool,
    /// The current viewer wrote this comment.
    pub is_author   : bool,
    pub language    : LanguageCode,
}

/// A comment as written by the viewer, before the server has seen it.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewComment {
    pub name    : Option<String>,
    pub message : String,
}

#[cfg(any(test, feature = "builders"))]
impl Comment {
    pub fn build(id: i64, message: &str) -> Self {
        Self {
            id: id.into(),
            name: "Anonymous".into(),
            email: None,
            message: message.into(),
            created_at: TimestampMs::from_milliseconds(1_591_358_400_000),
            likes: 0,
            liked: false,
            is_author: false,
            language: LanguageCode::default(),
        }
    }
}
