use portfolio_entities::id::CommentId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Empty comment")]
    EmptyComment,
    #[error("The comment {0} is not displayed")]
    CommentNotFound(CommentId),
    #[error("The comment {0} is already written in the viewer's language")]
    NotTranslatable(CommentId),
    #[error("This is not allowed")]
    Forbidden,
}
