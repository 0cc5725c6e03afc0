use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::ConversionError;

/// A comment as serialized by the server.
///
/// Optional fields are omitted by the server when they are empty.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id            : i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name          : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email         : Option<String>,
    pub message       : String,
    pub timestamp     : i64,
    #[serde(default)]
    pub num_likes     : i64,
    #[serde(default)]
    pub is_liked      : bool,
    #[serde(default)]
    pub is_author     : bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code : Option<String>,
}

/// The response of `GET /data`.
///
/// The server encodes every comment as a JSON string inside
/// the JSON array. Plain objects are accepted as well.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(try_from = "Vec<EncodedComment>")]
pub struct CommentList(pub Vec<Comment>);

#[derive(Deserialize)]
#[serde(untagged)]
enum EncodedComment {
    Json(String),
    Plain(Comment),
}

impl TryFrom<Vec<EncodedComment>> for CommentList {
    type Error = serde_json::Error;
    fn try_from(from: Vec<EncodedComment>) -> Result<Self, Self::Error> {
        from.into_iter()
            .map(|encoded| match encoded {
                EncodedComment::Json(json) => serde_json::from_str(&json),
                EncodedComment::Plain(comment) => Ok(comment),
            })
            .collect::<Result<_, _>>()
            .map(Self)
    }
}

impl From<CommentList> for Vec<Comment> {
    fn from(from: CommentList) -> Self {
        from.0
    }
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginStatus {
    pub logged_in : bool,
    pub url       : String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (HTTP {http_status})")]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
