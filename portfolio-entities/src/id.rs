use std::{fmt, num::ParseIntError, str::FromStr};

/// Server assigned identifier of a comment.
///
/// The value is opaque to the client and stable across requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommentId(i64);

impl CommentId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn to_inner(self) -> i64 {
        self.0
    }
}

impl From<i64> for CommentId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<CommentId> for i64 {
    fn from(from: CommentId) -> Self {
        from.0
    }
}

impl FromStr for CommentId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let id: CommentId = " 5629499534213120 ".parse().unwrap();
        assert_eq!(id, CommentId::new(5_629_499_534_213_120));
        assert_eq!(id.to_string(), "5629499534213120");
        assert!("abc".parse::<CommentId>().is_err());
    }
}
