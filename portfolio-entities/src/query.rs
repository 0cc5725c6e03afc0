use std::{fmt, str::FromStr};

use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

/// Order in which the server returns comments.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortType {
    #[default]
    Newest,
    Oldest,
    Popular,
}

impl SortType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::Popular => "Most popular",
        }
    }
}

/// Page size of a comment request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter)]
pub enum MaxComments {
    #[default]
    Five,
    Ten,
    Twenty,
    All,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unsupported number of comments: {0:?}")]
pub struct MaxCommentsParseError(String);

impl MaxComments {
    /// Value of the `max-comments` request parameter.
    ///
    /// The server interprets `0` as "no limit".
    pub const fn as_param(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::All => 0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Five => "5",
            Self::Ten => "10",
            Self::Twenty => "20",
            Self::All => "All",
        }
    }
}

impl FromStr for MaxComments {
    type Err = MaxCommentsParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "5" => Ok(Self::Five),
            "10" => Ok(Self::Ten),
            "20" => Ok(Self::Twenty),
            "0" => Ok(Self::All),
            s if s.eq_ignore_ascii_case("all") => Ok(Self::All),
            _ => Err(MaxCommentsParseError(s.to_owned())),
        }
    }
}

impl fmt::Display for MaxComments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CommentQuery {
    pub max_comments : MaxComments,
    pub sort_type    : SortType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn sort_type_params() {
        assert_eq!(SortType::Newest.as_ref(), "newest");
        assert_eq!(SortType::Popular.to_string(), "popular");
        assert_eq!("OLDEST".parse::<SortType>().unwrap(), SortType::Oldest);
        assert!("random".parse::<SortType>().is_err());
        assert_eq!(SortType::default(), SortType::Newest);
        for sort in SortType::iter() {
            assert_eq!(sort.as_ref().parse::<SortType>().unwrap(), sort);
        }
    }

    #[test]
    fn max_comments_params() {
        assert_eq!(MaxComments::default().as_param(), 5);
        assert_eq!(MaxComments::All.to_string(), "0");
        for max in MaxComments::iter() {
            assert_eq!(max.to_string().parse::<MaxComments>().unwrap(), max);
        }
        assert!("-1".parse::<MaxComments>().is_err());
    }
}
