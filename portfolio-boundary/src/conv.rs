use super::*;
use portfolio_entities as e;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error(transparent)]
    Language(#[from] e::language::LanguageCodeParseError),
}

const ANONYMOUS: &str = "Anonymous";

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

impl TryFrom<Comment> for e::comment::Comment {
    type Error = ConversionError;
    fn try_from(from: Comment) -> Result<Self, Self::Error> {
        let Comment {
            id,
            name,
            email,
            message,
            timestamp,
            num_likes,
            is_liked,
            is_author,
            language_code,
        } = from;
        // The server decrements without a lower bound.
        let likes = u64::try_from(num_likes).unwrap_or_else(|_| {
            log::warn!("Comment {id} has a negative number of likes: {num_likes}");
            0
        });
        let language = match non_empty(language_code) {
            Some(code) => code.parse()?,
            None => e::language::LanguageCode::default(),
        };
        Ok(Self {
            id: id.into(),
            name: non_empty(name).unwrap_or_else(|| ANONYMOUS.to_owned()),
            email: non_empty(email),
            message,
            created_at: timestamp.into(),
            likes,
            liked: is_liked,
            is_author,
            language,
        })
    }
}

impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
            id,
            name,
            email,
            message,
            created_at,
            likes,
            liked,
            is_author,
            language,
        } = from;
        Self {
            id: id.into(),
            name: Some(name),
            email,
            message,
            timestamp: created_at.into(),
            num_likes: i64::try_from(likes).unwrap_or(i64::MAX),
            is_liked: liked,
            is_author,
            language_code: Some(language.to_string()),
        }
    }
}

impl TryFrom<CommentList> for Vec<e::comment::Comment> {
    type Error = ConversionError;
    fn try_from(from: CommentList) -> Result<Self, Self::Error> {
        from.0.into_iter().map(TryInto::try_into).collect()
    }
}

impl From<LoginStatus> for e::login::LoginStatus {
    fn from(from: LoginStatus) -> Self {
        let LoginStatus { logged_in, url } = from;
        if logged_in {
            Self::LoggedIn { logout_url: url }
        } else {
            Self::LoggedOut { login_url: url }
        }
    }
}

impl From<e::login::LoginStatus> for LoginStatus {
    fn from(from: e::login::LoginStatus) -> Self {
        Self {
            logged_in: from.is_logged_in(),
            url: from.url().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_comment() -> Comment {
        Comment {
            id: 1,
            name: Some("Ana".into()),
            email: Some(String::new()),
            message: "Hola".into(),
            timestamp: 1_591_358_400_000,
            num_likes: 3,
            is_liked: false,
            is_author: true,
            language_code: Some("es".into()),
        }
    }

    #[test]
    fn comment_into_entity() {
        let comment = e::comment::Comment::try_from(wire_comment()).unwrap();
        assert_eq!(comment.id, e::id::CommentId::new(1));
        assert_eq!(comment.name, "Ana");
        assert_eq!(comment.email, None);
        assert_eq!(comment.likes, 3);
        assert!(comment.is_author);
        assert_eq!(comment.language.as_str(), "es");
    }

    #[test]
    fn missing_name_and_language_fall_back_to_server_defaults() {
        let comment = e::comment::Comment::try_from(Comment {
            name: None,
            language_code: None,
            ..wire_comment()
        })
        .unwrap();
        assert_eq!(comment.name, "Anonymous");
        assert_eq!(comment.language.as_str(), "en");
    }

    #[test]
    fn clamp_negative_likes() {
        let comment = e::comment::Comment::try_from(Comment {
            num_likes: -1,
            ..wire_comment()
        })
        .unwrap();
        assert_eq!(comment.likes, 0);
    }

    #[test]
    fn negative_likes_do_not_fail_the_list() {
        let list = CommentList(vec![
            wire_comment(),
            Comment {
                id: 2,
                num_likes: -1,
                ..wire_comment()
            },
        ]);
        let comments = Vec::<e::comment::Comment>::try_from(list).unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].likes, 3);
        assert_eq!(comments[1].likes, 0);
    }

    #[test]
    fn login_status_into_entity() {
        let status = e::login::LoginStatus::from(LoginStatus {
            logged_in: false,
            url: "/_ah/login".into(),
        });
        assert_eq!(
            status,
            e::login::LoginStatus::LoggedOut {
                login_url: "/_ah/login".into()
            }
        );
        assert_eq!(LoginStatus::from(status).url, "/_ah/login");
    }
}
