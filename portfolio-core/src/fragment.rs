use portfolio_entities::{comment::Comment, id::CommentId, language::LanguageCode};
use time::UtcOffset;

use crate::{LikeState, TranslationState};

/// The context a comment is rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub language: LanguageCode,
    pub utc_offset: UtcOffset,
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            language: LanguageCode::default(),
            utc_offset: UtcOffset::UTC,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeAffordance {
    pub liked: bool,
    pub count: u64,
    pub pending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateAffordance {
    pub label: &'static str,
    pub pending: bool,
    pub translated: bool,
}

/// Everything needed to display a single comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFragment {
    pub id: CommentId,
    pub name: String,
    pub email: Option<String>,
    pub date: String,
    pub message: String,
    /// Only offered if the comment is written in another language than the viewer's.
    pub translate: Option<TranslateAffordance>,
    /// Only offered to the author.
    pub can_delete: bool,
    pub like: LikeAffordance,
}

/// Renders a freshly loaded comment.
#[must_use]
pub fn render(comment: &Comment, viewer: &Viewer) -> CommentFragment {
    let like = LikeState::new(comment.liked, comment.likes);
    render_with_state(comment, viewer, &like, &TranslationState::Original)
}

pub(crate) fn render_with_state(
    comment: &Comment,
    viewer: &Viewer,
    like: &LikeState,
    translation: &TranslationState,
) -> CommentFragment {
    let date = comment
        .created_at
        .format_date(viewer.utc_offset)
        .unwrap_or_else(|err| {
            log::warn!("Unable to format date of comment {}: {err}", comment.id);
            String::new()
        });
    let translate = (comment.language != viewer.language).then(|| TranslateAffordance {
        label: translation.label(),
        pending: translation.is_pending(),
        translated: translation.is_translated(),
    });
    CommentFragment {
        id: comment.id,
        name: comment.name.clone(),
        email: comment.email.clone(),
        date,
        message: translation.displayed(&comment.message).to_owned(),
        translate,
        can_delete: comment.is_author,
        like: LikeAffordance {
            liked: like.is_liked(),
            count: like.count(),
            pending: like.is_pending(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::TRANSLATE_LABEL;

    fn english_viewer() -> Viewer {
        Viewer {
            language: LanguageCode::from_locale("en-US").unwrap(),
            utc_offset: UtcOffset::UTC,
        }
    }

    #[test]
    fn render_all_fields() {
        let comment = Comment {
            name: "Ana".into(),
            email: Some("ana@example.com".into()),
            likes: 3,
            liked: true,
            ..Comment::build(1, "Hello")
        };
        let fragment = render(&comment, &english_viewer());
        assert_eq!(fragment.id, CommentId::new(1));
        assert_eq!(fragment.name, "Ana");
        assert_eq!(fragment.email.as_deref(), Some("ana@example.com"));
        assert_eq!(fragment.date, "6/5/2020");
        assert_eq!(fragment.message, "Hello");
        assert_eq!(
            fragment.like,
            LikeAffordance {
                liked: true,
                count: 3,
                pending: false
            }
        );
    }

    #[test]
    fn no_delete_affordance_for_other_authors() {
        let comment = Comment::build(1, "Hello");
        assert!(!render(&comment, &english_viewer()).can_delete);
        let own = Comment {
            is_author: true,
            ..comment
        };
        assert!(render(&own, &english_viewer()).can_delete);
    }

    #[test]
    fn no_translate_affordance_in_viewer_language() {
        let comment = Comment::build(1, "Hello");
        assert_eq!(render(&comment, &english_viewer()).translate, None);

        let spanish = Comment {
            language: "es".parse().unwrap(),
            ..Comment::build(2, "Hola")
        };
        assert_eq!(
            render(&spanish, &english_viewer()).translate,
            Some(TranslateAffordance {
                label: TRANSLATE_LABEL,
                pending: false,
                translated: false,
            })
        );
    }

    #[test]
    fn regional_locale_matches_comment_language() {
        let comment = Comment::build(1, "Colour");
        let british = Viewer {
            language: LanguageCode::from_locale("en-GB").unwrap(),
            ..Viewer::default()
        };
        assert_eq!(render(&comment, &british).translate, None);
    }
}
