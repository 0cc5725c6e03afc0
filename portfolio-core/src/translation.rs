use crate::Ticket;

pub const TRANSLATE_LABEL: &str = "Translate";
pub const ORIGINAL_MESSAGE_LABEL: &str = "Original message";

/// Which text of a comment message is displayed.
///
/// The original text is kept by the comment itself, so switching back
/// never needs the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TranslationState {
    #[default]
    Original,
    Pending(Ticket),
    Translated(String),
}

impl TranslationState {
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    pub const fn is_translated(&self) -> bool {
        matches!(self, Self::Translated(_))
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Original | Self::Pending(_) => TRANSLATE_LABEL,
            Self::Translated(_) => ORIGINAL_MESSAGE_LABEL,
        }
    }

    pub fn displayed<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            Self::Translated(text) => text,
            Self::Original | Self::Pending(_) => original,
        }
    }
}
