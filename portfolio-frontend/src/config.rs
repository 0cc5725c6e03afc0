use anyhow::anyhow;
use gloo_storage::{LocalStorage, Storage};
use leptos::{document, window};
use serde::{Deserialize, Serialize};
use time::UtcOffset;

use portfolio_core::{
    entities::{
        language::LanguageCode,
        query::{CommentQuery, MaxComments, SortType},
    },
    Viewer,
};

/// Same origin as the page.
pub const DEFAULT_API_URL: &str = "";

/// `<meta name="portfolio-api-url" content="https://...">` overrides the API URL.
const API_URL_META_NAME: &str = "portfolio-api-url";

const PREFERENCES_STORAGE_KEY: &str = "comment-preferences";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub viewer: Viewer,
}

impl Config {
    pub fn from_environment() -> Self {
        let api_url =
            meta_content(API_URL_META_NAME).unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let language = viewer_language().unwrap_or_else(|err| {
            log::warn!("Unable to detect the viewer's language: {err}");
            LanguageCode::default()
        });
        let utc_offset = UtcOffset::current_local_offset().unwrap_or_else(|err| {
            log::warn!("Unable to detect the local UTC offset: {err}");
            UtcOffset::UTC
        });
        Self {
            api_url,
            viewer: Viewer {
                language,
                utc_offset,
            },
        }
    }
}

fn meta_content(name: &str) -> Option<String> {
    document()
        .query_selector(&format!(r#"meta[name="{name}"]"#))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}

fn viewer_language() -> anyhow::Result<LanguageCode> {
    let locale = window()
        .navigator()
        .language()
        .ok_or_else(|| anyhow!("navigator.language is not available"))?;
    Ok(LanguageCode::from_locale(&locale)?)
}

/// The last selection of the comment controls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Preferences {
    pub max_comments: Option<String>,
    pub sort_type: Option<String>,
}

impl Preferences {
    pub fn load() -> Self {
        LocalStorage::get(PREFERENCES_STORAGE_KEY).unwrap_or_default()
    }

    pub fn save(&self) {
        if let Err(err) = LocalStorage::set(PREFERENCES_STORAGE_KEY, self) {
            log::warn!("Unable to save comment preferences: {err}");
        }
    }

    pub fn query(&self) -> CommentQuery {
        let max_comments = self
            .max_comments
            .as_deref()
            .and_then(|s| s.parse::<MaxComments>().ok())
            .unwrap_or_default();
        let sort_type = self
            .sort_type
            .as_deref()
            .and_then(|s| s.parse::<SortType>().ok())
            .unwrap_or_default();
        CommentQuery {
            max_comments,
            sort_type,
        }
    }
}

impl From<CommentQuery> for Preferences {
    fn from(from: CommentQuery) -> Self {
        let CommentQuery {
            max_comments,
            sort_type,
        } = from;
        Self {
            max_comments: Some(max_comments.to_string()),
            sort_type: Some(sort_type.to_string()),
        }
    }
}
