use std::{fmt, str::FromStr};
use thiserror::Error;

/// Primary language subtag of a BCP 47 language tag, e.g. `en` or `es`.
///
/// Region and script subtags are dropped, so `en-US` and `en-GB`
/// are the same language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid language tag: {0:?}")]
pub struct LanguageCodeParseError(String);

impl LanguageCode {
    /// Extracts the language from a browser locale such as `navigator.language`.
    pub fn from_locale(locale: &str) -> Result<Self, LanguageCodeParseError> {
        let primary = locale
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        let valid = (2..=8).contains(&primary.len())
            && primary.chars().all(|c| c.is_ascii_alphabetic());
        if !valid {
            return Err(LanguageCodeParseError(locale.to_owned()));
        }
        Ok(Self(primary.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE.to_owned())
    }
}

impl FromStr for LanguageCode {
    type Err = LanguageCodeParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_locale(s)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_subtag_of_browser_locale() {
        assert_eq!(LanguageCode::from_locale("en-US").unwrap().as_str(), "en");
        assert_eq!(LanguageCode::from_locale("pt_BR").unwrap().as_str(), "pt");
        assert_eq!(LanguageCode::from_locale("ES").unwrap().as_str(), "es");
        assert_eq!(
            LanguageCode::from_locale("zh-Hant-TW").unwrap(),
            LanguageCode::from_locale("zh").unwrap()
        );
    }

    #[test]
    fn reject_garbage() {
        assert!(LanguageCode::from_locale("").is_err());
        assert!(LanguageCode::from_locale("e").is_err());
        assert!(LanguageCode::from_locale("12-34").is_err());
    }

    #[test]
    fn default_is_english() {
        assert_eq!(LanguageCode::default().to_string(), "en");
    }
}
