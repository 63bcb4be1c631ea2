use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("invalid locale identifier: {0:?}")]
    Invalid(String),
}

/// Language (and optional region) used to pick localized road names.
///
/// Accepts BCP-47 (`zh-Hans-CN`) and POSIX (`en_US`) identifiers. Script
/// subtags are accepted and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// # Errors
    ///
    /// Returns `LocaleError::Invalid` when the language subtag is not 2-3 ASCII letters.
    pub fn parse(raw: &str) -> Result<Self, LocaleError> {
        let trimmed = raw.trim();
        // drop any encoding / modifier suffix (`en_US.UTF-8@euro`)
        let trimmed = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or_default();
        let mut parts = trimmed.split(['-', '_']);

        let language = parts.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(LocaleError::Invalid(raw.to_owned()));
        }

        let region = parts
            .find(|part| {
                (part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
                    || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()))
            })
            .map(str::to_ascii_uppercase);

        Ok(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }

    #[must_use]
    pub fn language_code(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn region_code(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language: "en".to_owned(),
            region: None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{region}", self.language),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bcp47_with_script() {
        let locale = Locale::parse("zh-Hans-CN").unwrap();
        assert_eq!(locale.language_code(), "zh");
        assert_eq!(locale.region_code(), Some("CN"));
    }

    #[test]
    fn parses_posix_with_encoding() {
        let locale: Locale = "en_US.UTF-8".parse().unwrap();
        assert_eq!(locale.language_code(), "en");
        assert_eq!(locale.to_string(), "en-US");
    }

    #[test]
    fn bare_language() {
        let locale = Locale::parse("TA").unwrap();
        assert_eq!(locale.language_code(), "ta");
        assert_eq!(locale.region_code(), None);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("english").is_err());
        assert!(Locale::parse("1a").is_err());
    }
}
