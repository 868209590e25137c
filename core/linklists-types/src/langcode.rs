//! Language codes identifying entity translations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language code such as `en`, `fr` or `pt-pt`.
///
/// Codes are normalized to lowercase. Only ASCII letters and `-` are
/// accepted, and the code must start with a letter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Langcode(String);

impl Langcode {
    /// Parses and normalizes a language code.
    pub fn parse(code: &str) -> Result<Self, crate::Error> {
        let code = code.trim().to_ascii_lowercase();
        let valid = code.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
            && code.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
            && !code.ends_with('-');
        if !valid {
            return Err(crate::Error::InvalidLangcode(code));
        }
        Ok(Self(code))
    }

    /// English, the fallback base language.
    #[must_use]
    pub fn english() -> Self {
        Self("en".to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Langcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Langcode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Langcode {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Langcode> for String {
    fn from(value: Langcode) -> Self {
        value.0
    }
}
