//! Response languages offered to the user.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Human language the backend should answer in.
///
/// The wire form is the English name of the language (`"Tamil"`), which is
/// what the backend's language detection expects.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Marathi,
    Bengali,
    Gujarati,
    Urdu,
}

impl Language {
    /// All supported languages, in picker order.
    pub fn all() -> impl Iterator<Item = Language> {
        <Language as strum::IntoEnumIterator>::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Language::from_str("tamil").unwrap(), Language::Tamil);
        assert_eq!(Language::from_str("MALAYALAM").unwrap(), Language::Malayalam);
        assert!(Language::from_str("Klingon").is_err());
    }

    #[test]
    fn test_wire_form() {
        assert_eq!(serde_json::to_string(&Language::Hindi).unwrap(), "\"Hindi\"");
        assert_eq!(Language::Bengali.to_string(), "Bengali");
        assert_eq!(Language::all().count(), 10);
        assert_eq!(Language::all().next(), Some(Language::English));
    }
}
