//! Dataset type tags.
//!
//! A [`DatasetType`] selects which filename grammar is applied while parsing.
//! [`DatasetType::Localizations`] is the default; `LocResults` was the default
//! in earlier releases and must now be requested explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raised when a dataset type name is not one of the registered types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "'{name}' is not a registered dataset type (expected one of: {expected})",
    expected = DatasetType::variants().join(", ")
)]
pub struct UnsupportedTypeError {
    /// The name that failed to resolve
    pub name: String,
}

/// Registered dataset types.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum DatasetType {
    /// Single-molecule localizations (default)
    #[default]
    Localizations,

    /// Localization results, the legacy default type
    LocResults,

    /// Acquisition metadata written next to the localizations
    LocMetadata,

    /// Widefield images; the acquisition number comes from the widefield tag
    WidefieldImage,
}

impl DatasetType {
    /// All registered dataset types, default first.
    pub const ALL: [DatasetType; 4] = [
        DatasetType::Localizations,
        DatasetType::LocResults,
        DatasetType::LocMetadata,
        DatasetType::WidefieldImage,
    ];

    /// Returns the registered type names.
    pub fn variants() -> &'static [&'static str] {
        &["Localizations", "LocResults", "LocMetadata", "WidefieldImage"]
    }

    /// Returns the canonical name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetType::Localizations => "Localizations",
            DatasetType::LocResults => "LocResults",
            DatasetType::LocMetadata => "LocMetadata",
            DatasetType::WidefieldImage => "WidefieldImage",
        }
    }
}

impl fmt::Display for DatasetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DatasetType {
    type Err = UnsupportedTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnsupportedTypeError {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_localizations() {
        assert_eq!(DatasetType::default(), DatasetType::Localizations);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            DatasetType::from_str("LocResults").unwrap(),
            DatasetType::LocResults
        );
        assert_eq!(
            DatasetType::from_str("WidefieldImage").unwrap(),
            DatasetType::WidefieldImage
        );

        let err = DatasetType::from_str("Localizations_Cool").unwrap_err();
        assert_eq!(err.name, "Localizations_Cool");
        assert!(err.to_string().contains("not a registered dataset type"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!(DatasetType::from_str("localizations").is_err());
    }

    #[test]
    fn test_display_matches_variants() {
        let names: Vec<String> = DatasetType::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(names, DatasetType::variants());
    }
}
