//! TOML configuration for the filename parser.
//!
//! Every section is optional. Channel and grammar entries are merged over the
//! built-in tables key by key; a `[widefield]` list replaces the default tags.
//!
//! ```toml
//! # mmparser.toml
//! [channels]
//! A568 = "AlexaFluor 568"
//!
//! [widefield]
//! identifiers = ["WF"]
//!
//! [grammars]
//! WidefieldImage = "widefield"
//! LocResults = "acquisition"
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use crate::grammar::{Grammar, GrammarTable, DEFAULT_CHANNELS, DEFAULT_WIDEFIELD_IDENTIFIERS};
use crate::types::{DatasetType, UnsupportedTypeError};

/// Errors that can occur while loading or applying a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading the configuration file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML syntax or schema error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Grammar assigned to an unknown dataset type
    #[error("Unsupported dataset type in [grammars]: {0}")]
    UnsupportedType(#[from] UnsupportedTypeError),

    /// Identifier that cannot appear as a filename token
    #[error("Invalid {kind} identifier '{identifier}': must be non-empty and contain no '_' or whitespace")]
    InvalidIdentifier {
        /// "channel" or "widefield"
        kind: &'static str,
        /// Offending identifier
        identifier: String,
    },

    /// Token pattern failed to compile
    #[error("Invalid token pattern: {0}")]
    PatternError(#[from] regex::Error),
}

/// Settings that shape how filenames are tokenized.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// Channel identifier → long channel name
    pub channels: BTreeMap<String, String>,

    /// Tags preceding a widefield image number
    pub widefield_identifiers: Vec<String>,

    /// Grammar per dataset type
    pub grammars: GrammarTable,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            channels: DEFAULT_CHANNELS
                .iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect(),
            widefield_identifiers: DEFAULT_WIDEFIELD_IDENTIFIERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            grammars: GrammarTable::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    channels: BTreeMap<String, String>,
    widefield: Option<RawWidefield>,
    #[serde(default)]
    grammars: BTreeMap<String, Grammar>,
}

#[derive(Debug, Default, Deserialize)]
struct RawWidefield {
    identifiers: Option<Vec<String>>,
}

impl ParserConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Check that every identifier can be matched as a filename token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let channels = self.channels.keys().map(|id| ("channel", id));
        let widefield = self.widefield_identifiers.iter().map(|id| ("widefield", id));

        for (kind, identifier) in channels.chain(widefield) {
            if identifier.is_empty()
                || identifier.contains('_')
                || identifier.chars().any(char::is_whitespace)
            {
                return Err(ConfigError::InvalidIdentifier {
                    kind,
                    identifier: identifier.clone(),
                });
            }
        }
        Ok(())
    }
}

impl FromStr for ParserConfig {
    type Err = ConfigError;

    /// Parse configuration from a TOML string, merged over the defaults.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let raw: RawConfig = toml::from_str(content)?;
        let mut config = ParserConfig::default();

        config.channels.extend(raw.channels);

        if let Some(identifiers) = raw.widefield.and_then(|w| w.identifiers) {
            config.widefield_identifiers = identifiers;
        }

        for (name, grammar) in raw.grammars {
            let dataset_type = DatasetType::from_str(&name)?;
            config.grammars.insert(dataset_type, grammar);
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_default() {
        let config: ParserConfig = "".parse().unwrap();
        assert_eq!(config, ParserConfig::default());
        assert_eq!(config.channels.len(), 5);
        assert_eq!(config.widefield_identifiers, vec!["WF".to_string()]);
    }

    #[test]
    fn test_merge_channels_and_grammars() {
        let toml = r#"
            [channels]
            A568 = "AlexaFluor 568"
            Cy5 = "Cyanine 5"

            [grammars]
            LocMetadata = "widefield"
        "#;

        let config: ParserConfig = toml.parse().unwrap();
        assert_eq!(config.channels.len(), 6);
        assert_eq!(config.channels["A568"], "AlexaFluor 568");
        assert_eq!(config.channels["Cy5"], "Cyanine 5");
        assert_eq!(
            config.grammars.get(DatasetType::LocMetadata),
            Some(Grammar::Widefield)
        );
        assert_eq!(
            config.grammars.get(DatasetType::Localizations),
            Some(Grammar::Acquisition)
        );
    }

    #[test]
    fn test_widefield_list_replaces_default() {
        let toml = r#"
            [widefield]
            identifiers = ["WFI", "Snap"]
        "#;

        let config: ParserConfig = toml.parse().unwrap();
        assert_eq!(config.widefield_identifiers, vec!["WFI", "Snap"]);
    }

    #[test]
    fn test_unknown_grammar_type() {
        let toml = r#"
            [grammars]
            Localizations_Cool = "acquisition"
        "#;

        let err = toml.parse::<ParserConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedType(_)));
    }

    #[test]
    fn test_invalid_identifier() {
        let toml = r#"
            [channels]
            "A_488" = "broken"
        "#;

        let err = toml.parse::<ParserConfig>().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidIdentifier { kind: "channel", .. }
        ));
    }

    #[test]
    fn test_unknown_grammar_name() {
        let toml = r#"
            [grammars]
            Localizations = "positional"
        "#;

        assert!(matches!(
            toml.parse::<ParserConfig>(),
            Err(ConfigError::TomlError(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[channels]\nA405 = \"AlexaFluor 405\"").unwrap();

        let config = ParserConfig::from_file(file.path()).unwrap();
        assert_eq!(config.channels["A405"], "AlexaFluor 405");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ParserConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
