//! TOML configuration file support for the CLI.
//!
//! The same file carries the parser tables (see `mmparser::config`) and an
//! `[output]` section for CLI defaults:
//!
//! ```toml
//! # mmparser.toml
//! [output]
//! json = true
//! dataset_type = "WidefieldImage"
//!
//! [channels]
//! A568 = "AlexaFluor 568"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use mmparser::config::ParserConfig;

/// CLI-specific part of an mmparser.toml file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Output defaults.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for the parse, check and group commands.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Print JSON lines instead of text.
    pub json: Option<bool>,

    /// Dataset type used when `--type` is not given.
    pub dataset_type: Option<String>,
}

impl Config {
    /// Load the CLI and parser configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<(Self, ParserConfig)> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse the CLI and parser configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<(Self, ParserConfig)> {
        let config: Config =
            toml::from_str(content).context("Failed to parse TOML configuration")?;
        let parser: ParserConfig = content
            .parse()
            .context("Invalid parser configuration")?;
        Ok((config, parser))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [output]
            json = true
            dataset_type = "WidefieldImage"

            [channels]
            A568 = "AlexaFluor 568"
        "#;

        let (config, parser) = Config::from_str(toml).unwrap();
        assert_eq!(config.output.json, Some(true));
        assert_eq!(config.output.dataset_type.as_deref(), Some("WidefieldImage"));
        assert!(parser.channels.contains_key("A568"));
    }

    #[test]
    fn test_empty_config() {
        let (config, parser) = Config::from_str("").unwrap();
        assert_eq!(config.output.json, None);
        assert_eq!(parser, ParserConfig::default());
    }

    #[test]
    fn test_invalid_parser_section() {
        let toml = r#"
            [grammars]
            Unknown = "acquisition"
        "#;

        assert!(Config::from_str(toml).is_err());
    }
}
