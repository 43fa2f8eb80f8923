use log::{debug, warn};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

use super::{ParseError, ParserError};
use crate::config::{ConfigError, ParserConfig};
use crate::dataset::{DatasetId, Position};
use crate::grammar::{Grammar, GrammarTable, STACK_SEPARATOR};
use crate::types::{DatasetType, UnsupportedTypeError};

fn repeated_underscores() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"__+").expect("literal pattern compiles"))
}

fn position_token() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Pos_[0-9]{1,3}_[0-9]{1,3}|Pos[0-9]+").expect("literal pattern compiles")
    })
}

fn digits() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[0-9]+").expect("literal pattern compiles"))
}

/// A prefix tag (channel or widefield) and the pattern that strips it.
#[derive(Debug, Clone)]
struct TagPattern {
    tag: String,
    name: String,
    pattern: Regex,
}

impl TagPattern {
    /// Channel: `_ID` at the end, else `ID` with at most one underscore on each side.
    fn channel(tag: &str, name: &str) -> Result<Self, ConfigError> {
        let id = regex::escape(tag);
        Ok(Self {
            tag: tag.to_string(),
            name: name.to_string(),
            pattern: Regex::new(&format!(r"(_{id}_?$)|((^_)?{id}(_)?)"))?,
        })
    }

    /// Widefield: like a channel, but followed by the image number (ASCII digits).
    fn widefield(tag: &str) -> Result<Self, ConfigError> {
        let id = regex::escape(tag);
        Ok(Self {
            tag: tag.to_string(),
            name: tag.to_string(),
            pattern: Regex::new(&format!(r"((_{id}_?[0-9]+)_?$)|((^_)?{id}_*[0-9]+(_?))"))?,
        })
    }
}

/// Tokens left once a tag has been located in the prefix.
struct Stripped<'p> {
    tag: &'p TagPattern,
    prefix: String,
    matched: String,
}

/// Pure filename → [`DatasetId`] parser.
///
/// Immutable after construction; share it freely across threads.
#[derive(Debug, Clone)]
pub struct FilenameParser {
    channels: Vec<TagPattern>,
    widefield: Vec<TagPattern>,
    grammars: GrammarTable,
}

impl FilenameParser {
    /// Build a parser from a configuration.
    pub fn new(config: &ParserConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let channels = config
            .channels
            .iter()
            .map(|(tag, name)| TagPattern::channel(tag, name))
            .collect::<Result<Vec<_>, _>>()?;
        let widefield = config
            .widefield_identifiers
            .iter()
            .map(String::as_str)
            .map(TagPattern::widefield)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            channels,
            widefield,
            grammars: config.grammars.clone(),
        })
    }

    /// Shared parser built from [`ParserConfig::default`].
    pub fn default_parser() -> &'static FilenameParser {
        static DEFAULT: OnceLock<FilenameParser> = OnceLock::new();
        DEFAULT.get_or_init(|| {
            FilenameParser::new(&ParserConfig::default()).expect("built-in configuration is valid")
        })
    }

    /// Grammar table this parser dispatches on
    pub fn grammars(&self) -> &GrammarTable {
        &self.grammars
    }

    /// Long name of a recognized channel identifier (e.g. "A647" → "AlexaFluor 647")
    pub fn channel_name(&self, channel_id: &str) -> Option<&str> {
        self.channels
            .iter()
            .find(|c| c.tag == channel_id)
            .map(|c| c.name.as_str())
    }

    /// Recognized channel identifiers and their long names
    pub fn channels(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.channels.iter().map(|c| (c.tag.as_str(), c.name.as_str()))
    }

    /// Recognized widefield tags
    pub fn widefield_identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.widefield.iter().map(|w| w.tag.as_str())
    }

    /// Parse a filename (or the final component of a path) as `dataset_type`.
    ///
    /// Works on the string alone: the file does not need to exist.
    pub fn parse(
        &self,
        filename: impl AsRef<Path>,
        dataset_type: DatasetType,
    ) -> Result<DatasetId, ParserError> {
        let grammar = self
            .grammars
            .get(dataset_type)
            .ok_or_else(|| UnsupportedTypeError {
                name: dataset_type.to_string(),
            })?;

        let name = file_name(filename.as_ref())?;
        let ids = match grammar {
            Grammar::Acquisition => self.parse_acquisition(name)?,
            Grammar::Widefield => self.parse_widefield(name)?,
        };

        debug!("Parsed {} as {} ({}): {}", name, dataset_type, grammar, ids);
        Ok(ids)
    }

    fn parse_acquisition(&self, name: &str) -> Result<DatasetId, ParseError> {
        let (prefix_raw, suffix) = split_stack(name)?;

        let mut parts: Vec<&str> = prefix_raw.split('_').collect();
        let token = parts.pop().unwrap_or_default();
        let acq_id = token
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidAcquisitionId {
                filename: name.to_string(),
                token: token.to_string(),
            })?;

        let mut ids = self.parse_common(name, &parts.join("_"), suffix)?;
        ids.acq_id = Some(acq_id);
        Ok(ids)
    }

    fn parse_widefield(&self, name: &str) -> Result<DatasetId, ParseError> {
        let (prefix_raw, suffix) = split_stack(name)?;
        let mut ids = self.parse_common(name, prefix_raw, suffix)?;

        match strip_tag(&self.widefield, &ids.prefix, |candidates| {
            ParseError::AmbiguousWidefield {
                filename: name.to_string(),
                candidates,
            }
        })? {
            Some(stripped) => {
                // Only the digits after the tag count; the tag itself may contain digits
                let number = stripped
                    .matched
                    .trim_start_matches('_')
                    .strip_prefix(stripped.tag.tag.as_str())
                    .map(|rest| rest.trim_matches('_'))
                    .filter(|rest| !rest.is_empty())
                    .ok_or_else(|| ParseError::MissingWidefieldNumber {
                        filename: name.to_string(),
                        tag: stripped.tag.tag.clone(),
                    })?;
                let acq_id = number
                    .parse::<u32>()
                    .map_err(|_| ParseError::InvalidAcquisitionId {
                        filename: name.to_string(),
                        token: number.to_string(),
                    })?;
                ids.prefix = stripped.prefix;
                ids.acq_id = Some(acq_id);
            }
            None => {
                warn!("No widefield ID detected in {}", ids.prefix);
                ids.acq_id = None;
            }
        }

        Ok(ids)
    }

    /// Prefix cleanup, channel and position extraction shared by both grammars.
    fn parse_common(&self, name: &str, prefix: &str, suffix: &str) -> Result<DatasetId, ParseError> {
        let prefix = repeated_underscores().replace_all(prefix, "_").into_owned();

        let (prefix, channel_id) = match strip_tag(&self.channels, &prefix, |candidates| {
            ParseError::AmbiguousChannel {
                filename: name.to_string(),
                candidates,
            }
        })? {
            Some(stripped) => (stripped.prefix, Some(stripped.tag.tag.clone())),
            None => (prefix, None),
        };

        let pos_id = match position_token().find(suffix) {
            Some(token) => Some(parse_position(name, token.as_str())?),
            None => None,
        };

        Ok(DatasetId {
            prefix: prefix.replace(' ', "_"),
            acq_id: None,
            channel_id,
            date_id: None,
            pos_id,
            slice_id: None,
        })
    }
}

impl Default for FilenameParser {
    fn default() -> Self {
        Self::default_parser().clone()
    }
}

/// Final path component as UTF-8, without touching the filesystem.
fn file_name(path: &Path) -> Result<&str, ParseError> {
    if path.as_os_str().is_empty() {
        return Err(ParseError::Empty);
    }
    let name = path
        .file_name()
        .ok_or_else(|| ParseError::NoFileName(path.display().to_string()))?;
    name.to_str()
        .ok_or_else(|| ParseError::NonUtf8(path.display().to_string()))
}

/// Split `<prefix>_MMStack_<suffix>` after dropping leading underscores.
fn split_stack(name: &str) -> Result<(&str, &str), ParseError> {
    let trimmed = name.trim_start_matches('_');
    let mut parts = trimmed.split(STACK_SEPARATOR);

    match (parts.next(), parts.next(), parts.next()) {
        (Some(prefix), Some(suffix), None) => Ok((prefix, suffix)),
        (_, None, _) => Err(ParseError::MissingStackSeparator(name.to_string())),
        _ => Err(ParseError::RepeatedStackSeparator(name.to_string())),
    }
}

/// Locate at most one tag from `patterns` in `prefix` and cut its match out.
fn strip_tag<'p, F>(
    patterns: &'p [TagPattern],
    prefix: &str,
    ambiguous: F,
) -> Result<Option<Stripped<'p>>, ParseError>
where
    F: FnOnce(Vec<String>) -> ParseError,
{
    let found: Vec<&TagPattern> = patterns
        .iter()
        .filter(|p| prefix.contains(p.tag.as_str()))
        .collect();

    let tag = match found.as_slice() {
        [] => return Ok(None),
        [tag] => *tag,
        _ => return Err(ambiguous(found.iter().map(|p| p.tag.clone()).collect())),
    };

    let matched = tag
        .pattern
        .find(prefix)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let prefix = if matched.is_empty() {
        prefix.to_string()
    } else {
        prefix.replace(&matched, "")
    };

    Ok(Some(Stripped {
        tag,
        prefix,
        matched,
    }))
}

/// `Pos3` → single index, `Pos_012_003` → grid indices.
fn parse_position(name: &str, token: &str) -> Result<Position, ParseError> {
    let invalid = || ParseError::InvalidPosition {
        filename: name.to_string(),
        token: token.to_string(),
    };

    let indices = digits()
        .find_iter(token)
        .map(|m| m.as_str().parse::<u32>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;

    match indices.as_slice() {
        [p] => Ok(Position::Single(*p)),
        [x, y] => Ok(Position::Grid(*x, *y)),
        _ => Err(invalid()),
    }
}
