//! # Filename Parser
//!
//! Converts Micro-Manager acquisition filenames into [`DatasetId`]s using only
//! the filename string. Nothing is read from disk.
//!
//! ## Operations
//!
//! - [`parse_filename`]: parse with the default type ([`DatasetType::Localizations`])
//! - [`parse_filename_as`]: parse with an explicit type
//! - [`parse_filename_named`]: resolve the type from its registered name first
//! - [`FilenameParser`]: the same operations over a custom [`ParserConfig`](crate::config::ParserConfig)
//! - [`MmParser`]: stateful wrapper that parses, then loads data through a [`DataLoader`]
//!
//! ## Usage
//!
//! ```rust
//! use mmparser::parser::{parse_filename, parse_filename_as};
//! use mmparser::dataset::Position;
//! use mmparser::types::DatasetType;
//!
//! let ids = parse_filename("Cos7_Microtubules_A647_3_MMStack_Pos0_locResults.dat")?;
//! assert_eq!(ids.prefix, "Cos7_Microtubules");
//! assert_eq!(ids.acq_id, Some(3));
//! assert_eq!(ids.channel_id.as_deref(), Some("A647"));
//! assert_eq!(ids.pos_id, Some(Position::Single(0)));
//!
//! let wf = parse_filename_as("HeLa_Control_A647_WF13_MMStack_Pos0.ome.tif", DatasetType::WidefieldImage)?;
//! assert_eq!(wf.acq_id, Some(13));
//! # Ok::<(), mmparser::parser::ParserError>(())
//! ```

mod error;
mod filename;
mod lifecycle;


use std::path::Path;

pub use error::{ParseError, ParserError};
pub use filename::FilenameParser;
pub use lifecycle::{DataLoader, MmParser, NoDataLoader};

use crate::dataset::DatasetId;
use crate::types::DatasetType;

/// Parse `filename` as [`DatasetType::Localizations`].
pub fn parse_filename(filename: impl AsRef<Path>) -> Result<DatasetId, ParserError> {
    parse_filename_as(filename, DatasetType::default())
}

/// Parse `filename` as `dataset_type` with the default grammar table.
pub fn parse_filename_as(
    filename: impl AsRef<Path>,
    dataset_type: DatasetType,
) -> Result<DatasetId, ParserError> {
    FilenameParser::default_parser().parse(filename, dataset_type)
}

/// Parse `filename` with a dataset type given by name (e.g. "LocResults").
pub fn parse_filename_named(
    filename: impl AsRef<Path>,
    type_name: &str,
) -> Result<DatasetId, ParserError> {
    let dataset_type: DatasetType = type_name.parse()?;
    parse_filename_as(filename, dataset_type)
}
