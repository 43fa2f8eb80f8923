//! # mmparser - Micro-Manager Filename Parser
//!
//! `mmparser` turns Micro-Manager acquisition filenames into structured dataset
//! identifiers without opening the files. Identifiers can be used to index,
//! look up or deduplicate datasets before any of the heavy loading happens.
//!
//! ## Key Features
//!
//! - **Pure parsing**: a [`DatasetId`](dataset::DatasetId) depends only on the
//!   filename string and the requested [`DatasetType`](types::DatasetType).
//!
//! - **Pluggable grammars**: each dataset type maps to a
//!   [`Grammar`](grammar::Grammar) through a [`GrammarTable`](grammar::GrammarTable);
//!   channel and widefield tags come from a TOML-configurable table.
//!
//! - **Safe initialization**: [`MmParser`](parser::MmParser) exposes a dataset only
//!   after parsing and loading complete, and dataset data is published exactly once.
//!
//! ## Quick Start
//!
//! ```rust
//! use mmparser::parser::parse_filename;
//!
//! let ids = parse_filename("Cos7_Microtubules_A647_3_MMStack_Pos0_locResults.dat")?;
//! assert_eq!(ids.to_string(), "Cos7_Microtubules/acq=3/ch=A647/pos=0");
//! # Ok::<(), mmparser::parser::ParserError>(())
//! ```
//!
//! ## Filename Layout
//!
//! ```text
//! Cos7_Microtubules _A647 _3 _MMStack_ Pos0 _locResults.dat
//! └─ prefix ──────┘ chan. acq separator pos  ignored
//! ```
//!
//! | Field | Source | Example |
//! |-------|--------|---------|
//! | prefix | tokens before the acquisition number, channel removed | `Cos7_Microtubules` |
//! | acq_id | last token before `_MMStack_`, or `WF<n>` for widefield images | `3` |
//! | channel_id | known channel identifier inside the prefix | `A647` |
//! | pos_id | `Pos<n>` or `Pos_<x>_<y>` after `_MMStack_` | `0` |
//!
//! ## Architecture
//!
//! - [`types`]: registered dataset types
//! - [`dataset`]: identifiers and the single-assignment dataset container
//! - [`grammar`]: grammar table and built-in token tables
//! - [`config`]: TOML configuration
//! - [`parser`]: the parsing operations and the stateful wrapper
//! - [`report`]: batch parse reports

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod dataset;
pub mod grammar;
pub mod parser;
pub mod report;
pub mod types;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::config::{ConfigError, ParserConfig};
    pub use crate::dataset::{Dataset, DatasetError, DatasetId, Position};
    pub use crate::grammar::{Grammar, GrammarTable};
    pub use crate::parser::{
        parse_filename, parse_filename_as, parse_filename_named, DataLoader, FilenameParser,
        MmParser, NoDataLoader, ParseError, ParserError,
    };
    pub use crate::report::{EntryStatus, ParseReport, ReportEntry};
    pub use crate::types::{DatasetType, UnsupportedTypeError};
}
