//! # Dataset Module
//!
//! Value types produced by the filename parser:
//!
//! - [`DatasetId`]: structured identifier derived purely from filename tokens
//! - [`Position`]: single or grid stage position
//! - [`Dataset`]: an identifier plus a single-assignment data slot
//!
//! ## Usage
//!
//! ```rust
//! use mmparser::dataset::{Dataset, DatasetId, Position};
//! use mmparser::types::DatasetType;
//!
//! let ids = DatasetId::new("Cos7_Microtubules")
//!     .with_acq_id(3)
//!     .with_channel("A647")
//!     .with_position(Position::Single(0));
//!
//! let dataset: Dataset<Vec<f64>> = Dataset::new(ids, DatasetType::Localizations);
//! assert!(dataset.data().is_err());
//!
//! dataset.attach(vec![1.0, 2.0])?;
//! assert_eq!(dataset.data()?.len(), 2);
//! # Ok::<(), mmparser::dataset::DatasetError>(())
//! ```

mod container;
mod error;
mod id;

#[cfg(test)]
mod tests;

pub use container::Dataset;
pub use error::DatasetError;
pub use id::{DatasetId, Position};
