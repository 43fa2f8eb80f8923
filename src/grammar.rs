//! Filename grammars and the table that assigns one to each dataset type.
//!
//! Micro-Manager writes acquisitions as `<prefix>_<acq>_MMStack_<suffix>`.
//! Widefield snapshots carry no trailing acquisition number; their number
//! comes from a tag such as `WF13` inside the prefix instead.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::types::DatasetType;

/// Literal separating the acquisition prefix from the stack suffix.
pub const STACK_SEPARATOR: &str = "_MMStack_";

/// Channel identifiers recognized by default, with their long names.
pub const DEFAULT_CHANNELS: &[(&str, &str)] = &[
    ("A488", "AlexaFluor 488"),
    ("A647", "AlexaFluor 647"),
    ("A750", "AlexaFluor 750"),
    ("DAPI", "DAPI"),
    ("Cy5", "Cy5"),
];

/// Tags marking a widefield image number.
pub const DEFAULT_WIDEFIELD_IDENTIFIERS: &[&str] = &["WF"];

/// Token layout applied to a filename.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// `<prefix>_<acq>_MMStack_<suffix>`: the acquisition number precedes the separator
    Acquisition,
    /// `<prefix with WF<n>>_MMStack_<suffix>`: the widefield tag supplies the number
    Widefield,
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grammar::Acquisition => write!(f, "acquisition"),
            Grammar::Widefield => write!(f, "widefield"),
        }
    }
}

/// Grammar lookup keyed by dataset type.
///
/// A type missing from the table cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarTable {
    entries: BTreeMap<DatasetType, Grammar>,
}

impl GrammarTable {
    /// Create a table with no entries
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Grammar registered for `dataset_type`
    pub fn get(&self, dataset_type: DatasetType) -> Option<Grammar> {
        self.entries.get(&dataset_type).copied()
    }

    /// Register or replace the grammar for `dataset_type`
    pub fn insert(&mut self, dataset_type: DatasetType, grammar: Grammar) -> Option<Grammar> {
        self.entries.insert(dataset_type, grammar)
    }

    /// Unregister `dataset_type`
    pub fn remove(&mut self, dataset_type: DatasetType) -> Option<Grammar> {
        self.entries.remove(&dataset_type)
    }

    /// Registered entries in type order
    pub fn iter(&self) -> impl Iterator<Item = (DatasetType, Grammar)> + '_ {
        self.entries.iter().map(|(t, g)| (*t, *g))
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no type is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for GrammarTable {
    fn default() -> Self {
        let entries = DatasetType::ALL
            .iter()
            .map(|t| match t {
                DatasetType::WidefieldImage => (*t, Grammar::Widefield),
                _ => (*t, Grammar::Acquisition),
            })
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_covers_all_types() {
        let table = GrammarTable::default();
        assert_eq!(table.len(), DatasetType::ALL.len());
        assert_eq!(table.get(DatasetType::Localizations), Some(Grammar::Acquisition));
        assert_eq!(table.get(DatasetType::LocResults), Some(Grammar::Acquisition));
        assert_eq!(table.get(DatasetType::WidefieldImage), Some(Grammar::Widefield));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut table = GrammarTable::empty();
        assert!(table.is_empty());

        assert_eq!(table.insert(DatasetType::LocMetadata, Grammar::Widefield), None);
        assert_eq!(
            table.insert(DatasetType::LocMetadata, Grammar::Acquisition),
            Some(Grammar::Widefield)
        );
        assert_eq!(table.remove(DatasetType::LocMetadata), Some(Grammar::Acquisition));
        assert_eq!(table.get(DatasetType::LocMetadata), None);
    }

    #[test]
    fn test_grammar_names() {
        let grammar: Grammar = toml::Value::String("widefield".into()).try_into().unwrap();
        assert_eq!(grammar, Grammar::Widefield);
        assert_eq!(Grammar::Acquisition.to_string(), "acquisition");
    }
}
