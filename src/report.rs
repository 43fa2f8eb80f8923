//! Batch parse reports.
//!
//! A [`ParseReport`] runs one [`FilenameParser`] over many filenames and records,
//! per file, whether the filename parsed cleanly, parsed with a caveat, or failed.

use std::fmt;
use std::path::Path;

#[cfg(feature = "colorized_output")]
use console::style;

use crate::dataset::DatasetId;
use crate::parser::FilenameParser;
use crate::types::DatasetType;

/// Outcome of parsing one filename
#[derive(Debug, Clone)]
pub enum EntryStatus {
    /// Parsed with every expected token
    Ok(DatasetId),
    /// Parsed, but an expected token was absent
    Warning(DatasetId, String),
    /// Did not match the grammar
    Failed(String),
}

impl EntryStatus {
    fn is_ok(&self) -> bool {
        matches!(self, EntryStatus::Ok(_))
    }

    fn is_warning(&self) -> bool {
        matches!(self, EntryStatus::Warning(..))
    }

    fn is_failed(&self) -> bool {
        matches!(self, EntryStatus::Failed(_))
    }

    /// Parsed identifier, if any
    pub fn ids(&self) -> Option<&DatasetId> {
        match self {
            EntryStatus::Ok(ids) | EntryStatus::Warning(ids, _) => Some(ids),
            EntryStatus::Failed(_) => None,
        }
    }
}

/// Parse result for a single filename
#[derive(Debug, Clone)]
pub struct ReportEntry {
    /// Filename as given
    pub filename: String,
    /// Result status
    pub status: EntryStatus,
}

/// Parse results for a batch of filenames
#[derive(Debug)]
pub struct ParseReport {
    /// Type every filename was parsed as
    pub dataset_type: DatasetType,
    /// Per-file results in input order
    pub entries: Vec<ReportEntry>,
}

impl ParseReport {
    /// Parse every filename in `filenames` as `dataset_type`
    pub fn build<I, P>(parser: &FilenameParser, filenames: I, dataset_type: DatasetType) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let entries = filenames
            .into_iter()
            .map(|filename| {
                let filename = filename.as_ref();
                let status = match parser.parse(filename, dataset_type) {
                    Ok(ids) if ids.acq_id.is_none() => EntryStatus::Warning(
                        ids,
                        "no acquisition number (missing widefield tag)".to_string(),
                    ),
                    Ok(ids) => EntryStatus::Ok(ids),
                    Err(e) => EntryStatus::Failed(e.to_string()),
                };
                ReportEntry {
                    filename: filename.display().to_string(),
                    status,
                }
            })
            .collect();

        Self {
            dataset_type,
            entries,
        }
    }

    /// Check if any filename failed to parse
    pub fn has_failures(&self) -> bool {
        self.entries.iter().any(|e| e.status.is_failed())
    }

    /// Check if any filename produced a warning
    pub fn has_warnings(&self) -> bool {
        self.entries.iter().any(|e| e.status.is_warning())
    }

    /// Count the number of clean parses
    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|e| e.status.is_ok()).count()
    }

    /// Count the number of warnings
    pub fn warning_count(&self) -> usize {
        self.entries.iter().filter(|e| e.status.is_warning()).count()
    }

    /// Count the number of failures
    pub fn failure_count(&self) -> usize {
        self.entries.iter().filter(|e| e.status.is_failed()).count()
    }

    /// Render the report, coloring each marker by status when the
    /// `colorized_output` feature is enabled.
    pub fn format_colored(&self) -> String {
        let mut output = format!("Dataset type: {}\n", self.dataset_type);
        for entry in &self.entries {
            output.push_str(&format!("{} {}\n", colored_marker(&entry.status), entry));
        }
        output.push_str(&self.summary());
        output
    }

    fn summary(&self) -> String {
        format!(
            "{} parsed, {} warnings, {} failed",
            self.success_count(),
            self.warning_count(),
            self.failure_count()
        )
    }
}

impl EntryStatus {
    fn marker(&self) -> &'static str {
        match self {
            EntryStatus::Ok(_) => "[OK]  ",
            EntryStatus::Warning(..) => "[WARN]",
            EntryStatus::Failed(_) => "[FAIL]",
        }
    }
}

#[cfg(feature = "colorized_output")]
fn colored_marker(status: &EntryStatus) -> String {
    let marker = style(status.marker());
    match status {
        EntryStatus::Ok(_) => marker.green(),
        EntryStatus::Warning(..) => marker.yellow(),
        EntryStatus::Failed(_) => marker.red().bold(),
    }
    .to_string()
}

#[cfg(not(feature = "colorized_output"))]
fn colored_marker(status: &EntryStatus) -> String {
    status.marker().to_string()
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            EntryStatus::Ok(ids) => write!(f, "{} -> {}", self.filename, ids),
            EntryStatus::Warning(ids, msg) => write!(f, "{} -> {} ({})", self.filename, ids, msg),
            EntryStatus::Failed(msg) => write!(f, "{}: {}", self.filename, msg),
        }
    }
}

impl fmt::Display for ParseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset type: {}", self.dataset_type)?;
        for entry in &self.entries {
            writeln!(f, "{} {}", entry.status.marker(), entry)?;
        }
        write!(f, "{}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let parser = FilenameParser::default();
        let report = ParseReport::build(
            &parser,
            [
                "HeLa_Control_WF13_MMStack_Pos0.ome.tif",
                "HeLa_Control_MMStack_Pos0.ome.tif",
                "not a micro-manager file",
            ],
            DatasetType::WidefieldImage,
        );

        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.success_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.failure_count(), 1);
        assert!(report.has_failures());
        assert!(report.has_warnings());
        assert!(report.entries[2].status.ids().is_none());
    }

    #[test]
    fn test_report_display() {
        let parser = FilenameParser::default();
        let report = ParseReport::build(
            &parser,
            ["Cos7_Microtubules_A647_3_MMStack_Pos0_locResults.dat"],
            DatasetType::Localizations,
        );

        let text = report.to_string();
        assert!(text.contains("Dataset type: Localizations"));
        assert!(text.contains("Cos7_Microtubules/acq=3/ch=A647/pos=0"));
        assert!(text.contains("[OK]"));
        assert!(text.ends_with("1 parsed, 0 warnings, 0 failed"));
        assert!(!report.has_failures());
    }

    #[test]
    fn test_report_colored_lists_every_entry() {
        let parser = FilenameParser::default();
        let report = ParseReport::build(
            &parser,
            ["HeLa_Control_MMStack_Pos0.ome.tif", "blablabla 214"],
            DatasetType::WidefieldImage,
        );

        let text = report.format_colored();
        assert!(text.contains("[WARN]"));
        assert!(text.contains("missing widefield tag"));
        assert!(text.contains("[FAIL]"));
        assert!(text.contains("blablabla 214: File could not be parsed"));
        assert!(text.ends_with("0 parsed, 1 warnings, 1 failed"));
    }
}
