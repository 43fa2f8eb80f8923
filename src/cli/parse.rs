use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

use mmparser::dataset::DatasetId;
use mmparser::parser::FilenameParser;
use mmparser::types::DatasetType;

/// One JSON output line
#[derive(Serialize)]
struct ParsedLine<'a> {
    filename: String,
    dataset_type: DatasetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    ids: Option<&'a DatasetId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Parse each filename and print its identifier
pub fn run(
    parser: &FilenameParser,
    files: Vec<PathBuf>,
    dataset_type: DatasetType,
    json: bool,
) -> Result<()> {
    info!("Parsing {} filenames as {}", files.len(), dataset_type);

    let mut failures = 0usize;
    for file in &files {
        let result = parser.parse(file, dataset_type);
        if result.is_err() {
            failures += 1;
        }

        if json {
            let (ids, error) = match &result {
                Ok(ids) => (Some(ids), None),
                Err(e) => (None, Some(e.to_string())),
            };
            let line = ParsedLine {
                filename: file.display().to_string(),
                dataset_type,
                ids,
                error,
            };
            println!(
                "{}",
                serde_json::to_string(&line).context("Failed to serialize identifier")?
            );
        } else {
            match &result {
                Ok(ids) => println!("{}\t{}", file.display(), ids),
                Err(e) => eprintln!("{}\terror: {}", file.display(), e),
            }
        }
    }

    info!("{} parsed, {} failed", files.len() - failures, failures);

    // Exit with error code if any filename failed
    if failures > 0 {
        std::process::exit(1);
    }

    Ok(())
}
