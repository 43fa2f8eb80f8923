use anyhow::Result;
use log::warn;
use std::collections::BTreeMap;
use std::path::PathBuf;

use mmparser::dataset::DatasetId;
use mmparser::parser::FilenameParser;
use mmparser::types::DatasetType;

/// Group filenames by the identifier they parse to
pub fn run(
    parser: &FilenameParser,
    files: Vec<PathBuf>,
    dataset_type: DatasetType,
    duplicates_only: bool,
) -> Result<()> {
    let mut groups: BTreeMap<DatasetId, Vec<PathBuf>> = BTreeMap::new();

    for file in files {
        match parser.parse(&file, dataset_type) {
            Ok(ids) => groups.entry(ids).or_default().push(file),
            Err(e) => warn!("Skipping {}: {}", file.display(), e),
        }
    }

    for (ids, members) in &groups {
        if duplicates_only && members.len() < 2 {
            continue;
        }
        println!("{} ({} files)", ids, members.len());
        for member in members {
            println!("  {}", member.display());
        }
    }

    Ok(())
}
