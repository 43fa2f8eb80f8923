use anyhow::Result;
use std::path::PathBuf;

use mmparser::parser::FilenameParser;
use mmparser::report::ParseReport;
use mmparser::types::DatasetType;

/// Print a parse report for the given filenames
pub fn run(parser: &FilenameParser, files: Vec<PathBuf>, dataset_type: DatasetType) -> Result<()> {
    let report = ParseReport::build(parser, &files, dataset_type);

    // Use colorized output if available
    #[cfg(feature = "colorized_output")]
    {
        println!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", report);
    }

    // Exit with error code if any filename failed
    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
