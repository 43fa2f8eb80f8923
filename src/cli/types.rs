use anyhow::Result;

use mmparser::parser::FilenameParser;
use mmparser::types::DatasetType;

/// List dataset types, their grammars and the recognized tags
pub fn run(parser: &FilenameParser) -> Result<()> {
    println!("Dataset Types:");
    for dataset_type in DatasetType::ALL {
        let grammar = parser
            .grammars()
            .get(dataset_type)
            .map(|g| g.to_string())
            .unwrap_or_else(|| "<unsupported>".to_string());
        let marker = if dataset_type == DatasetType::default() {
            " (default)"
        } else {
            ""
        };
        println!("  {:<16} {}{}", dataset_type, grammar, marker);
    }
    println!();

    println!("Channels:");
    for (id, name) in parser.channels() {
        println!("  {:<16} {}", id, name);
    }
    println!();

    let widefield: Vec<&str> = parser.widefield_identifiers().collect();
    println!("Widefield tags: {}", widefield.join(", "));

    Ok(())
}
