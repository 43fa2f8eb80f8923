use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use mmparser::config::ParserConfig;
use mmparser::parser::FilenameParser;
use mmparser::types::DatasetType;

mod check;
mod config;
mod group;
mod parse;
mod types;

/// mmparser - Micro-Manager filename parser
#[derive(Parser)]
#[command(name = "mmparser")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load channel, widefield and grammar tables from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Dataset type selector.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum DatasetTypeArg {
    /// Localizations (default)
    #[default]
    Localizations,
    /// Localization results (legacy default)
    LocResults,
    /// Localization metadata
    LocMetadata,
    /// Widefield images
    WidefieldImage,
}

impl From<DatasetTypeArg> for DatasetType {
    fn from(arg: DatasetTypeArg) -> Self {
        match arg {
            DatasetTypeArg::Localizations => DatasetType::Localizations,
            DatasetTypeArg::LocResults => DatasetType::LocResults,
            DatasetTypeArg::LocMetadata => DatasetType::LocMetadata,
            DatasetTypeArg::WidefieldImage => DatasetType::WidefieldImage,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse filenames and print their dataset identifiers
    Parse {
        /// Filenames or paths to parse (need not exist)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Dataset type selecting the filename grammar
        #[arg(short = 't', long = "type", value_enum)]
        dataset_type: Option<DatasetTypeArg>,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Report which filenames parse cleanly, with warnings, or not at all
    Check {
        /// Filenames or paths to check
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Dataset type selecting the filename grammar
        #[arg(short = 't', long = "type", value_enum)]
        dataset_type: Option<DatasetTypeArg>,
    },

    /// Group filenames that map to the same dataset identifier
    Group {
        /// Filenames or paths to group
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Dataset type selecting the filename grammar
        #[arg(short = 't', long = "type", value_enum)]
        dataset_type: Option<DatasetTypeArg>,

        /// Only list identifiers shared by more than one file
        #[arg(long)]
        duplicates: bool,
    },

    /// List dataset types, grammars and recognized tags
    Types,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

/// Settings resolved from the optional config file.
struct Settings {
    parser: FilenameParser,
    output: config::OutputConfig,
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    match path {
        Some(path) => {
            let (cli_config, parser_config) = config::Config::from_file(path)?;
            Ok(Settings {
                parser: FilenameParser::new(&parser_config)?,
                output: cli_config.output,
            })
        }
        None => Ok(Settings {
            parser: FilenameParser::new(&ParserConfig::default())?,
            output: config::OutputConfig::default(),
        }),
    }
}

/// Explicit flag wins, then the config file, then the library default.
fn resolve_type(arg: Option<DatasetTypeArg>, output: &config::OutputConfig) -> Result<DatasetType> {
    match arg {
        Some(arg) => Ok(arg.into()),
        None => match &output.dataset_type {
            Some(name) => Ok(name.parse()?),
            None => Ok(DatasetType::default()),
        },
    }
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_ref())?;

    match cli.command {
        Commands::Parse {
            files,
            dataset_type,
            json,
        } => {
            let dataset_type = resolve_type(dataset_type, &settings.output)?;
            let json = json || settings.output.json.unwrap_or(false);
            parse::run(&settings.parser, files, dataset_type, json)
        }
        Commands::Check {
            files,
            dataset_type,
        } => {
            let dataset_type = resolve_type(dataset_type, &settings.output)?;
            check::run(&settings.parser, files, dataset_type)
        }
        Commands::Group {
            files,
            dataset_type,
            duplicates,
        } => {
            let dataset_type = resolve_type(dataset_type, &settings.output)?;
            group::run(&settings.parser, files, dataset_type, duplicates)
        }
        Commands::Types => types::run(&settings.parser),
    }
}
