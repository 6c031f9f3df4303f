use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog JSON file. Falls back to the config file, then to the
    /// built-in sample catalog.
    #[clap(long, value_parser)]
    pub catalog: Option<PathBuf>,

    #[clap(long, value_parser, default_value_t = false)]
    pub verbose: bool,

    #[clap(long, value_parser)]
    pub log: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog by size and color, with facet counts
    Search {
        /// Desired sizes (repeat or comma-separate; empty = all sizes)
        #[clap(long = "size", value_parser, use_value_delimiter = true)]
        sizes: Vec<String>,

        /// Desired colors (repeat or comma-separate; empty = all colors)
        #[clap(long = "color", value_parser, use_value_delimiter = true)]
        colors: Vec<String>,

        #[clap(long, value_parser, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the catalog's full size/color distribution
    Facets {
        #[clap(long, value_parser, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the built-in sample catalog as JSON
    Sample,
    /// Generate shell completions
    Completions {
        #[clap(value_parser)]
        shell: clap_complete::Shell,
    },
}

#[derive(ValueEnum, Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
