pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod output_formats;
pub mod search;

pub use catalog::{
    AttributeValue, Catalog, Shirt, ShirtId, Universe, ValueId, DEFAULT_COLORS, DEFAULT_SIZES,
};
pub use clap::Parser;
pub use cli::{Cli, Commands, OutputFormat};
pub use error::{FacetError, Result};
pub use search::{AttributeIndex, FacetCount, SearchEngine, SearchQuery, SearchResults};
