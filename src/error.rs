use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid catalog: {0}")]
    Catalog(String),

    #[error("Failed to load catalog '{path}': {source}")]
    CatalogLoad {
        path: PathBuf,
        #[source]
        source: Box<FacetError>,
    },

    #[error("{} search task(s) failed: {}", .causes.len(), render_causes(.causes))]
    Aggregate { causes: Vec<FacetError> },

    #[error("An unexpected error occurred: {0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl FacetError {
    /// Wrap the failures of a fork-join pair in a single aggregate error.
    /// Callers never see partial results: either every branch succeeded or
    /// the whole operation fails with all underlying causes attached.
    pub fn aggregate(causes: Vec<FacetError>) -> Self {
        FacetError::Aggregate { causes }
    }
}

fn render_causes(causes: &[FacetError]) -> String {
    causes
        .iter()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, FacetError>;
