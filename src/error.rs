use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {0} is not registered in the graph")]
    NodeNotFound(String),
    #[error("edge costs must be finite and non-negative: {0}")]
    InvalidCost(String),
    #[error("invalid random graph configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot join comparisons with different rows: expected {expected:?}, found {found:?}")]
    MismatchedRows {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("cannot append comparisons with different headers: expected {expected:?}, found {found:?}")]
    MismatchedHeaders {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("failed to read suite file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse suite file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
