use thiserror::Error;

/// Errors that can occur while producing a modal analysis report
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Missing table, missing attribute, or unreadable model file
    #[error("dataset access error: {0}")]
    DatasetAccess(#[from] hdf5::Error),

    /// A column name not present in the sweep table was requested
    #[error("dataset access error: the sweep table has no column named '{column}'")]
    UnknownColumn { column: String },

    /// A column has no registered human-readable description
    #[error("no description registered for column '{column}'")]
    MissingMetadata { column: String },

    /// A metadata attribute does not parse as a YAML mapping
    #[error("malformed '{attribute}' attribute: {source}")]
    MalformedMetadata {
        attribute: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    /// Filtered rows do not cover the (a, t_b) rectangle exactly once
    #[error(
        "filtered rows do not form a complete {n_a}x{n_t} grid over (a, t_b): \
         expected {expected} row(s), found {actual}"
    )]
    IrregularGrid {
        n_a: usize,
        n_t: usize,
        expected: usize,
        actual: usize,
    },

    /// Figure rendering failed
    #[error("render error: {0}")]
    Render(String),

    /// The report document could not be created or finalized
    #[error("report write error: {0}")]
    DocumentWrite(String),

    /// Invalid configuration (unknown colormap, ...)
    #[error("configuration error: {0}")]
    Config(String),
}

/// Type alias for Results using AnalysisError
pub type Result<T> = std::result::Result<T, AnalysisError>;
