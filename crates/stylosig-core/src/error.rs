//! Error types for stylosig-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// The configured reference signature has a NaN or infinite component.
    #[error("reference signature component `{component}` is not a finite number: {value}")]
    NonFiniteReference {
        /// Name of the offending component.
        component: &'static str,
        /// The value that was read.
        value: f64,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during signature analysis and ranking.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// Ranking was requested over an empty corpus.
    #[error("no candidate texts provided")]
    NoCandidates,

    /// A signature was built from the wrong number of components.
    #[error("a signature has {expected} components, got {found}")]
    SignatureArity {
        /// Number of components a signature holds.
        expected: usize,
        /// Number of components supplied.
        found: usize,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
