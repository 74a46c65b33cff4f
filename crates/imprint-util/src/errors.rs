use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all Imprint operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ImprintError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed configuration file (e.g. imprint.toml).
    #[error("Config error: {message}")]
    #[diagnostic(help("Check your imprint.toml for syntax errors"))]
    Config { message: String },

    /// License or header application failed.
    #[error("License error: {message}")]
    License { message: String },

    /// Invocation of the external git binary failed.
    #[error("Git error: {message}")]
    Git { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ImprintResult<T> = miette::Result<T>;
