//! Common types shared across Gridcheck crates.
//!
//! This crate defines the workspace error type and the observability helpers
//! used by the binary and integration tests. It is intentionally lightweight
//! so that every crate can depend on it without heavy transitive costs.
//!
//! - [`observability`]: centralised tracing/logging initialisation
//! - [`GridcheckError`] and [`Result`]: shared error handling

pub mod observability;

/// Error types used across the Gridcheck suite.
#[derive(thiserror::Error, Debug)]
pub enum GridcheckError {
    /// A scenario step failed against the live dashboard.
    #[error("scenario \"{scenario}\" failed: {message}")]
    Scenario { scenario: String, message: String },

    /// The browser driver reported an error.
    #[error("driver error: {0}")]
    Driver(#[from] anyhow::Error),

    /// A table query could not be answered.
    #[error(transparent)]
    Table(#[from] gridcheck_table::TableError),

    /// A named metric panel was absent from the dashboard.
    #[error("dashboard metric \"{0}\" not found")]
    MetricNotFound(String),

    /// Configuration was incomplete or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Operation exceeded the configured timeout.
    #[error("timed out waiting for the page")]
    Timeout,
}

/// Convenient alias for results that use [`GridcheckError`].
pub type Result<T> = std::result::Result<T, GridcheckError>;
