//! Error types for the board engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during engine startup and board execution.

/// Top-level error for the board engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: liveboard_core::config::ConfigError,
    },

    /// Clock initialization failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: liveboard_core::clock::ClockError,
    },

    /// Board runner failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: liveboard_core::runner::RunnerError,
    },

    /// The configured favorite name was not found in the roster.
    #[error("unknown favorite: {name}")]
    UnknownFavorite {
        /// The name that failed to resolve.
        name: String,
    },
}
