//! Library error type.

use thiserror::Error;

/// Errors surfaced by parsers, the config loader and browser surfaces.
///
/// Step generators and renderers are infallible; only the edges of the
/// library (user input, files, DOM calls) report errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Algorithm name not recognised.
    #[error("unknown algorithm `{0}` (expected bubble, quick, merge, binary or linear)")]
    UnknownAlgorithm(String),

    /// Signal demo name not recognised.
    #[error("unknown signal `{0}` (expected sine, am, fm or filter)")]
    UnknownSignal(String),

    /// Modulation scheme not recognised.
    #[error("unknown modulation `{0}` (expected bpsk, qpsk, 16qam or 64qam)")]
    UnknownModulation(String),

    /// Channel scenario not recognised.
    #[error("unknown scenario `{0}` (expected line-of-sight, multipath, fading or mimo)")]
    UnknownScenario(String),

    /// Background mode not recognised.
    #[error("unknown background mode `{0}` (expected code-rain, neural-network or data-flow)")]
    UnknownBackground(String),

    /// Theme value not recognised.
    #[error("unknown theme `{0}` (expected light, dark or system)")]
    UnknownTheme(String),

    /// Config file exists but does not parse.
    #[error("invalid config {path}: {message}")]
    InvalidConfig {
        /// File (or `<inline>`) that failed to parse
        path: String,
        /// Parser message
        message: String,
    },

    /// Filesystem error while reading config.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A browser surface (DOM, storage) rejected an operation.
    #[error("surface: {0}")]
    Surface(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
