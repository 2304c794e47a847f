//! Error types for the heliotrack core

use thiserror::Error;

/// Main error type for the tracking core
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}
