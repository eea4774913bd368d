//! Error types for the streaming event model

use thiserror::Error;

/// Errors produced when resolving wire strings back into model values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unrecognized media type: {0:?}")]
    UnrecognizedMediaType(String),
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;
