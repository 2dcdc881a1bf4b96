use thiserror::Error;

use crate::error::{ConfigError, DecodeError};

/// Errors returned while loading or decoding a trace file.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("trace parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid decoder options: {0}")]
    Config(#[from] ConfigError),
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
