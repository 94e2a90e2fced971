//! Error types for the scripting facade

use thiserror::Error;

/// Main error type for facade operations.
///
/// Engine return codes are deliberately *not* errors: every forwarded call
/// hands the engine's integer code back to the caller unchanged. `SapError`
/// covers the facade's own precondition failures (bad symbols, bad units,
/// bad paths) and transport-level bridge failures.
#[derive(Error, Debug)]
pub enum SapError {
    #[error("unknown symbol '{symbol}' in table {table}")]
    UnknownSymbol {
        symbol: String,
        table: &'static str,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unsupported drawing unit '{0}' (expected mm, cm or m)")]
    UnsupportedUnit(String),

    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("malformed drawing: {0}")]
    MalformedDrawing(String),

    #[error("bridge failure calling '{method}': {message}")]
    Bridge { method: String, message: String },

    #[error("out-parameter {index} has the wrong type (expected {expected})")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for facade operations
pub type SapResult<T> = Result<T, SapError>;
