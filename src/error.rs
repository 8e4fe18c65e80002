//! Error types and handling for fluent-stream
//!
//! Absence and failure are ordinary values (`Optional::Empty`, `Outcome::Err`).
//! The variants below only surface on misuse of an accessor or when a worker
//! of a parallel terminal operation panics.

use std::any::Any;

/// Main error type for fluent-stream operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FluentError {
    /// Value of an empty `Optional` was read
    #[error("empty option")]
    EmptyValueAccess,
    /// Value of an `Outcome::Err` was read
    #[error("error result")]
    ResultIsError,
    /// Error of an `Outcome::Ok` was read
    #[error("ok result")]
    ResultIsOk,
    /// A consumer or adapter closure panicked inside a worker
    #[error("worker panicked: {message}")]
    WorkerPanicked { message: String },
}

/// Result type for fluent-stream operations
pub type FluentResult<T> = Result<T, FluentError>;

/// Opaque error payload carried by `Outcome` when no error type is named
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

impl FluentError {
    /// Builds a `WorkerPanicked` from a payload returned by `catch_unwind`.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        FluentError::WorkerPanicked { message }
    }
}
