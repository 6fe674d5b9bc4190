//! Domain-specific error types and error handling.
//!
//! Expected negative outcomes of a validation attempt (missing, already
//! consumed, expired) are modeled as status-carrying results, not errors;
//! the variants here cover caller mistakes and store failures only.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum OtpError {
    /// Caller asked for a passcode kind outside the recognized set
    #[error("{kind} is not a supported type")]
    UnsupportedType { kind: String },

    /// Requested alphanumeric length falls outside the 36-character alphabet
    #[error("invalid token length {requested}: must be between 1 and {max}")]
    InvalidLength { requested: usize, max: usize },

    /// Input validation failed
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Record store failure, propagated unchanged
    #[error("store error: {message}")]
    Store { message: String },
}

pub type OtpResult<T> = Result<T, OtpError>;
