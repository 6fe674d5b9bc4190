//! Configuration for the passcode service

use crate::domain::entities::otp_record::{DEFAULT_TOKEN_LENGTH, DEFAULT_VALIDITY_MINUTES};

/// Configuration for the passcode service
///
/// Defaults live here instead of inside the call logic so the effective
/// behavior stays auditable.
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Token length applied when a request does not specify one
    pub default_token_length: usize,
    /// Validity window in minutes applied when a request does not specify one
    pub default_validity_minutes: i64,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            default_token_length: DEFAULT_TOKEN_LENGTH,
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
        }
    }
}
