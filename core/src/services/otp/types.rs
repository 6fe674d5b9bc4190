//! Types for passcode service requests and results

use super::generator::OtpKind;

/// Parameters for issuing a passcode
///
/// Unset fields fall back to the service configuration.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Subject the passcode is issued to
    pub identifier: String,
    /// Kind of token to generate
    pub kind: OtpKind,
    /// Token length; service default when `None`
    pub length: Option<usize>,
    /// Validity window in minutes; service default when `None`
    pub validity_minutes: Option<i64>,
    /// Keep previously issued passcodes for the identifier alive
    pub allow_multiple: bool,
}

impl GenerateRequest {
    /// Request with defaults: configured length and validity, suppression on
    pub fn new(identifier: impl Into<String>, kind: OtpKind) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            length: None,
            validity_minutes: None,
            allow_multiple: false,
        }
    }

    /// Override the token length
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Override the validity window
    pub fn with_validity_minutes(mut self, minutes: i64) -> Self {
        self.validity_minutes = Some(minutes);
        self
    }

    /// Allow several live passcodes per identifier
    pub fn allow_multiple(mut self, allow: bool) -> Self {
        self.allow_multiple = allow;
        self
    }
}

/// Result of issuing a passcode
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Whether generation succeeded
    pub status: bool,
    /// The generated passcode; returned to the caller, never delivered
    pub token: String,
    /// Human-readable note distinguishing multiple-OTP mode
    pub message: String,
}

/// Result of a consuming validation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// True when the passcode matched, was unconsumed, and unexpired
    pub status: bool,
    /// Outcome description
    pub message: String,
}
