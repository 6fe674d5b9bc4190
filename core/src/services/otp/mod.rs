//! One-time passcode service module
//!
//! This module provides the complete passcode workflow including:
//! - Numeric and alphanumeric token generation from the OS CSPRNG
//! - Suppression of previously issued passcodes per identifier
//! - Read-only validity checks and single-use consuming validation

mod clock;
mod config;
mod generator;
mod service;
mod types;


pub use clock::{Clock, FixedClock, SystemClock};
pub use config::OtpServiceConfig;
pub use generator::{OtpKind, ALPHANUMERIC_ALPHABET, MAX_ALPHANUMERIC_LENGTH};
pub use service::OtpService;
pub use types::{GenerateRequest, GenerateResult, ValidationResult};
