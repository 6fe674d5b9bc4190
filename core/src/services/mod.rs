//! Business services containing domain logic and use cases.

pub mod otp;

// Re-export commonly used types
pub use otp::{
    Clock, FixedClock, GenerateRequest, GenerateResult, OtpKind, OtpService, OtpServiceConfig,
    SystemClock, ValidationResult,
};
