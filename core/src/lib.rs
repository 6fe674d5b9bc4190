//! # OTP Core
//!
//! Core domain layer for one-time passcode issuance and validation.
//! This crate contains the passcode record entity, the record store
//! interface, the clock abstraction, and the service that ties them
//! together. Storage technology and the system clock stay outside.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use repositories::OtpRepository;
pub use errors::*;
