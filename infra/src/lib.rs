//! # Infrastructure Layer
//!
//! Record store implementations backing the `otp_core` repository
//! interface. The core stays storage-agnostic; this crate supplies the
//! concrete stores and owns the concurrency discipline they promise:
//! suppression (delete-then-insert) runs as one critical section per
//! identifier, and consumption is a serialized read-modify-write.

// Re-export core types for convenience
pub use otp_core::errors::*;

/// Store module - record store implementations
pub mod store;
