//! End-to-end demo of the passcode flow on the in-memory store.
//!
//! Run with: cargo run -p otp_infra --example otp_flow_demo

use std::sync::Arc;

use otp_core::services::otp::{
    GenerateRequest, OtpKind, OtpService, OtpServiceConfig, SystemClock,
};
use otp_infra::store::InMemoryOtpStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let store = Arc::new(InMemoryOtpStore::new());
    let service = OtpService::new(store, Arc::new(SystemClock), OtpServiceConfig::default());

    let generated = service
        .generate(GenerateRequest::new("demo-user", OtpKind::Numeric).with_length(6))
        .await?;
    println!("issued token: {}", generated.token);

    let usable = service.is_valid("demo-user", &generated.token).await?;
    println!("is_valid before consumption: {}", usable);

    let first = service.validate("demo-user", &generated.token).await?;
    println!("first validate: {} ({})", first.status, first.message);

    let second = service.validate("demo-user", &generated.token).await?;
    println!("second validate: {} ({})", second.status, second.message);

    Ok(())
}
