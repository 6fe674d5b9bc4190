pub mod otp;

pub use otp::OtpRepository;

#[cfg(test)]
pub use otp::MockOtpRepository;
