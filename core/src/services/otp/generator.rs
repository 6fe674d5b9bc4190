//! Token generation for numeric and alphanumeric passcodes.

use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::{OtpError, OtpResult};

/// Alphabet for alphanumeric passcodes, lowercase only
pub const ALPHANUMERIC_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Upper bound on alphanumeric length; characters are drawn without
/// replacement, so a token can never be longer than the alphabet
pub const MAX_ALPHANUMERIC_LENGTH: usize = ALPHANUMERIC_ALPHABET.len();

/// Kind of passcode to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpKind {
    /// Digits 0-9 drawn independently; leading zeros permitted
    Numeric,
    /// Distinct characters from the 36-character `0-9a-z` alphabet
    Alphanumeric,
}

impl FromStr for OtpKind {
    type Err = OtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numeric" => Ok(OtpKind::Numeric),
            // "alpha_numeric" is the legacy spelling, still accepted
            "alphanumeric" | "alpha_numeric" => Ok(OtpKind::Alphanumeric),
            other => Err(OtpError::UnsupportedType {
                kind: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OtpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OtpKind::Numeric => write!(f, "numeric"),
            OtpKind::Alphanumeric => write!(f, "alphanumeric"),
        }
    }
}

/// Generate a token of the given kind and length
///
/// Uses `OsRng` (OS-provided CSPRNG) for all draws. Callers validate that
/// `length` is positive before reaching this point.
pub(crate) fn generate_token(kind: OtpKind, length: usize) -> OtpResult<String> {
    match kind {
        OtpKind::Numeric => numeric_token(length),
        OtpKind::Alphanumeric => alphanumeric_token(length),
    }
}

/// Draw `length` digits, each uniformly and independently from 0-9
fn numeric_token(length: usize) -> OtpResult<String> {
    let mut rng = OsRng;
    Ok((0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect())
}

/// Shuffle the alphabet and truncate to `length`
///
/// Sampling is without replacement, so every character of the result is
/// distinct and `length` above the alphabet size is an error rather than a
/// silent truncation.
fn alphanumeric_token(length: usize) -> OtpResult<String> {
    if length == 0 || length > MAX_ALPHANUMERIC_LENGTH {
        return Err(OtpError::InvalidLength {
            requested: length,
            max: MAX_ALPHANUMERIC_LENGTH,
        });
    }

    let mut alphabet = *ALPHANUMERIC_ALPHABET;
    alphabet.shuffle(&mut OsRng);

    Ok(alphabet[..length].iter().map(|&b| char::from(b)).collect())
}
