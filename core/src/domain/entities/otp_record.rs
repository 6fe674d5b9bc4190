//! One-time passcode record entity.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token length used when the caller does not specify one
pub const DEFAULT_TOKEN_LENGTH: usize = 4;

/// Validity window in minutes used when the caller does not specify one
pub const DEFAULT_VALIDITY_MINUTES: i64 = 10;

/// Persisted one-time passcode record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Subject the passcode was issued to (user id, phone number, ...)
    pub identifier: String,

    /// The passcode value
    pub token: String,

    /// Timestamp when the record was created, immutable after creation
    pub created_at: DateTime<Utc>,

    /// Minutes after `created_at` during which the token is usable
    pub validity_minutes: i64,

    /// True until the record is consumed or superseded
    pub valid: bool,
}

impl OtpRecord {
    /// Creates a new live record issued at `created_at`
    ///
    /// # Arguments
    ///
    /// * `identifier` - The subject the passcode is issued to
    /// * `token` - The generated passcode value
    /// * `validity_minutes` - Minutes the token stays usable
    /// * `created_at` - Issue instant, taken from the service clock
    pub fn new(
        identifier: String,
        token: String,
        validity_minutes: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            identifier,
            token,
            created_at,
            validity_minutes,
            valid: true,
        }
    }

    /// The instant at which the token stops being usable
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::minutes(self.validity_minutes)
    }

    /// Checks whether the record has expired at `now`
    ///
    /// A token is usable strictly before its expiry instant, so `now`
    /// equal to `expires_at` already counts as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    /// Checks whether the record could still validate at `now`
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        self.valid && !self.is_expired(now)
    }

    /// Marks the record consumed
    ///
    /// The transition is one-way; nothing sets `valid` back to true.
    pub fn consume(&mut self) {
        self.valid = false;
    }
}
