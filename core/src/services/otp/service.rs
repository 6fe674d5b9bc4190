//! Main passcode service implementation

use std::sync::Arc;

use tracing;

use crate::domain::entities::otp_record::OtpRecord;
use crate::errors::{OtpError, OtpResult};
use crate::repositories::OtpRepository;

use super::clock::Clock;
use super::config::OtpServiceConfig;
use super::generator;
use super::types::{GenerateRequest, GenerateResult, ValidationResult};

/// Service issuing and validating one-time passcodes
///
/// Generic over the record store and the time source, so storage technology
/// and the system clock stay outside the core.
pub struct OtpService<R: OtpRepository, C: Clock> {
    /// Record store holding issued passcodes
    repository: Arc<R>,
    /// Time source for creation and expiry decisions
    clock: Arc<C>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<R: OtpRepository, C: Clock> OtpService<R, C> {
    /// Create a new passcode service
    ///
    /// # Arguments
    ///
    /// * `repository` - Record store implementation
    /// * `clock` - Time source implementation
    /// * `config` - Service configuration
    pub fn new(repository: Arc<R>, clock: Arc<C>, config: OtpServiceConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Issue a new passcode for the request's identifier
    ///
    /// This method:
    /// 1. Validates the identifier, length, and validity window
    /// 2. Generates a token of the requested kind from the OS CSPRNG
    /// 3. Replaces all prior records for the identifier unless
    ///    `allow_multiple` is set (the store does delete and insert in one
    ///    critical section)
    /// 4. Persists the record with `created_at` from the clock
    ///
    /// The token is returned to the caller and not delivered anywhere.
    ///
    /// # Returns
    ///
    /// * `Ok(GenerateResult)` - Status, token, and a mode-describing message
    /// * `Err(OtpError)` - Invalid input, unsupported length, or store failure
    pub async fn generate(&self, request: GenerateRequest) -> OtpResult<GenerateResult> {
        if request.identifier.is_empty() {
            return Err(OtpError::Validation {
                message: "identifier must not be empty".to_string(),
            });
        }

        let length = request.length.unwrap_or(self.config.default_token_length);
        if length == 0 {
            return Err(OtpError::Validation {
                message: "token length must be positive".to_string(),
            });
        }

        let validity_minutes = request
            .validity_minutes
            .unwrap_or(self.config.default_validity_minutes);
        if validity_minutes <= 0 {
            return Err(OtpError::Validation {
                message: "validity minutes must be positive".to_string(),
            });
        }

        // Token generation fails before anything is written to the store
        let token = generator::generate_token(request.kind, length)?;

        let record = OtpRecord::new(
            request.identifier.clone(),
            token.clone(),
            validity_minutes,
            self.clock.now(),
        );

        let record = if request.allow_multiple {
            self.repository.create(record).await?
        } else {
            self.repository.replace_for_identifier(record).await?
        };

        tracing::info!(
            identifier = %record.identifier,
            kind = %request.kind,
            length = length,
            validity_minutes = validity_minutes,
            allow_multiple = request.allow_multiple,
            event = "otp_generated",
            "Issued new one-time passcode"
        );

        let message = if request.allow_multiple {
            "OTP generated (multiple supported)".to_string()
        } else {
            "OTP generated".to_string()
        };

        Ok(GenerateResult {
            status: true,
            token,
            message,
        })
    }

    /// Check whether a passcode would validate, without consuming it
    ///
    /// Read-only: the record's `valid` flag is never touched, so repeated
    /// calls keep returning the same answer until a `validate` or a new
    /// `generate` changes the underlying state.
    pub async fn is_valid(&self, identifier: &str, token: &str) -> OtpResult<bool> {
        let now = self.clock.now();
        let candidate = self.find_candidate(identifier, token).await?;

        Ok(candidate.map(|r| r.is_usable(now)).unwrap_or(false))
    }

    /// Validate and consume a passcode
    ///
    /// The first attempt against a live record marks it consumed regardless
    /// of the expiry outcome; a passcode can therefore succeed at most once.
    /// Expected negative outcomes come back as `status: false` results, not
    /// errors:
    ///
    /// * no matching record - "OTP does not exist"
    /// * record already consumed - "OTP is not valid"
    /// * record expired (and now consumed) - "OTP Expired"
    pub async fn validate(&self, identifier: &str, token: &str) -> OtpResult<ValidationResult> {
        let candidate = match self.find_candidate(identifier, token).await? {
            Some(record) => record,
            None => {
                tracing::warn!(
                    identifier = identifier,
                    event = "otp_missing",
                    "Validation attempt for unknown passcode"
                );
                return Ok(ValidationResult {
                    status: false,
                    message: "OTP does not exist".to_string(),
                });
            }
        };

        if !candidate.valid {
            tracing::warn!(
                identifier = identifier,
                event = "otp_rejected",
                "Validation attempt for already consumed passcode"
            );
            return Ok(ValidationResult {
                status: false,
                message: "OTP is not valid".to_string(),
            });
        }

        let now = self.clock.now();

        // Consume before the expiry check; the store serializes this flip,
        // so a concurrent attempt that loses the race is treated as a
        // second validation of an already consumed passcode.
        let consumed_now = self.repository.mark_consumed(candidate.id).await?;
        if !consumed_now {
            tracing::warn!(
                identifier = identifier,
                event = "otp_rejected",
                "Passcode consumed by a concurrent validation"
            );
            return Ok(ValidationResult {
                status: false,
                message: "OTP is not valid".to_string(),
            });
        }

        if candidate.is_expired(now) {
            tracing::warn!(
                identifier = identifier,
                event = "otp_expired",
                "Passcode expired before validation"
            );
            return Ok(ValidationResult {
                status: false,
                message: "OTP Expired".to_string(),
            });
        }

        tracing::info!(
            identifier = identifier,
            event = "otp_consumed",
            "Passcode validated and consumed"
        );
        Ok(ValidationResult {
            status: true,
            message: "OTP is valid".to_string(),
        })
    }

    /// Select the record a check refers to
    ///
    /// Several records can share `(identifier, token)` under multiple-OTP
    /// mode. The most recently created unconsumed record wins, falling back
    /// to the most recently created one when all are consumed.
    async fn find_candidate(&self, identifier: &str, token: &str) -> OtpResult<Option<OtpRecord>> {
        let matches = self.repository.find_matching(identifier, token).await?;

        let best_live = matches
            .iter()
            .filter(|r| r.valid)
            .max_by_key(|r| r.created_at);
        let best_any = matches.iter().max_by_key(|r| r.created_at);

        Ok(best_live.or(best_any).cloned())
    }
}
