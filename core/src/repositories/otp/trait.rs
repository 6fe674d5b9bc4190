//! Record store trait defining the interface for passcode persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::otp_record::OtpRecord;
use crate::errors::OtpResult;

/// Repository trait for OtpRecord persistence operations
///
/// Implementations own the concurrency discipline: `replace_for_identifier`
/// must be a single critical section per identifier, and `mark_consumed`
/// must serialize the read-modify-write on the `valid` flag so that at most
/// one concurrent caller observes the true-to-false transition.
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Insert a new record alongside whatever already exists
    ///
    /// # Arguments
    /// * `record` - The OtpRecord entity to persist
    ///
    /// # Returns
    /// * `Ok(OtpRecord)` - The stored record
    /// * `Err(OtpError)` - Insert failed
    async fn create(&self, record: OtpRecord) -> OtpResult<OtpRecord>;

    /// Delete every record for the record's identifier, then insert
    ///
    /// This is the suppression operation behind single-OTP mode. The delete
    /// and the insert happen atomically with respect to concurrent calls
    /// for the same identifier, so two live records can never survive.
    async fn replace_for_identifier(&self, record: OtpRecord) -> OtpResult<OtpRecord>;

    /// Find all records matching identifier and token, in insertion order
    ///
    /// # Example
    /// ```no_run
    /// # use otp_core::repositories::OtpRepository;
    /// # async fn example(repo: &impl OtpRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// for record in repo.find_matching("u1", "1234").await? {
    ///     println!("issued at {}", record.created_at);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_matching(&self, identifier: &str, token: &str) -> OtpResult<Vec<OtpRecord>>;

    /// Find all records for an identifier, in insertion order
    async fn find_by_identifier(&self, identifier: &str) -> OtpResult<Vec<OtpRecord>>;

    /// Flip a record's `valid` flag to false
    ///
    /// # Returns
    /// * `Ok(true)` - This call performed the true-to-false transition
    /// * `Ok(false)` - Record missing or already consumed
    /// * `Err(OtpError)` - Update failed
    async fn mark_consumed(&self, id: Uuid) -> OtpResult<bool>;

    /// Delete every record for an identifier
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted
    async fn delete_for_identifier(&self, identifier: &str) -> OtpResult<usize>;

    /// Count records currently stored for an identifier
    async fn count_for_identifier(&self, identifier: &str) -> OtpResult<usize> {
        let records = self.find_by_identifier(identifier).await?;
        Ok(records.len())
    }
}
