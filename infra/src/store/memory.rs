//! In-memory record store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use otp_core::domain::entities::otp_record::OtpRecord;
use otp_core::errors::OtpResult;
use otp_core::repositories::OtpRepository;

/// In-memory record store keeping records in insertion order
///
/// A single write lock guards every mutation, so the delete-then-insert of
/// `replace_for_identifier` and the read-modify-write of `mark_consumed`
/// are critical sections: concurrent generate calls cannot leave two live
/// records for a suppressed identifier, and at most one concurrent
/// validation observes a record's flip to consumed.
#[derive(Default)]
pub struct InMemoryOtpStore {
    records: RwLock<Vec<OtpRecord>>,
}

impl InMemoryOtpStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Number of records currently held, across all identifiers
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl OtpRepository for InMemoryOtpStore {
    async fn create(&self, record: OtpRecord) -> OtpResult<OtpRecord> {
        let mut records = self.records.write().await;
        records.push(record.clone());

        tracing::debug!(
            identifier = %record.identifier,
            event = "record_created",
            "Stored passcode record"
        );
        Ok(record)
    }

    async fn replace_for_identifier(&self, record: OtpRecord) -> OtpResult<OtpRecord> {
        // One write guard spans the delete and the insert
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.identifier != record.identifier);
        let removed = before - records.len();
        records.push(record.clone());

        tracing::debug!(
            identifier = %record.identifier,
            removed = removed,
            event = "records_replaced",
            "Replaced passcode records for identifier"
        );
        Ok(record)
    }

    async fn find_matching(&self, identifier: &str, token: &str) -> OtpResult<Vec<OtpRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.identifier == identifier && r.token == token)
            .cloned()
            .collect())
    }

    async fn find_by_identifier(&self, identifier: &str) -> OtpResult<Vec<OtpRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.identifier == identifier)
            .cloned()
            .collect())
    }

    async fn mark_consumed(&self, id: Uuid) -> OtpResult<bool> {
        let mut records = self.records.write().await;

        match records.iter_mut().find(|r| r.id == id) {
            Some(record) if record.valid => {
                record.consume();
                tracing::debug!(
                    identifier = %record.identifier,
                    event = "record_consumed",
                    "Marked passcode record consumed"
                );
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_for_identifier(&self, identifier: &str) -> OtpResult<usize> {
        let mut records = self.records.write().await;
        let initial_count = records.len();

        records.retain(|r| r.identifier != identifier);

        Ok(initial_count - records.len())
    }
}
