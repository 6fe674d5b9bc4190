//! Mock implementation of OtpRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::otp_record::OtpRecord;
use crate::errors::OtpResult;

use super::r#trait::OtpRepository;

/// Mock record store for testing
///
/// Keeps records in a Vec so insertion order is the natural order.
pub struct MockOtpRepository {
    records: Arc<RwLock<Vec<OtpRecord>>>,
}

impl MockOtpRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for MockOtpRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn create(&self, record: OtpRecord) -> OtpResult<OtpRecord> {
        let mut records = self.records.write().await;
        records.push(record.clone());
        Ok(record)
    }

    async fn replace_for_identifier(&self, record: OtpRecord) -> OtpResult<OtpRecord> {
        // Delete and insert under one write guard
        let mut records = self.records.write().await;
        records.retain(|r| r.identifier != record.identifier);
        records.push(record.clone());
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
