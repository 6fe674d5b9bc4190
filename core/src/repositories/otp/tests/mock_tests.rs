//! Unit tests for the mock record store

use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::otp_record::OtpRecord;
use crate::repositories::otp::mock::MockOtpRepository;
use crate::repositories::otp::r#trait::OtpRepository;

fn record(identifier: &str, token: &str) -> OtpRecord {
    let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    OtpRecord::new(identifier.to_string(), token.to_string(), 10, issued_at)
}

#[tokio::test]
async fn test_create_keeps_insertion_order() {
    let repo = MockOtpRepository::new();

    let first = repo.create(record("u1", "1111")).await.unwrap();
    let second = repo.create(record("u1", "1111")).await.unwrap();

    let matches = repo.find_matching("u1", "1111").await.unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].id, first.id);
    assert_eq!(matches[1].id, second.id);
}

#[tokio::test]
async fn test_replace_leaves_exactly_one_record() {
    let repo = MockOtpRepository::new();

    repo.create(record("u1", "1111")).await.unwrap();
    repo.create(record("u1", "2222")).await.unwrap();
    let replacement = repo.replace_for_identifier(record("u1", "3333")).await.unwrap();

    let remaining = repo.find_by_identifier("u1").await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, replacement.id);
    assert_eq!(remaining[0].token, "3333");
}

#[tokio::test]
async fn test_replace_does_not_touch_other_identifiers() {
    let repo = MockOtpRepository::new();

    repo.create(record("u1", "1111")).await.unwrap();
    repo.create(record("u2", "2222")).await.unwrap();
    repo.replace_for_identifier(record("u1", "3333")).await.unwrap();

    assert_eq!(repo.count_for_identifier("u1").await.unwrap(), 1);
    assert_eq!(repo.count_for_identifier("u2").await.unwrap(), 1);
    assert_eq!(
        repo.find_by_identifier("u2").await.unwrap()[0].token,
        "2222"
    );
}

#[tokio::test]
async fn test_find_matching_filters_on_both_fields() {
    let repo = MockOtpRepository::new();

    repo.create(record("u1", "1111")).await.unwrap();
    repo.create(record("u1", "2222")).await.unwrap();
    repo.create(record("u2", "1111")).await.unwrap();

    let matches = repo.find_matching("u1", "1111").await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].identifier, "u1");
    assert_eq!(matches[0].token, "1111");

    assert!(repo.find_matching("u3", "1111").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_mark_consumed_reports_the_transition_once() {
    let repo = MockOtpRepository::new();
    let stored = repo.create(record("u1", "1111")).await.unwrap();

    assert!(repo.mark_consumed(stored.id).await.unwrap());
    // Second call finds the flag already false
    assert!(!repo.mark_consumed(stored.id).await.unwrap());

    let matches = repo.find_matching("u1", "1111").await.unwrap();
    assert!(!matches[0].valid);
}

#[tokio::test]
async fn test_mark_consumed_unknown_id() {
    let repo = MockOtpRepository::new();
    assert!(!repo.mark_consumed(Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn test_delete_for_identifier_counts_removals() {
    let repo = MockOtpRepository::new();

    repo.create(record("u1", "1111")).await.unwrap();
    repo.create(record("u1", "2222")).await.unwrap();
    repo.create(record("u2", "3333")).await.unwrap();

    assert_eq!(repo.delete_for_identifier("u1").await.unwrap(), 2);
    assert_eq!(repo.delete_for_identifier("u1").await.unwrap(), 0);
    assert_eq!(repo.count_for_identifier("u2").await.unwrap(), 1);
}

#[tokio::test]
async fn test_records_preserve_created_at() {
    let repo = MockOtpRepository::new();
    let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let mut early = record("u1", "1111");
    early.created_at = issued_at - Duration::minutes(5);
    repo.create(early.clone()).await.unwrap();

    let found = repo.find_matching("u1", "1111").await.unwrap();
    assert_eq!(found[0].created_at, early.created_at);
}
