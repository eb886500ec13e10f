//! Sample data fixtures for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // social-events = { path = "../social-events", features = ["test-fixtures"] }
//!
//! use social_events::fixtures;
//!
//! let records = fixtures::sample_notifications();
//! ```

use crate::{Message, NotificationRecord};

/// Returns sample notification records from the fixtures file.
///
/// Contains 11 records covering every notification kind:
/// - 3 users added, 1 group created
/// - 1 friendship, 2 group joins
/// - 1 direct message and 1 group broadcast (with its delivered message)
/// - 1 rejected broadcast from a non-member
pub fn sample_notifications() -> Vec<NotificationRecord> {
    let jsonl = include_str!("../tests/fixtures/sample_notifications.jsonl");
    jsonl
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            NotificationRecord::from_jsonl(l).unwrap_or_else(|e| {
                panic!("Failed to parse notification line: {}\nError: {}", l, e)
            })
        })
        .collect()
}

/// Returns a specific record by event ID.
pub fn get_notification(event_id: &str) -> Option<NotificationRecord> {
    sample_notifications()
        .into_iter()
        .find(|r| r.event_id == event_id)
}

/// Returns every message carried by the sample notifications, in order.
pub fn sample_messages() -> Vec<Message> {
    sample_notifications()
        .into_iter()
        .filter_map(|r| r.notification.message().cloned())
        .collect()
}
