//! Message Types
//!
//! A message is an immutable record of one communication between two users.
//! The same value is appended to both the sender's and the recipient's log.
//!
//! # Example
//!
//! ```
//! use social_events::{Message, MessageId};
//!
//! let msg = Message::new(MessageId::from_sequence(1), "Alice", "Bob", "Hello, Bob!");
//! assert_eq!(msg.id.as_str(), "msg_00000001");
//! assert!(msg.to_string().ends_with("Alice -> Bob: Hello, Bob!"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display format for message timestamps in the log dump.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Unique identifier for a message within one network.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl MessageId {
    /// Builds the identifier for the given sequence number.
    pub fn from_sequence(sequence: u64) -> Self {
        MessageId(format!("msg_{:08}", sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One communication event from `sender` to `recipient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Username of the sender
    pub sender: String,
    /// Username of the recipient
    pub recipient: String,
    pub content: String,
    /// Wall-clock creation time
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a message stamped with the current time.
    pub fn new(
        id: MessageId,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(id, sender, recipient, content, Utc::now())
    }

    /// Creates a message with an explicit timestamp.
    pub fn with_timestamp(
        id: MessageId,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            sender: sender.into(),
            recipient: recipient.into(),
            content: content.into(),
            timestamp,
        }
    }

    /// True if `username` sent or received this message.
    pub fn involves(&self, username: &str) -> bool {
        self.sender == username || self.recipient == username
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} -> {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.sender,
            self.recipient,
            self.content
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_message_id_sequence() {
        assert_eq!(MessageId::from_sequence(1).as_str(), "msg_00000001");
        assert_eq!(MessageId::from_sequence(42).to_string(), "msg_00000042");
    }

    #[test]
    fn test_message_display() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        let msg = Message::with_timestamp(
            MessageId::from_sequence(7),
            "Alice",
            "Bob",
            "Hello, Bob!",
            ts,
        );
        assert_eq!(
            msg.to_string(),
            "[2024-03-01 12:30:05.000000] Alice -> Bob: Hello, Bob!"
        );
    }

    #[test]
    fn test_message_involves() {
        let msg = Message::new(MessageId::from_sequence(1), "Alice", "Bob", "hi");
        assert!(msg.involves("Alice"));
        assert!(msg.involves("Bob"));
        assert!(!msg.involves("Charlie"));
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new(MessageId::from_sequence(3), "Dana", "Eve", "Hello, Eve!");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"sender\":\"Dana\""));

        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }
}
