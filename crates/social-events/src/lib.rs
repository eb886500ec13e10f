//! Shared message and notification types for the social network simulator.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for the core crate and anything that reads its output.

pub mod message;
pub mod notification;
pub mod snapshot;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

// Re-export message types
pub use message::{Message, MessageId, TIMESTAMP_FORMAT};

// Re-export notification types
pub use notification::{Notification, NotificationKind, NotificationRecord};

// Re-export snapshot types
pub use snapshot::{GroupSnapshot, NetworkSnapshot, StatsSnapshot, UserSnapshot};
