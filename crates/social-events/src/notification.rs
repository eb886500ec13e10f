//! Notification Types
//!
//! Every state-changing operation on the network reports what happened as a
//! list of notifications. The `Display` impl is the human-readable line
//! printed to the console.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::message::Message;

/// Notification categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    UserAdded,
    GroupCreated,
    FriendshipFormed,
    MessageSent,
    GroupJoined,
    GroupMessageSent,
    GroupMessageRejected,
}

impl NotificationKind {
    /// Returns all notification kinds.
    pub fn all() -> &'static [NotificationKind] {
        &[
            NotificationKind::UserAdded,
            NotificationKind::GroupCreated,
            NotificationKind::FriendshipFormed,
            NotificationKind::MessageSent,
            NotificationKind::GroupJoined,
            NotificationKind::GroupMessageSent,
            NotificationKind::GroupMessageRejected,
        ]
    }

    /// Stable snake_case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::UserAdded => "user_added",
            NotificationKind::GroupCreated => "group_created",
            NotificationKind::FriendshipFormed => "friendship_formed",
            NotificationKind::MessageSent => "message_sent",
            NotificationKind::GroupJoined => "group_joined",
            NotificationKind::GroupMessageSent => "group_message_sent",
            NotificationKind::GroupMessageRejected => "group_message_rejected",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single state change in the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    UserAdded {
        username: String,
    },
    GroupCreated {
        group: String,
    },
    FriendshipFormed {
        user: String,
        friend: String,
    },
    MessageSent {
        message: Message,
    },
    GroupJoined {
        user: String,
        group: String,
    },
    /// Broadcast accepted; `delivered` individual messages were sent
    GroupMessageSent {
        sender: String,
        group: String,
        content: String,
        delivered: usize,
    },
    /// Sender was not a member, nothing was delivered
    GroupMessageRejected {
        sender: String,
        group: String,
    },
}

impl Notification {
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::UserAdded { .. } => NotificationKind::UserAdded,
            Notification::GroupCreated { .. } => NotificationKind::GroupCreated,
            Notification::FriendshipFormed { .. } => NotificationKind::FriendshipFormed,
            Notification::MessageSent { .. } => NotificationKind::MessageSent,
            Notification::GroupJoined { .. } => NotificationKind::GroupJoined,
            Notification::GroupMessageSent { .. } => NotificationKind::GroupMessageSent,
            Notification::GroupMessageRejected { .. } => NotificationKind::GroupMessageRejected,
        }
    }

    /// The message carried by a `MessageSent` notification.
    pub fn message(&self) -> Option<&Message> {
        match self {
            Notification::MessageSent { message } => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::UserAdded { username } => {
                write!(f, "User '{}' added to the network.", username)
            }
            Notification::GroupCreated { group } => write!(f, "Group '{}' created.", group),
            Notification::FriendshipFormed { user, friend } => {
                write!(f, "{} and {} are now friends!", user, friend)
            }
            Notification::MessageSent { message } => write!(
                f,
                "{} sent a message to {}: {}",
                message.sender, message.recipient, message.content
            ),
            Notification::GroupJoined { user, group } => {
                write!(f, "{} joined the group '{}'", user, group)
            }
            Notification::GroupMessageSent {
                sender,
                group,
                content,
                ..
            } => write!(f, "{} sent a message to group '{}': {}", sender, group, content),
            Notification::GroupMessageRejected { sender, group } => {
                write!(f, "{} is not a member of '{}' group!", sender, group)
            }
        }
    }
}

/// A notification stamped with a sequential event ID, one line of the JSONL log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub event_id: String,
    #[serde(flatten)]
    pub notification: Notification,
}

impl NotificationRecord {
    pub fn new(event_id: impl Into<String>, notification: Notification) -> Self {
        Self {
            event_id: event_id.into(),
            notification,
        }
    }

    /// Serializes to a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a record from a single JSONL line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}
