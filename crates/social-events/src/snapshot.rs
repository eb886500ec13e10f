//! Snapshot Types
//!
//! Serialization structs for the final state of a network.
//!
//! A snapshot captures users, groups and summary counts so a run can be
//! inspected after the console report is gone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::message::Message;

/// User snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub username: String,
    #[serde(default)]
    pub friends: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
    /// Sent and received messages, in log order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
}

impl UserSnapshot {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            friends: Vec::new(),
            groups: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.messages.iter().filter(|m| m.sender == self.username).count()
    }

    pub fn received_count(&self) -> usize {
        self.messages.iter().filter(|m| m.recipient == self.username).count()
    }
}

/// Group snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl GroupSnapshot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }
}

/// Summary counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub user_count: usize,
    pub group_count: usize,
    /// Each symmetric friendship counted once
    pub friendship_count: usize,
    pub membership_count: usize,
    /// Distinct messages, not log entries
    pub message_count: usize,
    #[serde(default)]
    pub notifications_by_kind: BTreeMap<String, usize>,
}

/// Complete network snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub taken_at: DateTime<Utc>,
    /// Seed of the activity simulator, if one was fixed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub users: Vec<UserSnapshot>,
    pub groups: Vec<GroupSnapshot>,
    #[serde(default)]
    pub stats: StatsSnapshot,
}

impl NetworkSnapshot {
    /// Creates an empty snapshot stamped with the current time.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            taken_at: Utc::now(),
            seed,
            users: Vec::new(),
            groups: Vec::new(),
            stats: StatsSnapshot::default(),
        }
    }

    /// Finds a user by username.
    pub fn find_user(&self, username: &str) -> Option<&UserSnapshot> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Finds a group by name.
    pub fn find_group(&self, name: &str) -> Option<&GroupSnapshot> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Serializes the snapshot to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
