//! User Components
//!
//! A user holds its friendships, group memberships and message log. Relations
//! are stored as ids into the network's arenas, never as references, so
//! users and groups can point at each other without ownership cycles.

use serde::{Deserialize, Serialize};
use social_events::Message;
use std::collections::BTreeSet;
use std::fmt;

use super::group::GroupId;

/// Index of a user in the network's user arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub usize);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user#{}", self.0)
    }
}

/// A named actor in the network
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    username: String,
    friends: BTreeSet<UserId>,
    groups: BTreeSet<GroupId>,
    /// Sent and received messages, append-only
    messages: Vec<Message>,
}

impl User {
    pub(crate) fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            friends: BTreeSet::new(),
            groups: BTreeSet::new(),
            messages: Vec::new(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Friend ids in registration order
    pub fn friends(&self) -> impl ExactSizeIterator<Item = UserId> + '_ {
        self.friends.iter().copied()
    }

    /// Group ids in creation order
    pub fn groups(&self) -> impl ExactSizeIterator<Item = GroupId> + '_ {
        self.groups.iter().copied()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_friend(&self, other: UserId) -> bool {
        self.friends.contains(&other)
    }

    pub fn is_member_of(&self, group: GroupId) -> bool {
        self.groups.contains(&group)
    }

    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Records one side of a friendship. Returns false for self or an existing friend.
    pub(crate) fn insert_friend(&mut self, other: UserId) -> bool {
        if other == self.id {
            return false;
        }
        self.friends.insert(other)
    }

    /// Records one side of a membership. Returns false if already a member.
    pub(crate) fn insert_group(&mut self, group: GroupId) -> bool {
        self.groups.insert(group)
    }

    pub(crate) fn record_message(&mut self, message: Message) {
        self.messages.push(message);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User({})", self.username)
    }
}
