//! Social Network Registry
//!
//! Owns every user and group. Entities live in arenas indexed by
//! [`UserId`]/[`GroupId`] with a name index on the side; nothing is ever
//! removed, so ids stay valid for the lifetime of the network.
//!
//! Operations never fail. A precondition that does not hold (unknown name,
//! self-friendship, duplicate registration) makes the call a no-op, which
//! shows up as an empty notification list.

use social_events::{Message, MessageId, Notification};
use std::collections::HashMap;

use crate::components::{Group, GroupId, User, UserId};

/// Registry of users and groups
#[derive(Debug, Default)]
pub struct SocialNetwork {
    users: Vec<User>,
    user_index: HashMap<String, UserId>,
    groups: Vec<Group>,
    group_index: HashMap<String, GroupId>,
    /// Sequence for the next message id
    next_message_seq: u64,
}

impl SocialNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user if the name is free.
    pub fn add_user(&mut self, username: impl Into<String>) -> Vec<Notification> {
        let username = username.into();
        if self.user_index.contains_key(&username) {
            tracing::trace!(%username, "user already registered");
            return Vec::new();
        }

        let id = UserId(self.users.len());
        self.users.push(User::new(id, username.clone()));
        self.user_index.insert(username.clone(), id);
        tracing::debug!(%username, %id, "registered user");

        vec![Notification::UserAdded { username }]
    }

    /// Registers a group if the name is free.
    pub fn add_group(&mut self, group_name: impl Into<String>) -> Vec<Notification> {
        let group_name = group_name.into();
        if self.group_index.contains_key(&group_name) {
            tracing::trace!(group = %group_name, "group already registered");
            return Vec::new();
        }

        let id = GroupId(self.groups.len());
        self.groups.push(Group::new(id, group_name.clone()));
        self.group_index.insert(group_name.clone(), id);
        tracing::debug!(group = %group_name, %id, "registered group");

        vec![Notification::GroupCreated { group: group_name }]
    }

    /// Get a user by username
    pub fn get_user(&self, username: &str) -> Option<&User> {
        self.user_id(username).map(|id| &self.users[id.0])
    }

    /// Get a group by name
    pub fn get_group(&self, group_name: &str) -> Option<&Group> {
        self.group_id(group_name).map(|id| &self.groups[id.0])
    }

    pub fn user_id(&self, username: &str) -> Option<UserId> {
        self.user_index.get(username).copied()
    }

    pub fn group_id(&self, group_name: &str) -> Option<GroupId> {
        self.group_index.get(group_name).copied()
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(id.0)
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id.0)
    }

    /// All users in registration order
    pub fn users(&self) -> impl ExactSizeIterator<Item = &User> {
        self.users.iter()
    }

    /// All groups in creation order
    pub fn groups(&self) -> impl ExactSizeIterator<Item = &Group> {
        self.groups.iter()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Makes two registered users friends. Does nothing if either is unknown.
    pub fn connect_users(&mut self, username1: &str, username2: &str) -> Vec<Notification> {
        match (self.user_id(username1), self.user_id(username2)) {
            (Some(a), Some(b)) => self.befriend(a, b).into_iter().collect(),
            _ => {
                tracing::trace!(username1, username2, "connect skipped: unknown user");
                Vec::new()
            }
        }
    }

    /// `user` befriends `other`. No-op for self, an existing friend, or an unknown name.
    pub fn add_friend(&mut self, user: &str, other: &str) -> Vec<Notification> {
        self.connect_users(user, other)
    }

    /// Sends a direct message; it lands in both the sender's and the recipient's log.
    pub fn send_message(
        &mut self,
        sender: &str,
        recipient: &str,
        content: impl Into<String>,
    ) -> Vec<Notification> {
        match (self.user_id(sender), self.user_id(recipient)) {
            (Some(from), Some(to)) => vec![self.deliver(from, to, content.into())],
            _ => {
                tracing::trace!(sender, recipient, "message skipped: unknown user");
                Vec::new()
            }
        }
    }

    /// Adds `user` to `group` on both sides. A repeat join changes nothing but
    /// is still announced.
    pub fn join_group(&mut self, user: &str, group: &str) -> Vec<Notification> {
        match (self.user_id(user), self.group_id(group)) {
            (Some(u), Some(g)) => vec![self.enroll(u, g)],
            _ => {
                tracing::trace!(user, group, "join skipped: unknown user or group");
                Vec::new()
            }
        }
    }

    /// Broadcasts `content` from `sender` to every other member of `group`.
    ///
    /// A non-member gets a rejection notification and nothing is delivered.
    pub fn send_group_message(
        &mut self,
        sender: &str,
        group: &str,
        content: impl Into<String>,
    ) -> Vec<Notification> {
        match (self.user_id(sender), self.group_id(group)) {
            (Some(u), Some(g)) => self.broadcast(u, g, content.into()),
            _ => {
                tracing::trace!(sender, group, "broadcast skipped: unknown user or group");
                Vec::new()
            }
        }
    }

    /// Number of distinct friendships (each pair counted once)
    pub fn friendship_count(&self) -> usize {
        let directed: usize = self.users.iter().map(User::friend_count).sum();
        directed / 2
    }

    /// Number of user/group memberships
    pub fn membership_count(&self) -> usize {
        self.groups.iter().map(Group::member_count).sum()
    }

    /// Usernames of a user's friends, in registration order.
    pub fn friend_names(&self, user: &User) -> Vec<&str> {
        user.friends()
            .filter_map(|id| self.user(id))
            .map(User::username)
            .collect()
    }

    /// Names of a user's groups, in creation order.
    pub fn group_names(&self, user: &User) -> Vec<&str> {
        user.groups()
            .filter_map(|id| self.group(id))
            .map(Group::name)
            .collect()
    }

    /// Usernames of a group's members, in registration order.
    pub fn member_names(&self, group: &Group) -> Vec<&str> {
        group
            .members()
            .filter_map(|id| self.user(id))
            .map(User::username)
            .collect()
    }

    pub(crate) fn befriend(&mut self, a: UserId, b: UserId) -> Option<Notification> {
        if a == b || self.users[a.0].is_friend(b) {
            return None;
        }

        self.users[a.0].insert_friend(b);
        self.users[b.0].insert_friend(a);

        let user = self.users[a.0].username().to_string();
        let friend = self.users[b.0].username().to_string();
        tracing::debug!(%user, %friend, "friendship formed");

        Some(Notification::FriendshipFormed { user, friend })
    }

    pub(crate) fn deliver(&mut self, from: UserId, to: UserId, content: String) -> Notification {
        self.next_message_seq += 1;
        let message = Message::new(
            MessageId::from_sequence(self.next_message_seq),
            self.users[from.0].username(),
            self.users[to.0].username(),
            content,
        );

        self.users[from.0].record_message(message.clone());
        self.users[to.0].record_message(message.clone());
        tracing::trace!(
            id = %message.id,
            sender = %message.sender,
            recipient = %message.recipient,
            "message delivered"
        );

        Notification::MessageSent { message }
    }

    /// Membership is idempotent, but every join is announced.
    pub(crate) fn enroll(&mut self, user: UserId, group: GroupId) -> Notification {
        let joined_user = self.users[user.0].insert_group(group);
        let joined_group = self.groups[group.0].add_member(user);
        if !joined_user && !joined_group {
            tracing::trace!(%user, %group, "already a member");
        }

        Notification::GroupJoined {
            user: self.users[user.0].username().to_string(),
            group: self.groups[group.0].name().to_string(),
        }
    }

    pub(crate) fn broadcast(
        &mut self,
        sender: UserId,
        group: GroupId,
        content: String,
    ) -> Vec<Notification> {
        let sender_name = self.users[sender.0].username().to_string();
        let group_name = self.groups[group.0].name().to_string();

        if !self.groups[group.0].has_member(sender) {
            tracing::debug!(
                sender = %sender_name,
                group = %group_name,
                "broadcast rejected: not a member"
            );
            return vec![Notification::GroupMessageRejected {
                sender: sender_name,
                group: group_name,
            }];
        }

        let recipients: Vec<UserId> = self.groups[group.0]
            .members()
            .filter(|&member| member != sender)
            .collect();

        let body = format!("(Group: {}) {}", group_name, content);
        let mut notifications: Vec<Notification> = recipients
            .iter()
            .map(|&member| self.deliver(sender, member, body.clone()))
            .collect();

        notifications.push(Notification::GroupMessageSent {
            sender: sender_name,
            group: group_name,
            content,
            delivered: recipients.len(),
        });
        notifications
    }
}
