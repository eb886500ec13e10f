//! Group Components

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::user::UserId;

/// Index of a group in the network's group arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(pub usize);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group#{}", self.0)
    }
}

/// A named collection of users
#[derive(Debug, Clone)]
pub struct Group {
    id: GroupId,
    name: String,
    members: BTreeSet<UserId>,
}

impl Group {
    pub(crate) fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member ids in registration order
    pub fn members(&self) -> impl ExactSizeIterator<Item = UserId> + '_ {
        self.members.iter().copied()
    }

    pub fn has_member(&self, user: UserId) -> bool {
        self.members.contains(&user)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Adds a member if absent. Only the network calls this, alongside the
    /// user-side half, so membership stays mutual.
    pub(crate) fn add_member(&mut self, user: UserId) -> bool {
        self.members.insert(user)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_member_idempotent() {
        let mut group = Group::new(GroupId(0), "Developers");
        assert!(group.add_member(UserId(2)));
        assert!(!group.add_member(UserId(2)));
        assert_eq!(group.member_count(), 1);
        assert!(group.has_member(UserId(2)));
        assert!(!group.has_member(UserId(3)));
    }

    #[test]
    fn test_display() {
        let group = Group::new(GroupId(1), "Designers");
        assert_eq!(group.to_string(), "Group(Designers)");
        assert_eq!(group.name(), "Designers");
    }
}
