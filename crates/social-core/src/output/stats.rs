//! Statistics Output
//!
//! Counts notifications as they are produced and summarizes the network.

use social_events::{MessageId, Notification, NotificationKind, StatsSnapshot};
use std::collections::{BTreeMap, BTreeSet};

use crate::network::SocialNetwork;

/// Accumulates notification counts during a run
#[derive(Debug, Default, Clone)]
pub struct StatsCollector {
    pub total: usize,
    pub by_kind: BTreeMap<NotificationKind, usize>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a batch of notifications
    pub fn record(&mut self, notifications: &[Notification]) {
        for notification in notifications {
            self.total += 1;
            *self.by_kind.entry(notification.kind()).or_insert(0) += 1;
        }
    }

    pub fn count(&self, kind: NotificationKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}

/// Build summary counts for the network and the notifications seen so far
pub fn compute_stats(network: &SocialNetwork, collector: &StatsCollector) -> StatsSnapshot {
    let distinct: BTreeSet<&MessageId> = network
        .users()
        .flat_map(|u| u.messages().iter().map(|m| &m.id))
        .collect();

    StatsSnapshot {
        user_count: network.user_count(),
        group_count: network.group_count(),
        friendship_count: network.friendship_count(),
        membership_count: network.membership_count(),
        message_count: distinct.len(),
        notifications_by_kind: collector
            .by_kind
            .iter()
            .map(|(kind, count)| (kind.as_str().to_string(), *count))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_counts_by_kind() {
        let mut network = SocialNetwork::new();
        let mut collector = StatsCollector::new();

        collector.record(&network.add_user("Alice"));
        collector.record(&network.add_user("Bob"));
        collector.record(&network.connect_users("Alice", "Bob"));

        assert_eq!(collector.total, 3);
        assert_eq!(collector.count(NotificationKind::UserAdded), 2);
        assert_eq!(collector.count(NotificationKind::FriendshipFormed), 1);
        assert_eq!(collector.count(NotificationKind::MessageSent), 0);
    }

    #[test]
    fn test_message_count_is_distinct() {
        let mut network = SocialNetwork::new();
        network.add_user("Alice");
        network.add_user("Bob");
        network.send_message("Alice", "Bob", "one");
        network.send_message("Bob", "Alice", "two");

        let stats = compute_stats(&network, &StatsCollector::new());
        // Four log entries, two messages
        assert_eq!(stats.message_count, 2);
        assert_eq!(stats.user_count, 2);
        assert_eq!(stats.friendship_count, 0);
    }

    #[test]
    fn test_notification_kinds_use_snake_case_keys() {
        let mut network = SocialNetwork::new();
        let mut collector = StatsCollector::new();
        collector.record(&network.add_group("Dev"));

        let stats = compute_stats(&network, &collector);
        assert_eq!(stats.notifications_by_kind.get("group_created"), Some(&1));
    }
}
