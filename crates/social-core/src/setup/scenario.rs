//! Scenario Setup
//!
//! Registers users, connects friends, creates groups and enrolls members,
//! in that order, collecting every notification along the way.

use serde::Serialize;
use social_events::Notification;

use crate::config::ScenarioConfig;
use crate::network::SocialNetwork;

/// Create a network from a scenario
pub fn build_network(scenario: &ScenarioConfig) -> (SocialNetwork, Vec<Notification>) {
    let mut network = SocialNetwork::new();
    let mut notifications = Vec::new();

    for username in &scenario.users {
        notifications.extend(network.add_user(username.as_str()));
    }

    for (a, b) in &scenario.friendships {
        notifications.extend(network.connect_users(a, b));
    }

    for group in &scenario.groups {
        notifications.extend(network.add_group(group.as_str()));
    }

    for membership in &scenario.memberships {
        notifications.extend(network.join_group(&membership.user, &membership.group));
    }

    tracing::info!(
        users = network.user_count(),
        groups = network.group_count(),
        friendships = network.friendship_count(),
        "network built"
    );

    (network, notifications)
}

/// Counts of what a built network contains
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioSummary {
    pub users: usize,
    pub groups: usize,
    pub friendships: usize,
    pub memberships: usize,
}

/// Summarize a network right after setup
pub fn scenario_summary(network: &SocialNetwork) -> ScenarioSummary {
    ScenarioSummary {
        users: network.user_count(),
        groups: network.group_count(),
        friendships: network.friendship_count(),
        memberships: network.membership_count(),
    }
}
