//! Snapshot Output
//!
//! Captures the final network as a [`NetworkSnapshot`] and writes it as JSON.

use social_events::{GroupSnapshot, NetworkSnapshot, UserSnapshot};
use std::fs;
use std::path::Path;

use super::stats::{compute_stats, StatsCollector};
use super::OutputError;
use crate::network::SocialNetwork;

/// Build a snapshot of the whole network
pub fn generate_snapshot(
    network: &SocialNetwork,
    seed: Option<u64>,
    collector: &StatsCollector,
) -> NetworkSnapshot {
    let mut snapshot = NetworkSnapshot::new(seed);

    snapshot.users = network
        .users()
        .map(|user| UserSnapshot {
            username: user.username().to_string(),
            friends: network.friend_names(user).into_iter().map(String::from).collect(),
            groups: network.group_names(user).into_iter().map(String::from).collect(),
            messages: user.messages().to_vec(),
        })
        .collect();

    snapshot.groups = network
        .groups()
        .map(|group| GroupSnapshot {
            name: group.name().to_string(),
            members: network.member_names(group).into_iter().map(String::from).collect(),
        })
        .collect();

    snapshot.stats = compute_stats(network, collector);
    snapshot
}

/// Write a snapshot as pretty JSON, creating parent directories as needed
pub fn write_snapshot(path: &Path, snapshot: &NetworkSnapshot) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = snapshot.to_json_pretty()?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "wrote snapshot");
    Ok(())
}
