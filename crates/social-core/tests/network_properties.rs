//! Network invariant tests
//!
//! Drive the network through setup and long random runs, then check that
//! friendship, membership and message-log invariants still hold.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use social_core::config::ScenarioConfig;
use social_core::setup::build_network;
use social_core::{Notification, NotificationKind, SocialNetwork};
use social_events::fixtures;

fn assert_invariants(network: &SocialNetwork) {
    for user in network.users() {
        // No self-friendship
        assert!(!user.is_friend(user.id()), "{} befriended itself", user.username());

        // Symmetric friendship
        for friend_id in user.friends() {
            let friend = network.user(friend_id).unwrap();
            assert!(
                friend.is_friend(user.id()),
                "{} -> {} is not symmetric",
                user.username(),
                friend.username()
            );
        }

        // Mutual membership, user side
        for group_id in user.groups() {
            assert!(network.group(group_id).unwrap().has_member(user.id()));
        }

        // Every logged message involves the owner
        for message in user.messages() {
            assert!(message.involves(user.username()));
        }
    }

    // Mutual membership, group side
    for group in network.groups() {
        for member in group.members() {
            assert!(network.user(member).unwrap().is_member_of(group.id()));
        }
    }
}

#[test]
fn test_invariants_survive_random_activity() {
    for seed in 0..20u64 {
        let (mut network, _) = build_network(&ScenarioConfig::demo());
        network.simulate_activity(200, &mut SmallRng::seed_from_u64(seed));
        assert_invariants(&network);
    }
}

#[test]
fn test_invariants_survive_random_direct_calls() {
    let names = ["Ann", "Ben", "Cat", "Dov", "Eli", "Fay"];
    let groups = ["red", "green", "blue"];
    let mut network = SocialNetwork::new();
    let mut rng = SmallRng::seed_from_u64(2024);

    for _ in 0..500 {
        let a = names[rng.gen_range(0..names.len())];
        let b = names[rng.gen_range(0..names.len())];
        let g = groups[rng.gen_range(0..groups.len())];
        match rng.gen_range(0..6) {
            0 => {
                network.add_user(a);
            }
            1 => {
                network.add_group(g);
            }
            2 => {
                network.add_friend(a, b);
            }
            3 => {
                network.join_group(a, g);
            }
            4 => {
                network.send_message(a, b, "ping");
            }
            _ => {
                network.send_group_message(a, g, "hello");
            }
        }
    }

    assert_invariants(&network);
    assert!(network.user_count() <= names.len());
    assert!(network.group_count() <= groups.len());
}

#[test]
fn test_every_message_appears_once_per_log() {
    let (mut network, _) = build_network(&ScenarioConfig::demo());
    let notes = network.simulate_activity(150, &mut SmallRng::seed_from_u64(31));

    for message in notes.iter().filter_map(Notification::message) {
        let sender = network.get_user(&message.sender).unwrap();
        let recipient = network.get_user(&message.recipient).unwrap();

        let in_sender = sender.messages().iter().filter(|m| *m == message).count();
        let in_recipient = recipient.messages().iter().filter(|m| *m == message).count();
        assert_eq!(in_sender, 1);
        assert_eq!(in_recipient, 1);
    }
}

#[test]
fn test_logs_are_in_append_order() {
    let (mut network, _) = build_network(&ScenarioConfig::demo());
    network.simulate_activity(120, &mut SmallRng::seed_from_u64(8));

    // Message ids are handed out sequentially, so each log must be sorted by id
    for user in network.users() {
        let ids: Vec<_> = user.messages().iter().map(|m| m.id.clone()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted, "log of {} is out of order", user.username());
    }
}

#[test]
fn test_broadcast_counts_match_membership() {
    let (mut network, _) = build_network(&ScenarioConfig::demo());
    network.join_group("Eve", "Developers");

    let dev = network.get_group("Developers").unwrap();
    let others = dev.member_count() - 1;

    let notes = network.send_group_message("Eve", "Developers", "hello all");
    let delivered = notes
        .iter()
        .filter(|n| n.kind() == NotificationKind::MessageSent)
        .count();
    assert_eq!(delivered, others);
    assert!(notes
        .iter()
        .filter_map(Notification::message)
        .all(|m| m.recipient != "Eve"));
}

#[test]
fn test_replaying_fixture_notifications() {
    // Rebuild a network from the recorded fixture stream
    let mut network = SocialNetwork::new();
    for record in fixtures::sample_notifications() {
        match record.notification {
            Notification::UserAdded { username } => {
                network.add_user(username);
            }
            Notification::GroupCreated { group } => {
                network.add_group(group);
            }
            Notification::FriendshipFormed { user, friend } => {
                network.add_friend(&user, &friend);
            }
            Notification::GroupJoined { user, group } => {
                network.join_group(&user, &group);
            }
            _ => {}
        }
    }

    assert_eq!(network.user_count(), 3);
    assert_eq!(network.friendship_count(), 1);
    assert_eq!(network.membership_count(), 2);

    let rejected = network.send_group_message("Charlie", "Developers", "hi");
    assert_eq!(rejected[0].kind(), NotificationKind::GroupMessageRejected);
    assert_invariants(&network);
}
