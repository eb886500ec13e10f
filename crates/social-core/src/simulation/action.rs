//! Activity Actions
//!
//! The three kinds of random activity and the uniform pickers they use.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of simulated action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Greet a random friend
    Message,
    /// Befriend a random user
    Friend,
    /// Greet one of the actor's groups
    GroupMessage,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [
        ActionKind::Message,
        ActionKind::Friend,
        ActionKind::GroupMessage,
    ];

    /// Picks an action kind uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Message => write!(f, "message"),
            ActionKind::Friend => write!(f, "friend"),
            ActionKind::GroupMessage => write!(f, "group_message"),
        }
    }
}

/// Greeting sent to a friend by the message action
pub fn direct_greeting(recipient: &str) -> String {
    format!("Hello, {}!", recipient)
}

/// Greeting broadcast by the group_message action
pub fn group_greeting(group: &str) -> String {
    format!("Hi everyone in {}!", group)
}

/// Picks one item uniformly from an exact-size iterator. `None` when empty.
pub fn pick_uniform<R, I>(rng: &mut R, items: I) -> Option<I::Item>
where
    R: Rng + ?Sized,
    I: ExactSizeIterator,
{
    let mut items = items;
    let len = items.len();
    if len == 0 {
        return None;
    }
    items.nth(rng.gen_range(0..len))
}
