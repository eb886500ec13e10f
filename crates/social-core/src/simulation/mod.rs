//! Random Activity Simulation
//!
//! Each step picks an action kind and an acting user uniformly at random,
//! then tries the action:
//! 1. message: greet a random friend
//! 2. friend: befriend a random user from the whole network
//! 3. group_message: greet a random group the actor belongs to
//!
//! A step whose precondition fails (no friends, no groups, picked self)
//! does nothing and is not retried.

pub mod action;

pub use action::{direct_greeting, group_greeting, pick_uniform, ActionKind};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use social_events::Notification;

use crate::components::{User, UserId};
use crate::network::SocialNetwork;

impl SocialNetwork {
    /// Runs `num_actions` random steps drawing from `rng`.
    pub fn simulate_activity<R: Rng + ?Sized>(
        &mut self,
        num_actions: usize,
        rng: &mut R,
    ) -> Vec<Notification> {
        let mut notifications = Vec::new();

        for step in 0..num_actions {
            let kind = ActionKind::random(rng);
            let Some(actor) = pick_uniform(rng, self.users().map(User::id)) else {
                tracing::debug!(step, "no users registered, skipping step");
                continue;
            };

            let produced = self.perform(kind, actor, rng);
            tracing::trace!(
                step,
                action = %kind,
                %actor,
                notifications = produced.len(),
                "step done"
            );
            notifications.extend(produced);
        }

        notifications
    }

    fn perform<R: Rng + ?Sized>(
        &mut self,
        kind: ActionKind,
        actor: UserId,
        rng: &mut R,
    ) -> Vec<Notification> {
        let Some(user) = self.user(actor) else {
            return Vec::new();
        };

        match kind {
            ActionKind::Message => {
                let Some(friend) = pick_uniform(rng, user.friends()) else {
                    return Vec::new();
                };
                let content = match self.user(friend) {
                    Some(recipient) => direct_greeting(recipient.username()),
                    None => return Vec::new(),
                };
                vec![self.deliver(actor, friend, content)]
            }
            ActionKind::Friend => {
                let Some(target) = pick_uniform(rng, self.users().map(User::id)) else {
                    return Vec::new();
                };
                if target == actor {
                    return Vec::new();
                }
                self.befriend(actor, target).into_iter().collect()
            }
            ActionKind::GroupMessage => {
                let Some(group) = pick_uniform(rng, user.groups()) else {
                    return Vec::new();
                };
                let content = match self.group(group) {
                    Some(g) => group_greeting(g.name()),
                    None => return Vec::new(),
                };
                self.broadcast(actor, group, content)
            }
        }
    }
}

/// Drives random activity with an owned, optionally seeded RNG
#[derive(Debug)]
pub struct ActivitySimulator {
    rng: SmallRng,
    seed: Option<u64>,
    steps_run: u64,
}

impl ActivitySimulator {
    /// Seeded from `seed` when given, otherwise from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            rng,
            seed,
            steps_run: 0,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Total steps run across all calls to [`ActivitySimulator::run`].
    pub fn steps_run(&self) -> u64 {
        self.steps_run
    }

    pub fn run(&mut self, network: &mut SocialNetwork, num_actions: usize) -> Vec<Notification> {
        tracing::info!(num_actions, seed = ?self.seed, "simulating activity");
        let notifications = network.simulate_activity(num_actions, &mut self.rng);
        self.steps_run += num_actions as u64;
        notifications
    }
}
