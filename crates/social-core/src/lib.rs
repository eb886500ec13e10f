//! In-memory social network simulator.
//!
//! Users befriend each other, join groups and exchange messages. Every
//! mutating operation returns the notifications it produced; printing them
//! is left to the [`output`] module.

pub mod components;
pub mod config;
pub mod events;
pub mod network;
pub mod output;
pub mod setup;
pub mod simulation;

pub use components::{Group, GroupId, User, UserId};
pub use config::{ConfigError, ScenarioConfig, SimConfig, SimulationConfig};
pub use network::SocialNetwork;
pub use simulation::{ActionKind, ActivitySimulator};

pub use social_events::{Message, MessageId, Notification, NotificationKind};
