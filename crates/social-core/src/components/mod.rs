//! Network entities: users and groups.

pub mod group;
pub mod user;

pub use group::{Group, GroupId};
pub use user::{User, UserId};
