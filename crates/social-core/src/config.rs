//! Configuration loading for the simulator.
//!
//! Settings come from a TOML file; every section is optional. Without a
//! `[scenario]` table the demo network is used.
//!
//! ```toml
//! [simulation]
//! seed = 42
//! num_actions = 10
//!
//! [scenario]
//! users = ["Alice", "Bob"]
//! friendships = [["Alice", "Bob"]]
//! groups = ["Developers"]
//!
//! [[scenario.memberships]]
//! user = "Alice"
//! group = "Developers"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Complete simulator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Random activity settings
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Initial users, friendships and groups
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

impl SimConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that every friendship and membership names a declared user/group.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scenario.validate()
    }
}

/// Returns the default configuration as a TOML string.
pub fn default_config_toml() -> Result<String, ConfigError> {
    SimConfig::default().to_toml()
}

/// Random activity configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed seed for reproducible runs; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Number of random steps to simulate
    pub num_actions: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            num_actions: 10,
        }
    }
}

/// A user joining a group at setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub user: String,
    pub group: String,
}

impl Membership {
    pub fn new(user: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            group: group.into(),
        }
    }
}

/// Initial network layout.
///
/// Fields missing from a present `[scenario]` table are empty, not demo values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub friendships: Vec<(String, String)>,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::demo()
    }
}

impl ScenarioConfig {
    /// A scenario with nothing in it.
    pub fn empty() -> Self {
        Self {
            users: Vec::new(),
            friendships: Vec::new(),
            groups: Vec::new(),
            memberships: Vec::new(),
        }
    }

    /// Five users, four friendships and two groups.
    pub fn demo() -> Self {
        let pair = |a: &str, b: &str| (a.to_string(), b.to_string());
        Self {
            users: ["Alice", "Bob", "Charlie", "Dana", "Eve"]
                .into_iter()
                .map(String::from)
                .collect(),
            friendships: vec![
                pair("Alice", "Bob"),
                pair("Alice", "Charlie"),
                pair("Bob", "Dana"),
                pair("Dana", "Eve"),
            ],
            groups: vec!["Developers".into(), "Designers".into()],
            memberships: vec![
                Membership::new("Alice", "Developers"),
                Membership::new("Bob", "Developers"),
                Membership::new("Charlie", "Designers"),
                Membership::new("Dana", "Designers"),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let known_user = |name: &str| self.users.iter().any(|u| u == name);
        let known_group = |name: &str| self.groups.iter().any(|g| g == name);

        for (a, b) in &self.friendships {
            for name in [a, b] {
                if !known_user(name.as_str()) {
                    return Err(ConfigError::UnknownUser {
                        name: name.clone(),
                        context: format!("friendship {} - {}", a, b),
                    });
                }
            }
        }

        for membership in &self.memberships {
            if !known_user(membership.user.as_str()) {
                return Err(ConfigError::UnknownUser {
                    name: membership.user.clone(),
                    context: format!("membership in '{}'", membership.group),
                });
            }
            if !known_group(membership.group.as_str()) {
                return Err(ConfigError::UnknownGroup {
                    name: membership.group.clone(),
                    user: membership.user.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Error writing TOML config
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Scenario references a user that is not declared
    #[error("unknown user '{name}' in {context}")]
    UnknownUser { name: String, context: String },

    /// Scenario references a group that is not declared
    #[error("unknown group '{name}' in membership of '{user}'")]
    UnknownGroup { name: String, user: String },
}
