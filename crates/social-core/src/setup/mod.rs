//! Network Setup
//!
//! Builds the initial network from a scenario description.

pub mod scenario;

pub use scenario::{build_network, scenario_summary, ScenarioSummary};
