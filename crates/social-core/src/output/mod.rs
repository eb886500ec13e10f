//! Output Module
//!
//! Console report, summary statistics and JSON snapshots.

pub mod report;
pub mod snapshot;
pub mod stats;

use thiserror::Error;

pub use report::{
    format_message_logs, write_activity_header, write_message_logs, write_notifications,
    ACTIVITY_HEADER, MESSAGES_HEADER,
};
pub use snapshot::{generate_snapshot, write_snapshot};
pub use stats::{compute_stats, StatsCollector};

/// Errors writing output files
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
