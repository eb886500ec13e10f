//! Notification Log
//!
//! Appends each printed notification to a JSONL file as a
//! [`NotificationRecord`] stamped with a run-wide `evt_` id.

use social_events::{Notification, NotificationRecord};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// JSONL sink for notifications; without a file it only counts them
pub struct NotificationLogger {
    writer: Option<BufWriter<File>>,
    logged: u64,
}

impl NotificationLogger {
    /// Truncates `path` and logs into it
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            logged: 0,
        })
    }

    /// A logger that keeps no file
    pub fn null() -> Self {
        Self {
            writer: None,
            logged: 0,
        }
    }

    /// Number of notifications stamped so far
    pub fn event_count(&self) -> u64 {
        self.logged
    }

    /// Stamps every notification in the batch and writes it as one line.
    ///
    /// Ids continue across batches, so setup and activity share one sequence.
    pub fn log_batch(&mut self, notifications: &[Notification]) -> io::Result<()> {
        for notification in notifications {
            self.logged += 1;
            let Some(writer) = self.writer.as_mut() else {
                continue;
            };
            let record = NotificationRecord::new(
                format!("evt_{:08}", self.logged),
                notification.clone(),
            );
            writeln!(writer, "{}", record.to_jsonl()?)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for NotificationLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to flush notification log: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::SocialNetwork;

    fn read_records(path: &Path) -> Vec<NotificationRecord> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| NotificationRecord::from_jsonl(l).unwrap())
            .collect()
    }

    #[test]
    fn test_ids_continue_across_batches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notifications.jsonl");

        let mut network = SocialNetwork::new();
        let mut logger = NotificationLogger::new(&path).unwrap();
        logger.log_batch(&network.add_user("Alice")).unwrap();
        logger.log_batch(&network.add_group("Developers")).unwrap();
        logger
            .log_batch(&network.join_group("Alice", "Developers"))
            .unwrap();
        logger.flush().unwrap();

        let records = read_records(&path);
        let ids: Vec<&str> = records.iter().map(|r| r.event_id.as_str()).collect();
        assert_eq!(ids, vec!["evt_00000001", "evt_00000002", "evt_00000003"]);
        assert_eq!(
            records[2].notification.to_string(),
            "Alice joined the group 'Developers'"
        );
    }

    #[test]
    fn test_empty_batch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notifications.jsonl");

        let mut logger = NotificationLogger::new(&path).unwrap();
        logger.log_batch(&[]).unwrap();
        drop(logger);

        assert!(read_records(&path).is_empty());
    }

    #[test]
    fn test_null_logger_counts() {
        let mut network = SocialNetwork::new();
        let mut notes = network.add_user("A");
        notes.extend(network.add_user("B"));

        let mut logger = NotificationLogger::null();
        logger.log_batch(&notes).unwrap();
        assert_eq!(logger.event_count(), 2);
        assert!(logger.flush().is_ok());
    }
}
