//! Notification logging.

pub mod logger;

pub use logger::NotificationLogger;
