//! Console Report
//!
//! Formats notifications and the final per-user message logs.

use social_events::Notification;
use std::io::{self, Write};

use crate::network::SocialNetwork;

/// Printed before the random activity section
pub const ACTIVITY_HEADER: &str = "--- Simulating random activity ---";

/// Printed before the message log dump
pub const MESSAGES_HEADER: &str = "--- Messages in the network ---";

/// Write one line per notification
pub fn write_notifications<W: Write>(
    out: &mut W,
    notifications: &[Notification],
) -> io::Result<()> {
    for notification in notifications {
        writeln!(out, "{}", notification)?;
    }
    Ok(())
}

/// Separate the setup lines from the random activity
pub fn write_activity_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", ACTIVITY_HEADER)
}

/// Write every user's message log, users in registration order
pub fn write_message_logs<W: Write>(out: &mut W, network: &SocialNetwork) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", MESSAGES_HEADER)?;
    for user in network.users() {
        writeln!(out)?;
        writeln!(out, "Messages for {}:", user.username())?;
        for message in user.messages() {
            writeln!(out, "{}", message)?;
        }
    }
    Ok(())
}

/// The message log dump as a string
pub fn format_message_logs(network: &SocialNetwork) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_message_logs(&mut buf, network);
    String::from_utf8_lossy(&buf).into_owned()
}
