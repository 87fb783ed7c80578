use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// Displays transient notifications to the user.
///
/// Page behaviours only ever fire and forget through this trait; how and
/// for how long a notification is shown is up to the implementation.
pub trait Notifier {
    fn show_notification(&mut self, message: &str, severity: Severity);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

/// Toast stack shown in the top-right corner of the page
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    ttl: Duration,
    max_visible: usize,
    entries: VecDeque<Notification>,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            max_visible: 4,
            entries: VecDeque::new(),
        }
    }

    pub fn push_at(&mut self, message: &str, severity: Severity, now: Instant) {
        if self.entries.len() >= self.max_visible {
            self.entries.pop_front();
        }
        self.entries.push_back(Notification {
            message: message.to_string(),
            severity,
            shown_at: now,
        });
    }

    /// Drop notifications older than the configured lifetime
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|n| now.saturating_duration_since(n.shown_at) < ttl);
    }

    pub fn entries(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Notifier for NotificationCenter {
    fn show_notification(&mut self, message: &str, severity: Severity) {
        tracing::debug!(%severity, "Notification: {}", message);
        self.push_at(message, severity, Instant::now());
    }
}
