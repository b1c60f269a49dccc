//! Transient status-bar notifications.
//!
//! Collaborators that need to report (store failures, AI failures, level-ups,
//! medals) receive the queue explicitly and push fire-and-forget notices;
//! nothing reaches it through globals.

use std::time::{Duration, Instant};

/// How long a notice stays visible before self-dismissing.
const NOTICE_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub severity: Severity,
    created: Instant,
}

impl Notice {
    fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.created) > NOTICE_LIFETIME
    }
}

/// Queue of pending notices, newest last. Expiry is checked once per frame
/// via [`NoticeQueue::prune`]; the status bar shows the newest survivor.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, severity: Severity, text: impl Into<String>) {
        self.notices.push(Notice {
            text: text.into(),
            severity,
            created: Instant::now(),
        });
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(Severity::Info, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(Severity::Success, text);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(Severity::Warning, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(Severity::Error, text);
    }

    /// Drop expired notices. Called once per frame before drawing.
    pub fn prune(&mut self) {
        let now = Instant::now();
        self.notices.retain(|n| !n.expired(now));
    }

    /// The notice the status bar should show right now.
    pub fn current(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// All pending notices, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Notice> {
        self.notices.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
