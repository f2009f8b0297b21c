//! Transient user-facing notices
//!
//! Handlers push fire-and-forget notices into a [`NoticeQueue`]; the
//! presentation layer drains and renders whatever is live and the periodic
//! tick expires entries past their time-to-live. The queue keeps the core
//! free of any platform toast/snackbar API.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum notices retained at once. Older entries are dropped first.
pub const MAX_NOTICES: usize = 8;

/// How long a notice stays visible before the tick expires it.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Notice severity, mapped to a display style by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeLevel {
    #[default]
    Info,
    Warning,
    Error,
}

/// A single transient message with no acknowledgment and no retry.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    raised_at: Instant,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            raised_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    /// Time elapsed since the notice was raised.
    pub fn age(&self) -> Duration {
        self.raised_at.elapsed()
    }
}

/// Bounded FIFO of live notices.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    entries: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a notice, dropping the oldest entry when at capacity.
    pub fn push(&mut self, notice: Notice) {
        if self.entries.len() >= MAX_NOTICES {
            self.entries.pop_front();
        }
        self.entries.push_back(notice);
    }

    /// Drop notices older than [`NOTICE_TTL`]. Called on every tick.
    pub fn expire(&mut self) {
        self.entries.retain(|n| n.age() < NOTICE_TTL);
    }

    /// The most recently raised live notice, if any.
    pub fn latest(&self) -> Option<&Notice> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notice> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
