use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct NoticeState {
    entries: Vec<Notice>,
    timeout: Duration,
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMEOUT)
    }
}

impl NoticeState {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

    pub fn new(timeout: Duration) -> Self {
        Self {
            entries: Vec::new(),
            timeout,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notify_at(message, severity, Instant::now());
    }

    pub fn notify_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        let message = message.into();
        debug!(?severity, %message, "notice");
        self.entries.push(Notice {
            message,
            severity,
            expires_at: now + self.timeout,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(message, Severity::Error);
    }

    /// Drops every entry whose timeout has elapsed. Returns true if any was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.entries.len();
        self.entries.retain(|notice| notice.expires_at > now);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }

    pub fn is_visible(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Rows the region needs (0 hides it).
    pub fn height(&self) -> u16 {
        self.entries.len().min(u16::MAX as usize) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_stack_in_arrival_order() {
        let mut notices = NoticeState::default();
        let now = Instant::now();
        notices.notify_at("first", Severity::Success, now);
        notices.notify_at("second", Severity::Error, now);
        let messages: Vec<_> = notices.entries().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert_eq!(notices.height(), 2);
    }

    #[test]
    fn test_notice_expires_after_timeout() {
        let mut notices = NoticeState::new(Duration::from_millis(3000));
        let start = Instant::now();
        notices.notify_at("saved", Severity::Success, start);

        assert!(!notices.expire(start + Duration::from_millis(2999)));
        assert!(notices.is_visible());

        assert!(notices.expire(start + Duration::from_millis(3000)));
        assert!(!notices.is_visible());
        assert_eq!(notices.height(), 0);
    }

    #[test]
    fn test_each_notice_has_its_own_deadline() {
        let mut notices = NoticeState::new(Duration::from_secs(3));
        let start = Instant::now();
        notices.notify_at("old", Severity::Error, start);
        notices.notify_at("new", Severity::Error, start + Duration::from_secs(2));

        notices.expire(start + Duration::from_secs(3));
        assert_eq!(notices.entries().len(), 1);
        assert_eq!(notices.entries()[0].message, "new");
    }
}
