//! Transient status notifications
//!
//! Success notices linger for 3 seconds, errors for 4. The status bar
//! shows the most recent live notice.

use std::time::{Duration, Instant};

pub const SUCCESS_TTL: Duration = Duration::from_secs(3);
pub const ERROR_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct NotificationState {
    notices: Vec<Notice>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_success(&mut self, text: impl Into<String>) {
        self.push_at(NoticeKind::Success, text.into(), Instant::now());
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push_at(NoticeKind::Error, text.into(), Instant::now());
    }

    pub fn push_at(&mut self, kind: NoticeKind, text: String, now: Instant) {
        let ttl = match kind {
            NoticeKind::Success => SUCCESS_TTL,
            NoticeKind::Error => ERROR_TTL,
        };
        self.notices.push(Notice {
            kind,
            text,
            expires_at: now + ttl,
        });
    }

    /// Drops expired notices; called once per frame
    pub fn prune(&mut self, now: Instant) {
        self.notices.retain(|n| n.expires_at > now);
    }

    /// The notice currently shown, newest first
    pub fn current(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_notice_wins() {
        let mut state = NotificationState::new();
        let now = Instant::now();
        state.push_at(NoticeKind::Success, "saved".to_string(), now);
        state.push_at(NoticeKind::Error, "boom".to_string(), now);
        assert_eq!(state.current().unwrap().text, "boom");
    }

    #[test]
    fn notices_expire_on_schedule() {
        let mut state = NotificationState::new();
        let now = Instant::now();
        state.push_at(NoticeKind::Success, "saved".to_string(), now);
        state.push_at(NoticeKind::Error, "boom".to_string(), now);

        state.prune(now + SUCCESS_TTL + Duration::from_millis(1));
        assert_eq!(state.current().unwrap().text, "boom");

        state.prune(now + ERROR_TTL + Duration::from_millis(1));
        assert!(state.current().is_none());
    }
}
