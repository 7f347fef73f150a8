use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use uuid::Uuid;

use super::config::Severity;

/// Most toasts kept on screen; older ones are dropped first.
pub const MAX_VISIBLE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(Uuid);

impl ToastId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
}

/// Ordered toasts, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    limit: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(MAX_VISIBLE)
    }
}

impl ToastQueue {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity, duration: Duration) -> ToastId {
        while self.toasts.len() >= self.limit {
            self.toasts.pop_front();
        }
        let id = ToastId::new();
        self.toasts.push_back(Toast {
            id,
            message: message.into(),
            severity,
            duration,
        });
        id
    }

    /// Returns false if the toast was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push("saved", Severity::Success, Duration::from_secs(3));
        let second = queue.push("failed", Severity::Error, Duration::from_secs(5));

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));

        let ids: Vec<_> = queue.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![second]);
    }

    #[test]
    fn oldest_dropped_past_limit() {
        let mut queue = ToastQueue::with_limit(2);
        queue.push("one", Severity::Default, Duration::from_secs(4));
        queue.push("two", Severity::Default, Duration::from_secs(4));
        queue.push("three", Severity::Default, Duration::from_secs(4));

        let messages: Vec<_> = queue.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }
}
