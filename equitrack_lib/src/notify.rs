//! Ephemeral user notifications (toasts).
//!
//! A single process-wide, insertion-ordered registry. Entries expire on
//! their own after a duration or can be dismissed explicitly. Identity is
//! assigned at push time and is opaque to callers.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Opaque handle for a pushed notification.
pub type ToastId = u64;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// One active notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    expires_at: Instant,
}

struct Registry {
    toasts: Vec<Toast>,
    next_id: ToastId,
}

/// Thread-safe notification queue. Expired entries are lazily pruned
/// whenever the active set is read.
pub struct Notifications {
    state: Mutex<Registry>,
    default_ttl: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl Notifications {
    /// Creates an empty queue with the given default time-to-live.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            state: Mutex::new(Registry {
                toasts: Vec::new(),
                next_id: 1,
            }),
            default_ttl,
        }
    }

    /// Pushes a notification and returns its id. `duration` falls back to
    /// the queue default when `None`.
    pub fn push(
        &self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Option<Duration>,
    ) -> ToastId {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let id = state.next_id;
        state.next_id += 1;
        state.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            expires_at: Instant::now() + duration.unwrap_or(self.default_ttl),
        });
        id
    }

    /// Pushes a success notification with the default duration.
    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastKind::Success, None)
    }

    /// Pushes an error notification with the default duration.
    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastKind::Error, None)
    }

    /// Returns the currently active notifications in insertion order,
    /// pruning anything that has expired.
    pub fn active(&self) -> Vec<Toast> {
        let now = Instant::now();
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.toasts.retain(|t| t.expires_at > now);
        state.toasts.clone()
    }

    /// Removes a notification before its duration elapses. Returns whether
    /// it was still present.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let before = state.toasts.len();
        state.toasts.retain(|t| t.id != id);
        state.toasts.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_unique_ids() {
        let queue = Notifications::default();
        let a = queue.push("first", ToastKind::Success, None);
        let b = queue.push("second", ToastKind::Error, None);
        assert_ne!(a, b);
    }

    #[test]
    fn active_preserves_insertion_order() {
        let queue = Notifications::default();
        queue.success("one");
        queue.error("two");
        queue.push("three", ToastKind::Info, None);

        let active = queue.active();
        let messages: Vec<&str> = active.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["one", "two", "three"]);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let queue = Notifications::default();
        let a = queue.success("keep");
        let b = queue.success("drop");

        assert!(queue.dismiss(b));
        let active = queue.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, a);
    }

    #[test]
    fn dismiss_unknown_id_is_false() {
        let queue = Notifications::default();
        assert!(!queue.dismiss(42));
    }

    #[test]
    fn dismiss_twice_is_false_the_second_time() {
        let queue = Notifications::default();
        let id = queue.success("once");
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
    }

    #[test]
    fn expired_entries_are_pruned() {
        let queue = Notifications::default();
        queue.push("gone", ToastKind::Info, Some(Duration::ZERO));
        queue.push("still here", ToastKind::Info, Some(Duration::from_secs(60)));

        std::thread::sleep(Duration::from_millis(5));
        let active = queue.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "still here");
    }

    #[test]
    fn kinds_are_recorded() {
        let queue = Notifications::default();
        queue.success("ok");
        queue.error("bad");

        let active = queue.active();
        assert_eq!(active[0].kind, ToastKind::Success);
        assert_eq!(active[1].kind, ToastKind::Error);
    }
}
