use leptos::prelude::*;
use std::time::Duration;
use strum::{AsRefStr, Display};

/// How long a notification stays up before it hides itself.
pub(crate) const NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Severity {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Notification {
    /// Monotonic; lets a stale auto-hide timer recognise it was superseded.
    pub seq: u64,
    pub message: String,
    pub severity: Severity,
}

/// Single-slot transient message. A new message replaces the visible one.
#[derive(Clone, Copy)]
pub(crate) struct Notifier {
    slot: RwSignal<Option<Notification>>,
    next_seq: RwSignal<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(None),
            next_seq: RwSignal::new(1),
        }
    }

    pub fn current(&self) -> Option<Notification> {
        self.slot.get()
    }

    #[cfg(test)]
    pub fn current_untracked(&self) -> Option<Notification> {
        self.slot.get_untracked()
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let seq = self.next_seq.get_untracked();
        self.next_seq.set(seq.saturating_add(1));
        self.slot.set(Some(Notification {
            seq,
            message: message.into(),
            severity,
        }));
        seq
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Error)
    }

    pub fn dismiss(&self) {
        self.slot.set(None);
    }

    /// Auto-hide path: only clears the slot if `seq` is still the one showing.
    pub fn expire(&self, seq: u64) {
        if self
            .slot
            .get_untracked()
            .is_some_and(|n| n.seq == seq)
        {
            self.slot.set(None);
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_notification_replaces_first() {
        let n = Notifier::new();
        let first = n.success("Course created successfully!");
        let second = n.error("Failed to fetch courses");
        assert!(second > first);

        let shown = n.current_untracked().expect("a notification is visible");
        assert_eq!(shown.message, "Failed to fetch courses");
        assert_eq!(shown.severity, Severity::Error);
    }

    #[test]
    fn stale_timer_does_not_hide_replacement() {
        let n = Notifier::new();
        let first = n.success("one");
        let second = n.success("two");

        n.expire(first);
        assert_eq!(n.current_untracked().map(|x| x.message), Some("two".into()));

        n.expire(second);
        assert!(n.current_untracked().is_none());
    }

    #[test]
    fn dismiss_clears_slot() {
        let n = Notifier::new();
        n.error("boom");
        n.dismiss();
        assert!(n.current_untracked().is_none());
        assert_eq!(Severity::Success.as_ref(), "success");
    }
}
