//! Transient notifications and the destructive-action confirmation gate

use std::time::{Duration, Instant};

/// How long a notification stays visible without explicit dismissal
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// A single transient message
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    raised_at: Instant,
}

impl Notification {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            raised_at: Instant::now(),
        }
    }

    /// Whether the notification has outlived its TTL at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= NOTIFICATION_TTL
    }
}

/// Holds at most one active notification; a new one replaces the old
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise a notification, replacing any previous one
    pub fn notify(&mut self, severity: Severity, message: impl Into<String>) {
        self.current = Some(Notification::new(severity, message));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(Severity::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(Severity::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(Severity::Info, message);
    }

    /// The currently visible notification, if any and not yet expired
    pub fn active(&self) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|n| !n.is_expired_at(Instant::now()))
    }

    /// Dismiss explicitly
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

/// A destructive operation awaiting explicit confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteCategory(String),
    DeleteProduct(String),
    DeleteVariant(String),
}

/// Blocking yes/no gate for destructive operations
///
/// Nothing is issued to the backend until `confirm` hands the pending
/// action back to the caller; `cancel` discards it without any call.
#[derive(Debug, Default)]
pub struct ConfirmationGate {
    pending: Option<PendingAction>,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the gate with an action; replaces any earlier pending action
    pub fn request(&mut self, action: PendingAction) {
        self.pending = Some(action);
    }

    /// The action awaiting confirmation, if any
    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// Confirm: hand the action to the caller for execution
    pub fn confirm(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }

    /// Cancel: discard without issuing anything
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
