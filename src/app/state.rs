use std::time::{Duration, Instant};

/// How long a notification stays on screen unless superseded or dismissed.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// The drop zone's observable phase, derived from the state fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Loaded,
    Uploading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient status message with an owned expiry deadline. The deadline is
/// rekeyed whenever a new notification replaces this one.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    expires_at: Instant,
}

#[derive(Default)]
pub struct WidgetState {
    pub file_content: Option<String>,
    pub file_name: String,
    pub is_uploading: bool,
    drag_counter: u32,
    notification: Option<Notification>,
    read_generation: u64,
    upload_generation: u64,
}

impl WidgetState {
    pub fn phase(&self) -> Phase {
        if self.is_uploading {
            Phase::Uploading
        } else if self.drag_counter > 0 {
            Phase::Dragging
        } else if self.file_content.is_some() {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }

    /// Invariant: dragging iff the enter/leave counter is strictly positive.
    pub fn is_dragging(&self) -> bool {
        self.drag_counter > 0
    }

    /// Drag-enter; events carrying no items are ignored.
    pub fn drag_entered(&mut self, item_count: usize) {
        if item_count > 0 {
            self.drag_counter += 1;
        }
    }

    pub fn drag_left(&mut self) {
        self.drag_counter = self.drag_counter.saturating_sub(1);
    }

    /// A drop ends the drag regardless of how many enters were seen.
    pub fn drag_dropped(&mut self) {
        self.drag_counter = 0;
    }

    pub fn set_loaded(&mut self, name: String, content: String) {
        self.file_name = name;
        self.file_content = Some(content);
    }

    /// Clears the file and notification, and orphans any in-flight read so a
    /// late completion cannot resurrect the state.
    pub fn reset_file(&mut self) {
        self.file_content = None;
        self.file_name.clear();
        self.notification = None;
        self.read_generation += 1;
    }

    pub fn begin_read(&mut self) -> u64 {
        self.read_generation += 1;
        self.read_generation
    }

    pub fn is_current_read(&self, generation: u64) -> bool {
        generation == self.read_generation
    }

    pub fn begin_upload(&mut self) -> u64 {
        self.is_uploading = true;
        self.upload_generation += 1;
        self.upload_generation
    }

    pub fn is_current_upload(&self, generation: u64) -> bool {
        generation == self.upload_generation
    }

    pub fn finish_upload(&mut self) {
        self.is_uploading = false;
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn notify_success(&mut self, message: impl Into<String>, now: Instant) {
        self.set_notification(NotificationKind::Success, message, now);
    }

    pub fn notify_error(&mut self, message: impl Into<String>, now: Instant) {
        self.set_notification(NotificationKind::Error, message, now);
    }

    fn set_notification(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        self.notification = Some(Notification {
            kind,
            message: message.into(),
            expires_at: now + NOTIFICATION_TTL,
        });
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Drops an expired notification; returns whether anything changed.
    pub fn expire_notification(&mut self, now: Instant) -> bool {
        let expired = self
            .notification
            .as_ref()
            .map_or(false, |n| now >= n.expires_at);
        if expired {
            self.notification = None;
        }
        expired
    }

    /// Time until the current notification should disappear.
    pub fn notification_remaining(&self, now: Instant) -> Option<Duration> {
        self.notification
            .as_ref()
            .map(|n| n.expires_at.saturating_duration_since(now))
    }
}
