use std::time::{Duration, Instant};

/// Debounces note edits: text is due for saving once no edit arrived for
/// `delay`.
#[derive(Debug)]
pub struct AutoSave {
    delay: Duration,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    content: String,
    changed_at: Instant,
}

impl AutoSave {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn note_changed(&mut self, content: String, now: Instant) {
        self.pending = Some(Pending {
            content,
            changed_at: now,
        });
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.content.as_str())
    }

    /// Takes the pending text if the quiet period has elapsed.
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.changed_at) >= self.delay);
        if due {
            self.take_pending()
        } else {
            None
        }
    }

    /// Takes the pending text regardless of the delay.
    pub fn take_pending(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.content)
    }
}
