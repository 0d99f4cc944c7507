use std::time::{Duration, Instant};

/// Quiet period the destination input must hold still before a settled
/// value is emitted.
pub const QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Settles a stream of text edits: a value is emitted once no newer edit
/// has arrived within the quiet period. Edits inside the period are
/// coalesced; only the last one survives. Values equal to the previous
/// emission are swallowed, so re-typing the same text does not re-fetch.
///
/// Time is passed in explicitly, which keeps the logic deterministic
/// under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<PendingEdit>,
    last_emitted: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingEdit {
    value: String,
    edited_at: Instant,
}

impl Debouncer {
    /// The empty string counts as already settled, so a fresh form does
    /// not trigger a fetch.
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            last_emitted: String::new(),
        }
    }

    /// Record a raw edit; restarts the quiet period.
    pub fn record(&mut self, value: String, now: Instant) {
        self.pending = Some(PendingEdit {
            value,
            edited_at: now,
        });
    }

    /// The settled value, once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self
            .pending
            .as_ref()
            .map(|pending| now.duration_since(pending.edited_at) >= self.quiet)
            .unwrap_or(false);
        if !due {
            return None;
        }

        let value = match self.pending.take() {
            Some(pending) => pending.value,
            None => return None,
        };
        if value == self.last_emitted {
            return None;
        }
        self.last_emitted = value.clone();
        Some(value)
    }
}
