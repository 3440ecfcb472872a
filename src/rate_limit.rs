use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::time::{Duration, Instant};

// Per-IP submission window. One accepted submission per key per window;
// the stored instant is only replaced when a submission is accepted, so
// rejected attempts never extend the lockout.
pub struct RateLimiter {
    entries: DashMap<String, Instant>,
    window: Duration,
}

impl RateLimiter {
    pub fn new(window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            window,
        }
    }

    // Drop every entry at least a window old
    pub fn purge(&self, now: Instant) {
        let window = self.window;
        self.entries
            .retain(|_, last| now.duration_since(*last) < window);
    }

    // Check-and-set, atomic per key via the entry API
    pub fn check(&self, key: &str, now: Instant) -> bool {
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                if now.duration_since(*occupied.get()) >= self.window {
                    occupied.insert(now);
                    true
                } else {
                    false
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(now);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
