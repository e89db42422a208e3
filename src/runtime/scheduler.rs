use crate::runtime::event::AppEvent;
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerCommand {
    EmitNow(AppEvent),
    /// Deliver `event` after `delay`. A later `Supersede` or `Cancel` on the
    /// same key discards it.
    After {
        key: String,
        delay: Duration,
        event: AppEvent,
    },
    /// Like `After`, but first invalidates every timer already pending on the
    /// key. Only the newest timer is honored.
    Supersede {
        key: String,
        delay: Duration,
        event: AppEvent,
    },
    Cancel {
        key: String,
    },
}

#[derive(Debug, Clone)]
struct Guard {
    key: String,
    version: u64,
}

#[derive(Debug, Clone)]
struct PendingTimer {
    due_at: Instant,
    guard: Guard,
    event: AppEvent,
}

/// Cooperative timer wheel for the event loop. Timers are keyed and
/// versioned: cancelling or superseding a key bumps its version, so a timer
/// queued under an older version is discarded when it comes due instead of
/// being delivered. This makes teardown-time cancellation race-free without
/// any locking.
#[derive(Default)]
pub struct Scheduler {
    ready: VecDeque<AppEvent>,
    pending: Vec<PendingTimer>,
    key_versions: HashMap<String, u64>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, command: SchedulerCommand, now: Instant) {
        match command {
            SchedulerCommand::EmitNow(event) => {
                self.ready.push_back(event);
            }
            SchedulerCommand::After { key, delay, event } => {
                let version = *self.key_versions.entry(key.clone()).or_insert(0);
                self.pending.push(PendingTimer {
                    due_at: now + delay,
                    guard: Guard { key, version },
                    event,
                });
            }
            SchedulerCommand::Supersede { key, delay, event } => {
                let version = self.bump_version(&key);
                self.pending.push(PendingTimer {
                    due_at: now + delay,
                    guard: Guard { key, version },
                    event,
                });
            }
            SchedulerCommand::Cancel { key } => {
                self.bump_version(&key);
            }
        }
    }

    pub fn drain_ready(&mut self, now: Instant) -> Vec<AppEvent> {
        let mut idx = 0usize;
        while idx < self.pending.len() {
            if self.pending[idx].due_at <= now {
                let timer = self.pending.swap_remove(idx);
                if self.timer_is_valid(&timer) {
                    self.ready.push_back(timer.event);
                }
            } else {
                idx += 1;
            }
        }

        self.ready.drain(..).collect()
    }

    /// How long the event loop may block before the next timer comes due.
    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        let mut next = default_timeout;
        for timer in &self.pending {
            let due_in = timer.due_at.saturating_duration_since(now);
            if due_in < next {
                next = due_in;
            }
        }
        next
    }

    fn timer_is_valid(&self, timer: &PendingTimer) -> bool {
        let current = *self.key_versions.get(&timer.guard.key).unwrap_or(&0);
        current == timer.guard.version
    }

    fn bump_version(&mut self, key: &str) -> u64 {
        let entry = self.key_versions.entry(key.to_string()).or_insert(0);
        *entry = entry.saturating_add(1);
        *entry
    }
}
