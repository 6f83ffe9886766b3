use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

use super::{RemainingDuration, Target};

/// Invoked once when the countdown reaches its target.
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownState {
    Pending,
    /// Terminal. Further ticks change nothing.
    Complete,
}

/// Point-in-time view of a countdown, safe to hand to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub remaining: RemainingDuration,
    pub state: CountdownState,
}

impl Snapshot {
    pub fn is_complete(&self) -> bool {
        self.state == CountdownState::Complete
    }
}

/// Countdown towards a fixed target instant.
pub struct Countdown {
    target: Target,
    remaining: RemainingDuration,
    state: CountdownState,
    on_complete: Option<CompletionCallback>,
}

impl Countdown {
    /// Create a countdown and compute its first value against `now`.
    ///
    /// A target at or before `now` completes immediately and fires
    /// `on_complete` before this returns.
    pub fn new(target: Target, now: DateTime<Utc>, on_complete: Option<CompletionCallback>) -> Self {
        let mut countdown = Self {
            target,
            remaining: RemainingDuration::ZERO,
            state: CountdownState::Pending,
            on_complete,
        };
        countdown.recompute(now);
        countdown
    }

    /// Recompute against `now`. Ticks after completion are no-ops.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Snapshot {
        self.recompute(now);
        self.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            remaining: self.remaining,
            state: self.state,
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn remaining(&self) -> RemainingDuration {
        self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.state == CountdownState::Complete
    }

    fn recompute(&mut self, now: DateTime<Utc>) {
        if self.is_complete() {
            return;
        }

        match self.target.instant() {
            Some(instant) if !self.target.is_reached(now) => {
                self.remaining = RemainingDuration::between(instant, now);
                debug!("Countdown at {}", self.remaining);
            }
            _ => {
                self.remaining = RemainingDuration::ZERO;
                self.state = CountdownState::Complete;
                info!("Countdown complete");
                if let Some(callback) = self.on_complete.take() {
                    callback();
                }
            }
        }
    }
}

impl std::fmt::Debug for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Countdown")
            .field("target", &self.target)
            .field("remaining", &self.remaining)
            .field("state", &self.state)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}
