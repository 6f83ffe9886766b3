use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

const MILLIS_PER_SECOND: u64 = 1000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// Time left until the target, broken down for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RemainingDuration {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl RemainingDuration {
    pub const ZERO: RemainingDuration = RemainingDuration {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Break a millisecond delta into days/hours/minutes/seconds, flooring each unit.
    pub fn from_millis(delta: u64) -> Self {
        Self {
            days: delta / MILLIS_PER_DAY,
            hours: delta % MILLIS_PER_DAY / MILLIS_PER_HOUR,
            minutes: delta % MILLIS_PER_HOUR / MILLIS_PER_MINUTE,
            seconds: delta % MILLIS_PER_MINUTE / MILLIS_PER_SECOND,
        }
    }

    /// Remaining time from `now` to `target`, clamped at zero.
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        // Negative deltas (target already passed) clamp to zero.
        let delta = u64::try_from((target - now).num_milliseconds()).unwrap_or_default();
        Self::from_millis(delta)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Labelled units in display order.
    pub fn units(&self) -> [(&'static str, u64); 4] {
        [
            ("DAYS", self.days),
            ("HOURS", self.hours),
            ("MINUTES", self.minutes),
            ("SECONDS", self.seconds),
        ]
    }
}

impl fmt::Display for RemainingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
