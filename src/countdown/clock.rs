use chrono::{DateTime, Utc};
use log::warn;

/// Source of the current wall-clock time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The instant a countdown runs towards.
///
/// A target that could not be parsed has no instant and counts as already
/// elapsed, so a bad value completes the countdown instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target(Option<DateTime<Utc>>);

impl Target {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(Some(instant))
    }

    pub fn elapsed() -> Self {
        Self(None)
    }

    /// Parse an RFC 3339 timestamp. Never fails.
    pub fn parse(value: &str) -> Self {
        match DateTime::parse_from_rfc3339(value.trim()) {
            Ok(instant) => Self::at(instant.with_timezone(&Utc)),
            Err(e) => {
                warn!("Invalid countdown target {:?} ({}), treating as elapsed", value, e);
                Self::elapsed()
            }
        }
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Whether the target has been reached at `now`.
    pub fn is_reached(&self, now: DateTime<Utc>) -> bool {
        match self.0 {
            Some(instant) => instant <= now,
            None => true,
        }
    }
}
