//! Launch countdown.
//!
//! A [`Countdown`] is a small state machine (`Pending` until the target is
//! reached, then `Complete` forever) that is recomputed from a [`Clock`] on
//! every tick. [`Ticker`] drives it once per second on tokio and hands out a
//! [`TickerHandle`] that owns the timer: dropping the handle stops the ticks.

mod clock;
mod duration;
mod state;
mod ticker;

pub use clock::{Clock, SystemClock, Target};
pub use duration::RemainingDuration;
pub use state::{CompletionCallback, Countdown, CountdownState, Snapshot};
pub use ticker::{TICK_PERIOD, Ticker, TickerHandle};

#[cfg(test)]
pub use clock::MockClock;

/// Launch instant of xbe.sh v2.0 (1:30 PM ET, September 20 2025).
pub const DEFAULT_LAUNCH_AT: &str = "2025-09-20T17:29:21Z";
