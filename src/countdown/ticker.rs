//! Scoped periodic tick source driving a [`Countdown`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Result, bail};
use log::debug;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{Clock, Countdown, Snapshot};

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Spawns the tick task for a countdown.
pub struct Ticker;

impl Ticker {
    /// Start ticking `countdown` every `period` on the current tokio runtime.
    ///
    /// The countdown's initial value is published right away. The task stops
    /// by itself once the countdown completes, and is aborted when the
    /// returned handle is dropped. A zero `period` is rejected.
    pub fn spawn<C>(mut countdown: Countdown, clock: C, period: Duration) -> Result<TickerHandle>
    where
        C: Clock + 'static,
    {
        if period.is_zero() {
            bail!("Tick period must be greater than zero");
        }

        let (tx, rx) = watch::channel(countdown.snapshot());
        let cancelled = Arc::new(AtomicBool::new(false));
        let task_cancelled = Arc::clone(&cancelled);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first interval tick resolves immediately; the initial value is already out.
            interval.tick().await;

            while !countdown.is_complete() {
                interval.tick().await;
                if task_cancelled.load(Ordering::SeqCst) {
                    break;
                }
                let snapshot = countdown.tick(clock.now());
                tx.send_replace(snapshot);
            }
            debug!("Ticker finished");
        });

        Ok(TickerHandle {
            task,
            cancelled,
            snapshots: rx,
        })
    }
}

/// Owns a running tick task. Dropping the handle cancels it.
pub struct TickerHandle {
    task: JoinHandle<()>,
    cancelled: Arc<AtomicBool>,
    snapshots: watch::Receiver<Snapshot>,
}

impl TickerHandle {
    /// Latest published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        *self.snapshots.borrow()
    }

    /// Wait for the next published snapshot.
    ///
    /// Returns `None` once the tick task has finished and nothing new will arrive.
    pub async fn changed(&mut self) -> Option<Snapshot> {
        match self.snapshots.changed().await {
            Ok(()) => Some(*self.snapshots.borrow_and_update()),
            Err(_) => None,
        }
    }

    /// Wait until the countdown completes and return the final snapshot.
    ///
    /// Returns `None` if the tick task ended without completing, e.g. it
    /// was aborted or panicked.
    pub async fn wait_complete(&mut self) -> Option<Snapshot> {
        loop {
            let current = *self.snapshots.borrow_and_update();
            if current.is_complete() {
                return Some(current);
            }
            self.changed().await?;
        }
    }

    /// Stop ticking. Equivalent to dropping the handle.
    pub fn cancel(self) {}

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.task.abort();
    }
}
