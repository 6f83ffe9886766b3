use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use log::{debug, info};

use crate::countdown::{
    Clock, CompletionCallback, Countdown, Snapshot, SystemClock, TICK_PERIOD, Ticker,
};
use crate::routes::Route;

use super::config::Config;

/// Run the launch countdown until it completes or the user interrupts it.
///
/// With `once`, print the current value and return without ticking.
#[tracing::instrument(skip(config))]
pub async fn countdown(config: &Config, once: bool) -> Result<()> {
    let clock = SystemClock;
    let completed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&completed);
    let on_complete: CompletionCallback = Box::new(move || {
        flag.store(true, Ordering::SeqCst);
    });

    let countdown = Countdown::new(config.target(), clock.now(), Some(on_complete));
    info!("Counting down to {}", config.launch_at);

    if once || countdown.is_complete() {
        println!("{}", render_snapshot(&countdown.snapshot()));
        return finish(&completed);
    }

    let mut handle = Ticker::spawn(countdown, clock, TICK_PERIOD)?;
    println!("{}", render_snapshot(&handle.snapshot()));

    loop {
        tokio::select! {
            next = handle.changed() => match next {
                Some(snapshot) => {
                    println!("{}", render_snapshot(&snapshot));
                    if snapshot.is_complete() {
                        break;
                    }
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupted, stopping countdown");
                break;
            }
        }
    }

    // Tear the timer down before reporting.
    handle.cancel();
    finish(&completed)
}

fn finish(completed: &AtomicBool) -> Result<()> {
    if completed.load(Ordering::SeqCst) {
        println!("It's Time! The download is now available.");
        println!("Redirecting to {}", Route::Downloads);
    }
    Ok(())
}

pub(crate) fn render_snapshot(snapshot: &Snapshot) -> String {
    snapshot
        .remaining
        .units()
        .iter()
        .map(|(label, value)| format!("{:02} {}", value, label))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::{CountdownState, RemainingDuration};

    #[test]
    fn test_render_snapshot() {
        let snapshot = Snapshot {
            remaining: RemainingDuration {
                days: 12,
                hours: 1,
                minutes: 0,
                seconds: 9,
            },
            state: CountdownState::Pending,
        };
        assert_eq!(
            render_snapshot(&snapshot),
            "12 DAYS  01 HOURS  00 MINUTES  09 SECONDS"
        );
    }

    #[tokio::test]
    async fn test_elapsed_launch_returns_immediately() {
        let config = Config {
            form_endpoint: None,
            launch_at: "2000-01-01T00:00:00Z".into(),
            user_agent: String::new(),
        };
        countdown(&config, false).await.unwrap();
    }
}
