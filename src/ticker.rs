use std::time::Duration;

use tokio::sync::watch;
use tokio::task::{self, JoinHandle};
use tokio::time::{self, MissedTickBehavior};

/// Repeating timer that hands ticks to the UI loop.
///
/// The timer runs as a tokio task publishing a running tick count; `wake` is
/// called after each firing so the UI gets a frame to pick it up in. Firings
/// the UI hasn't seen yet collapse into one.
pub(crate) struct Ticker {
    ticks: watch::Receiver<u64>,
    task: JoinHandle<()>,
}

impl Ticker {
    pub fn spawn<F>(period: Duration, wake: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let (tx, ticks) = watch::channel(0);

        let task = task::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the owner has already
            // rendered once by then.
            interval.tick().await;

            let mut count = 0u64;
            loop {
                interval.tick().await;
                count += 1;
                if tx.send(count).is_err() {
                    break;
                }
                wake();
            }
        });

        Self { ticks, task }
    }

    /// True if the timer fired since the last call.
    pub fn take_due(&mut self) -> bool {
        match self.ticks.has_changed() {
            Ok(true) => {
                self.ticks.borrow_and_update();
                true
            }
            _ => false,
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.task.abort();
    }
}
