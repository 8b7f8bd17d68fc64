// Owned one-second countdown ticker

use super::{TERMINAL_LABEL, format_time_left};
use crate::log_debug;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Recompute period for a running countdown
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A running countdown owned by the view that displays it.
///
/// The background task stops on its own after emitting the terminal label,
/// and is aborted by [`Ticker::cancel`] or when the ticker is dropped.
pub struct Ticker {
    handle: JoinHandle<()>,
    joined: bool,
}

impl Ticker {
    /// Start ticking against the system clock.
    ///
    /// Returns `None` without spawning anything when the countdown is
    /// disabled or has no end instant.
    pub fn start<F>(end: Option<DateTime<Utc>>, disabled: bool, on_tick: F) -> Option<Self>
    where
        F: FnMut(String) + Send + 'static,
    {
        Self::start_with_clock(end, disabled, Utc::now, on_tick)
    }

    /// Same as [`Ticker::start`] but samples `now` from `clock` on every tick.
    pub fn start_with_clock<C, F>(
        end: Option<DateTime<Utc>>,
        disabled: bool,
        clock: C,
        mut on_tick: F,
    ) -> Option<Self>
    where
        C: Fn() -> DateTime<Utc> + Send + 'static,
        F: FnMut(String) + Send + 'static,
    {
        if disabled {
            return None;
        }
        let end = end?;

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_PERIOD);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                let label = format_time_left(Some(end), clock(), false);
                let ended = label == TERMINAL_LABEL;
                on_tick(label);
                if ended {
                    log_debug!("Countdown to {} reached its end", end);
                    break;
                }
            }
        });

        Some(Self {
            handle,
            joined: false,
        })
    }

    /// Stop ticking. No further callbacks run once the task observes the abort.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait until the countdown ends or is cancelled
    pub async fn wait(&mut self) {
        if self.joined {
            return;
        }
        let _ = (&mut self.handle).await;
        self.joined = true;
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
