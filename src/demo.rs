//! Repeating render that walks the calendar one day per tick.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use log::debug;
use signal_hook::consts::{SIGINT, SIGTERM};

/// Stops a running [`DemoLoop`] before its next tick. Clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Cancel on SIGINT or SIGTERM instead of terminating the process, so
    /// the tick in progress can finish writing its output.
    pub fn cancel_on_signals(&self) -> io::Result<()> {
        signal_hook::flag::register(SIGINT, Arc::clone(&self.0))?;
        signal_hook::flag::register(SIGTERM, Arc::clone(&self.0))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoLoop {
    pub start: NaiveDate,
    pub interval: Duration,
    /// `None` runs until cancelled.
    pub limit: Option<usize>,
}

impl DemoLoop {
    pub fn new(start: NaiveDate, interval: Duration) -> Self {
        Self {
            start,
            interval,
            limit: None,
        }
    }

    pub fn with_limit(mut self, ticks: usize) -> Self {
        self.limit = Some(ticks);
        self
    }

    /// Call `tick` with start + 1 day, start + 2 days, and so on, sleeping
    /// `interval` in between. Returns the number of completed ticks.
    ///
    /// Stops on cancel, on reaching the limit, at the end of the calendar,
    /// or on the first error from `tick`, which is returned.
    pub fn run<F, E>(&self, cancel: &CancelHandle, mut tick: F) -> Result<usize, E>
    where
        F: FnMut(NaiveDate) -> Result<(), E>,
    {
        let mut date = self.start;
        let mut count = 0;

        loop {
            if cancel.is_cancelled() || self.limit.is_some_and(|limit| count >= limit) {
                break;
            }
            let Some(next) = date.succ_opt() else {
                break;
            };
            date = next;

            debug!("demo tick {count}: {date}");
            tick(date)?;
            count += 1;

            let more = !cancel.is_cancelled() && self.limit.is_none_or(|limit| count < limit);
            if more && !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        }

        Ok(count)
    }
}
