//! Background timer that raises the shared stop flag when the budget expires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{error, trace};

/// Longest the timer sleeps between deadline checks.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct SearchTimer {
    stop_flag: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SearchTimer {
    /// Spawn the timer. `stop_flag` is set once `budget` has elapsed.
    pub fn start(stop_flag: Arc<AtomicBool>, budget: Duration) -> Self {
        let started_at = Instant::now();
        let deadline = started_at.checked_add(budget);
        let flag = Arc::clone(&stop_flag);

        let handle = thread::spawn(move || loop {
            if flag.load(Ordering::Acquire) {
                return;
            }
            let now = Instant::now();
            let Some(deadline) = deadline else {
                thread::park_timeout(POLL_INTERVAL);
                continue;
            };
            if now >= deadline {
                trace!(
                    elapsed_ms = started_at.elapsed().as_millis() as u64,
                    "search budget expired"
                );
                flag.store(true, Ordering::Release);
                return;
            }
            thread::park_timeout(POLL_INTERVAL.min(deadline - now));
        });

        Self {
            stop_flag,
            handle: Some(handle),
        }
    }

    /// Raise the flag, wake the thread and wait for it to exit.
    pub fn finish(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop_flag.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                error!("search timer thread panicked");
            }
        }
    }
}

impl Drop for SearchTimer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use super::SearchTimer;

    #[test]
    fn flag_is_raised_after_the_budget() {
        let flag = Arc::new(AtomicBool::new(false));
        let started = Instant::now();
        let timer = SearchTimer::start(Arc::clone(&flag), Duration::from_millis(20));
        while !flag.load(Ordering::Acquire) {
            assert!(started.elapsed() < Duration::from_secs(5), "timer never fired");
            std::thread::sleep(Duration::from_millis(1));
        }
        assert!(started.elapsed() >= Duration::from_millis(20));
        timer.finish();
    }

    #[test]
    fn finishing_early_does_not_wait_for_the_budget() {
        let flag = Arc::new(AtomicBool::new(false));
        let started = Instant::now();
        let timer = SearchTimer::start(Arc::clone(&flag), Duration::from_secs(60));
        timer.finish();
        assert!(flag.load(Ordering::Acquire));
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
