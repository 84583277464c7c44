use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

const TICK: Duration = Duration::from_secs(1);

/// Time state shared by the exam flow and its countdown task.
#[derive(Debug, Default)]
pub struct ExamClock {
    remaining_seconds: AtomicU64,
    expired: AtomicBool,
}

impl ExamClock {
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds.load(Ordering::Acquire)
    }

    pub fn is_expired(&self) -> bool {
        self.expired.load(Ordering::Acquire)
    }

    pub fn expire(&self) {
        self.expired.store(true, Ordering::Release);
    }

    fn set_remaining(&self, seconds: u64) {
        self.remaining_seconds.store(seconds, Ordering::Release);
    }

    fn tick(&self) {
        // Never wraps below zero
        let _ = self
            .remaining_seconds
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |s| s.checked_sub(1));
    }
}

/// Handle to the background task counting an [`ExamClock`] down to zero.
pub struct Countdown {
    handle: JoinHandle<()>,
}

impl Countdown {
    pub fn start(clock: Arc<ExamClock>, seconds: u64) -> Self {
        clock.set_remaining(seconds);
        log::info!("Exam timer started: {} seconds", seconds);

        let handle = tokio::spawn(async move {
            while clock.remaining_seconds() > 0 {
                tokio::time::sleep(TICK).await;
                clock.tick();
            }
            clock.expire();
            log::info!("Exam time is up");
        });

        Self { handle }
    }

    /// Stops the countdown. The expiry flag is left as it is.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Waits for the countdown to end. Failures are logged, not returned.
    pub async fn join(self) {
        match self.handle.await {
            Ok(()) => {}
            Err(e) if e.is_cancelled() => log::debug!("Exam timer stopped"),
            Err(e) => log::warn!("Timer error: {}", e),
        }
    }
}

/// Formats seconds as `MM:SS`.
pub fn format_remaining(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
