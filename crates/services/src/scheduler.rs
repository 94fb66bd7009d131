//! Periodic tick sources for the quiz countdown.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// One elapsed period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick;

/// Start/stop control over whatever drives `QuizController::tick`.
pub trait TickScheduler: Send + Sync {
    fn start(&self);
    fn stop(&self);
    fn is_running(&self) -> bool;
}

/// Emits a [`Tick`] on a channel every `period` while started.
///
/// Must be started from within a tokio runtime.
#[derive(Debug)]
pub struct IntervalScheduler {
    period: Duration,
    ticks: mpsc::UnboundedSender<Tick>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl IntervalScheduler {
    /// Returns the scheduler and the receiving end of its ticks.
    #[must_use]
    pub fn new(period: Duration) -> (Self, mpsc::UnboundedReceiver<Tick>) {
        let (ticks, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            period,
            ticks,
            task: Mutex::new(None),
        };
        (scheduler, rx)
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickScheduler for IntervalScheduler {
    fn start(&self) {
        let mut task = self.task.lock().unwrap_or_else(PoisonError::into_inner);
        if task.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return;
        }
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::error!("tick scheduler started outside a tokio runtime");
            return;
        };

        let period = self.period;
        let ticks = self.ticks.clone();
        *task = Some(runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if ticks.send(Tick).is_err() {
                    break;
                }
            }
        }));
        tracing::debug!(period_ms = period.as_millis(), "tick scheduler started");
    }

    fn stop(&self) {
        let mut task = self.task.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = task.take() {
            handle.abort();
            tracing::debug!("tick scheduler stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.task
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self
            .task
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            handle.abort();
        }
    }
}

/// Scheduler that never fires on its own. Callers invoke
/// `QuizController::tick` themselves; start/stop calls are counted.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    running: AtomicBool,
    starts: AtomicUsize,
    stops: AtomicUsize,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn stops(&self) -> usize {
        self.stops.load(Ordering::Acquire)
    }
}

impl TickScheduler for ManualScheduler {
    fn start(&self) {
        self.running.store(true, Ordering::Release);
        self.starts.fetch_add(1, Ordering::AcqRel);
    }

    fn stop(&self) {
        self.running.store(false, Ordering::Release);
        self.stops.fetch_add(1, Ordering::AcqRel);
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}
