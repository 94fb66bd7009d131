use std::time::Duration;

/// Length of one quiz attempt.
pub const TIME_LIMIT_SECS: u32 = 300;

/// Wall-clock period between two timer ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Countdown bookkeeping for one attempt.
///
/// `elapsed_secs` only grows while the timer runs; `expired` latches until
/// [`TimerState::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerState {
    elapsed_secs: u32,
    running: bool,
    expired: bool,
}

impl TimerState {
    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Restart from zero and run.
    pub fn start(&mut self) {
        self.elapsed_secs = 0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn expire(&mut self) {
        self.expired = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count one second. Returns `true` only on the tick that reaches the
    /// limit; a stopped or already expired timer does not move.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.expired {
            return false;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        if self.elapsed_secs >= TIME_LIMIT_SECS {
            self.expired = true;
            return true;
        }
        false
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        remaining_secs(self.elapsed_secs)
    }
}

/// Seconds left before the limit. Anything past the limit counts as exactly
/// at the limit.
#[must_use]
pub fn remaining_secs(elapsed_secs: u32) -> u32 {
    TIME_LIMIT_SECS.saturating_sub(elapsed_secs)
}

/// Remaining time as `MM:SS`.
#[must_use]
pub fn format_remaining(elapsed_secs: u32) -> String {
    let remaining = remaining_secs(elapsed_secs);
    let minutes = remaining / 60;
    let seconds = remaining % 60;
    format!("{minutes:02}:{seconds:02}")
}
