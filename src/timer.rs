/// Timer module for countdown sessions.
///
/// `TimerState` is the single source of truth for whether a countdown is
/// active and how far it has progressed. It is purely reactive: the host
/// event loop delivers one tick per second and start/stop commands, and
/// reads back the fraction for rendering and completion detection.
use crate::progress;

#[derive(Debug, Clone)]
pub struct TimerState {
    /// Configured session length, fixed at construction.
    session_secs: u64,
    total_secs: u64,
    elapsed_secs: u64,
    running: bool,
    fraction: f64,
}

impl TimerState {
    pub fn new(session_secs: u64) -> Self {
        Self {
            session_secs,
            total_secs: 0,
            elapsed_secs: 0,
            running: false,
            fraction: 0.0,
        }
    }

    /// Start or stop the countdown.
    ///
    /// Starting always begins a fresh session over the full configured
    /// duration; stopping discards progress and zeroes the displayed
    /// fraction. There is deliberately no pause/resume.
    pub fn toggle_start_stop(&mut self) {
        if self.running {
            self.running = false;
            self.fraction = 0.0;
        } else {
            self.total_secs = self.session_secs;
            self.elapsed_secs = 0;
            self.fraction = progress::fraction(self.elapsed_secs, self.total_secs);
            self.running = true;
        }
    }

    /// Advance the countdown by one second.
    ///
    /// No-op while stopped or once the session is complete. When elapsed
    /// reaches (or overshoots, under scheduling jitter) the total, the
    /// fraction is pinned to exactly 1.0.
    pub fn on_tick(&mut self) {
        if !self.running || self.is_complete() {
            return;
        }
        self.elapsed_secs += 1;
        self.fraction = if self.elapsed_secs >= self.total_secs {
            1.0
        } else {
            progress::fraction(self.elapsed_secs, self.total_secs)
        };
    }

    pub fn current_fraction(&self) -> f64 {
        self.fraction
    }

    pub fn is_complete(&self) -> bool {
        self.fraction == 1.0
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }
}
