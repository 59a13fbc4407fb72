//! Run/pause/reset lifecycle and fixed-rate tick pacing.
//!
//! The clock never schedules anything itself. A host (the Bevy app, a test)
//! reports elapsed frame time through [`TickPacer::ticks_for`] and gets back
//! how many logical ticks are due. Dropping the accumulated time is how a
//! pause or reset cancels ticks that were already "scheduled".

use std::fmt;
use std::time::Duration;

use bevy::log::warn;

use crate::constants::{MAX_TICKS_PER_FRAME, TICK_RATE};

/// Lifecycle state of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClockState {
    /// Not started yet, or reset back to the snapshot.
    #[default]
    Idle,
    /// Ticks are applied.
    Running,
    /// Frozen mid-run; resuming continues exactly where it stopped.
    Paused,
}

impl ClockState {
    pub fn is_running(self) -> bool {
        self == ClockState::Running
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClockState::Idle => "idle",
            ClockState::Running => "running",
            ClockState::Paused => "paused",
        };
        f.write_str(label)
    }
}

/// Converts variable host frame times into a whole number of fixed ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct TickPacer {
    period: Duration,
    max_per_frame: u32,
    accumulated: Duration,
}

impl Default for TickPacer {
    fn default() -> Self {
        Self::new(TICK_RATE)
    }
}

impl TickPacer {
    /// A pacer for `rate` ticks per second.
    ///
    /// A rate whose period is not a representable `Duration` (zero,
    /// negative, NaN, or so small the period overflows) falls back to
    /// [`TICK_RATE`].
    pub fn new(rate: f32) -> Self {
        let period = match Duration::try_from_secs_f32(1.0 / rate) {
            Ok(period) if !period.is_zero() => period,
            _ => {
                warn!("tick rate {} is unusable; pacing at {}", rate, TICK_RATE);
                Duration::from_secs_f32(1.0 / TICK_RATE)
            }
        };
        Self {
            period,
            max_per_frame: MAX_TICKS_PER_FRAME,
            accumulated: Duration::ZERO,
        }
    }

    pub fn with_max_per_frame(mut self, max_per_frame: u32) -> Self {
        self.max_per_frame = max_per_frame;
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Add `elapsed` and return how many ticks are now due.
    ///
    /// At most `max_per_frame` ticks are returned; if more were due the rest
    /// of the backlog is discarded rather than carried into the next frame.
    pub fn ticks_for(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.period && due < self.max_per_frame {
            self.accumulated -= self.period;
            due += 1;
        }
        if self.accumulated >= self.period {
            self.accumulated = Duration::ZERO;
        }
        due
    }

    /// Forget any partially accumulated time.
    pub fn cancel(&mut self) {
        self.accumulated = Duration::ZERO;
    }

    pub fn pending(&self) -> Duration {
        self.accumulated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_period_yields_one_tick() {
        let mut pacer = TickPacer::new(30.0);
        let period = pacer.period();
        assert_eq!(pacer.ticks_for(period), 1);
        assert_eq!(pacer.pending(), Duration::ZERO);
    }

    #[test]
    fn fast_frames_accumulate_into_ticks() {
        let mut pacer = TickPacer::new(30.0);
        let half = pacer.period() / 2;
        assert_eq!(pacer.ticks_for(half), 0);
        assert_eq!(pacer.ticks_for(pacer.period() - half), 1);
    }

    #[test]
    fn backlog_is_capped_and_dropped() {
        let mut pacer = TickPacer::new(30.0).with_max_per_frame(3);
        assert_eq!(pacer.ticks_for(Duration::from_secs(2)), 3);
        assert_eq!(pacer.pending(), Duration::ZERO);
        assert_eq!(pacer.ticks_for(Duration::ZERO), 0);
    }

    #[test]
    fn cancel_discards_partial_time() {
        let mut pacer = TickPacer::new(30.0);
        let almost = pacer.period() - Duration::from_micros(1);
        pacer.ticks_for(almost);
        pacer.cancel();
        assert_eq!(pacer.ticks_for(Duration::from_micros(2)), 0);
    }

    #[test]
    fn unusable_rate_falls_back_to_default() {
        assert_eq!(TickPacer::new(0.0).period(), TickPacer::default().period());
        assert_eq!(TickPacer::new(f32::NAN).period(), TickPacer::default().period());
        assert_eq!(TickPacer::new(-5.0).period(), TickPacer::default().period());
    }

    #[test]
    fn vanishing_rate_falls_back_instead_of_overflowing() {
        assert_eq!(TickPacer::new(1e-20).period(), TickPacer::default().period());
        let subnormal = f32::from_bits(1);
        assert_eq!(TickPacer::new(subnormal).period(), TickPacer::default().period());
    }

    #[test]
    fn default_state_is_idle() {
        assert_eq!(ClockState::default(), ClockState::Idle);
        assert!(!ClockState::Paused.is_running());
        assert_eq!(ClockState::Running.to_string(), "running");
    }
}
