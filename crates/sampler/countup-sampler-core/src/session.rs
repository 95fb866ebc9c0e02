//! One activation of a count-up animation.
//!
//! A session owns its elapsed-time counter and curve. Only [`Session::tick`]
//! advances it; once completed or cancelled it never emits again.

use countup_easing::Easing;
use serde::{Deserialize, Serialize};

use crate::ids::SessionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Running,
    Completed,
    Cancelled,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// An eased value computed at `elapsed`.
    Value { elapsed: f64, value: f64 },
    /// Duration reached; the value is exactly the end value.
    Completed { elapsed: f64, value: f64 },
    /// Session is no longer running.
    Idle,
}

#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    start: f64,
    end: f64,
    change: f64,
    duration: f64,
    interval_ms: f64,
    elapsed: f64,
    easing: Easing,
    current: f64,
    state: SessionState,
}

impl Session {
    /// A running session at `elapsed = 0`. The curve is fixed for its lifetime.
    pub fn new(
        id: SessionId,
        start: f64,
        end: f64,
        duration: f64,
        easing: Easing,
        interval_ms: f64,
    ) -> Self {
        Self {
            id,
            start,
            end,
            change: end - start,
            duration,
            interval_ms,
            elapsed: 0.0,
            easing,
            current: start,
            state: SessionState::Running,
        }
    }

    /// Run one step: jump to `end` once the duration is reached, otherwise
    /// evaluate the curve and advance `elapsed` by the fixed interval.
    pub fn tick(&mut self) -> Tick {
        if self.state != SessionState::Running {
            return Tick::Idle;
        }

        // A NaN duration can never be reached by comparison; treat it as spent.
        if self.duration.is_nan() || self.elapsed >= self.duration {
            self.current = self.end;
            self.state = SessionState::Completed;
            log::debug!(
                "{} completed at {} ms with {}",
                self.id,
                self.elapsed,
                self.end
            );
            return Tick::Completed {
                elapsed: self.elapsed,
                value: self.end,
            };
        }

        let elapsed = self.elapsed;
        let value = self
            .easing
            .eval(elapsed, self.start, self.change, self.duration);
        self.current = value;
        self.elapsed += self.interval_ms;
        log::trace!("{} tick at {} ms -> {}", self.id, elapsed, value);
        Tick::Value { elapsed, value }
    }

    /// Stop the session. Returns `true` only for the call that actually
    /// cancelled it; later calls and calls after completion are no-ops.
    pub fn cancel(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        self.state = SessionState::Cancelled;
        log::debug!("{} cancelled at {} ms", self.id, self.elapsed);
        true
    }

    #[inline]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    #[inline]
    pub fn easing(&self) -> &Easing {
        &self.easing
    }

    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countup_easing::EasingName;

    fn linear_session(duration: f64) -> Session {
        Session::new(
            SessionId(0),
            0.0,
            100.0,
            duration,
            EasingName::Linear.into(),
            17.0,
        )
    }

    #[test]
    fn ticks_advance_by_fixed_interval() {
        let mut s = linear_session(100.0);
        assert_eq!(
            s.tick(),
            Tick::Value {
                elapsed: 0.0,
                value: 0.0
            }
        );
        assert_eq!(
            s.tick(),
            Tick::Value {
                elapsed: 17.0,
                value: 17.0
            }
        );
        assert_eq!(s.elapsed(), 34.0);
    }

    #[test]
    fn completes_with_exact_end_then_goes_idle() {
        let mut s = linear_session(100.0);
        let mut values = Vec::new();
        loop {
            match s.tick() {
                Tick::Value { value, .. } => values.push(value),
                Tick::Completed { elapsed, value } => {
                    assert_eq!(elapsed, 102.0);
                    assert_eq!(value, 100.0);
                    break;
                }
                Tick::Idle => panic!("went idle before completing"),
            }
        }
        // 0, 17, 34, 51, 68, 85
        assert_eq!(values.len(), 6);
        assert_eq!(s.state(), SessionState::Completed);
        assert_eq!(s.current(), 100.0);
        assert_eq!(s.tick(), Tick::Idle);
    }

    #[test]
    fn zero_duration_jumps_straight_to_end() {
        let mut s = linear_session(0.0);
        assert_eq!(
            s.tick(),
            Tick::Completed {
                elapsed: 0.0,
                value: 100.0
            }
        );
    }

    #[test]
    fn negative_and_nan_durations_end_immediately() {
        assert!(matches!(linear_session(-5.0).tick(), Tick::Completed { .. }));
        assert!(matches!(linear_session(f64::NAN).tick(), Tick::Completed { .. }));
    }

    #[test]
    fn cancel_is_idempotent_and_final() {
        let mut s = linear_session(100.0);
        s.tick();
        assert!(s.cancel());
        assert!(!s.cancel());
        assert_eq!(s.tick(), Tick::Idle);
        assert_eq!(s.state(), SessionState::Cancelled);
        assert_eq!(s.current(), 0.0);
    }

    #[test]
    fn cancel_after_completion_is_a_no_op() {
        let mut s = linear_session(0.0);
        s.tick();
        assert!(!s.cancel());
        assert_eq!(s.state(), SessionState::Completed);
    }
}
