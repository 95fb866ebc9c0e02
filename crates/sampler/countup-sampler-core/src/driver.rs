//! Wall-clock driver for a [`Sampler`].
//!
//! The measured time between polls only decides how many ticks are due; each
//! tick still advances the session by the fixed interval.

use std::time::Instant;

use crate::outputs::Outputs;
use crate::sampler::Sampler;

#[derive(Debug)]
pub struct RealtimeDriver {
    sampler: Sampler,
    last_frame: Instant,
}

impl RealtimeDriver {
    pub fn new(sampler: Sampler) -> Self {
        Self::new_at(sampler, Instant::now())
    }

    /// Start measuring from `now`.
    pub fn new_at(sampler: Sampler, now: Instant) -> Self {
        Self {
            sampler,
            last_frame: now,
        }
    }

    /// Feed the time since the previous poll into the sampler.
    pub fn poll(&mut self) -> &Outputs {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> &Outputs {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.sampler.update(dt.as_nanos() as f64 / 1_000_000.0)
    }

    #[inline]
    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    #[inline]
    pub fn sampler_mut(&mut self) -> &mut Sampler {
        &mut self.sampler
    }

    pub fn into_inner(self) -> Sampler {
        self.sampler
    }
}
