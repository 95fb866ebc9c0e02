//! Output contracts from the sampler.
//!
//! Each `Sampler::update` returns the values emitted by the ticks that fell
//! due during that update, plus lifecycle events. Hosts re-render from the
//! samples and may log or forward the events.

use serde::{Deserialize, Serialize};

use crate::ids::SessionId;

/// One emitted value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub session: SessionId,
    /// Session time the value was computed for, in ms.
    pub elapsed: f64,
    pub value: f64,
}

/// Discrete lifecycle signals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SamplerEvent {
    SessionStarted {
        session: SessionId,
        easing: String,
    },
    /// The session reached its duration and emitted exactly `value` (= end).
    SessionCompleted {
        session: SessionId,
        value: f64,
    },
    SessionCancelled {
        session: SessionId,
        elapsed: f64,
    },
}

/// Outputs returned by Sampler::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub samples: Vec<Sample>,
    #[serde(default)]
    pub events: Vec<SamplerEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.samples.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_sample(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    #[inline]
    pub fn push_event(&mut self, event: SamplerEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty() && self.events.is_empty()
    }

    /// Most recent value emitted during this update, if any.
    #[inline]
    pub fn last_value(&self) -> Option<f64> {
        self.samples.last().map(|s| s.value)
    }
}
