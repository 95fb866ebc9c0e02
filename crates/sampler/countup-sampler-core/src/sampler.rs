//! Sampler: owns the props, at most one live session, and the tick clock.
//!
//! Time only moves when the host calls [`Sampler::update`]. Ticks fire every
//! `tick_interval_ms` of accumulated time, the first one a full interval after
//! the session starts. Prop changes cancel the live session synchronously.

use crate::config::SamplerConfig;
use crate::ids::{IdAllocator, SessionId};
use crate::outputs::{Outputs, Sample, SamplerEvent};
use crate::props::CountUpProps;
use crate::session::{Session, Tick};
use crate::Result;

#[derive(Debug)]
pub struct Sampler {
    props: CountUpProps,
    cfg: SamplerConfig,
    ids: IdAllocator,
    session: Option<Session>,
    /// Last emitted value; held while inactive.
    value: f64,
    /// Time accumulated toward the next tick of the live session.
    pending_ms: f64,
    /// Lifecycle events raised between updates.
    queued: Vec<SamplerEvent>,
    outputs: Outputs,
}

impl Sampler {
    /// Create a sampler with the default 60 Hz cadence. If `props.started`,
    /// the first session begins immediately.
    pub fn new(props: CountUpProps) -> Self {
        Self::build(props, SamplerConfig::default())
    }

    pub fn with_config(props: CountUpProps, cfg: SamplerConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::build(props, cfg))
    }

    fn build(props: CountUpProps, cfg: SamplerConfig) -> Self {
        let mut sampler = Self {
            value: props.start,
            props,
            cfg,
            ids: IdAllocator::new(),
            session: None,
            pending_ms: 0.0,
            queued: Vec::new(),
            outputs: Outputs::default(),
        };
        if sampler.props.started {
            sampler.begin_session();
        }
        sampler
    }

    /// Replace the props. A change to start, end, duration, started or easing
    /// cancels the live session and, if still started, begins a fresh one.
    pub fn set_props(&mut self, props: CountUpProps) {
        let restart = self.props.restarts(&props);
        self.props = props;
        if restart {
            self.cancel_session();
            if self.props.started {
                self.begin_session();
            }
        }
    }

    /// Mark the animation started. Begins a new session unless one is running.
    pub fn start(&mut self) {
        self.props.started = true;
        if !self.is_active() {
            self.begin_session();
        }
    }

    /// Mark the animation stopped and cancel the live session. The current
    /// value is held.
    pub fn stop(&mut self) {
        self.props.started = false;
        self.cancel_session();
    }

    /// Tear down the live session without touching the props. Safe to call
    /// any number of times.
    pub fn cancel(&mut self) {
        self.cancel_session();
    }

    /// Advance simulated time by `dt_ms` and run every tick that falls due.
    pub fn update(&mut self, dt_ms: f64) -> &Outputs {
        self.outputs.clear();
        self.outputs.events.append(&mut self.queued);

        if !dt_ms.is_finite() || dt_ms <= 0.0 {
            if !dt_ms.is_finite() {
                log::warn!("ignoring non-finite time step {dt_ms}");
            }
            return &self.outputs;
        }

        let Some(session) = self.session.as_mut() else {
            return &self.outputs;
        };
        if !session.is_running() {
            return &self.outputs;
        }

        self.pending_ms += dt_ms;
        let interval = session.interval_ms();
        while self.pending_ms >= interval {
            self.pending_ms -= interval;
            match session.tick() {
                Tick::Value { elapsed, value } => {
                    self.value = value;
                    self.outputs.push_sample(Sample {
                        session: session.id(),
                        elapsed,
                        value,
                    });
                }
                Tick::Completed { elapsed, value } => {
                    self.value = value;
                    self.outputs.push_sample(Sample {
                        session: session.id(),
                        elapsed,
                        value,
                    });
                    self.outputs.push_event(SamplerEvent::SessionCompleted {
                        session: session.id(),
                        value,
                    });
                    self.pending_ms = 0.0;
                    break;
                }
                Tick::Idle => break,
            }
        }

        &self.outputs
    }

    /// Outputs of the most recent update.
    #[inline]
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Last emitted value (initially `start`).
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The value rendered through the formatter, or with zero decimals.
    pub fn display(&self) -> String {
        self.props.format(self.value)
    }

    /// Whether a session is currently ticking.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_running)
    }

    /// Id of the most recent session, running or not.
    #[inline]
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(Session::id)
    }

    #[inline]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[inline]
    pub fn props(&self) -> &CountUpProps {
        &self.props
    }

    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.cfg
    }

    fn begin_session(&mut self) {
        let id = self.ids.alloc_session();
        let easing = self.props.resolve_easing();
        log::debug!(
            "{} started: {} -> {} over {} ms with {}",
            id,
            self.props.start,
            self.props.end,
            self.props.duration,
            easing
        );
        self.queued.push(SamplerEvent::SessionStarted {
            session: id,
            easing: easing.to_string(),
        });
        self.session = Some(Session::new(
            id,
            self.props.start,
            self.props.end,
            self.props.duration,
            easing,
            self.cfg.tick_interval_ms,
        ));
        self.pending_ms = 0.0;
    }

    fn cancel_session(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.cancel() {
                self.queued.push(SamplerEvent::SessionCancelled {
                    session: session.id(),
                    elapsed: session.elapsed(),
                });
            }
        }
        self.pending_ms = 0.0;
    }
}
