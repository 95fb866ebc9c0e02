//! countup sampler core
//!
//! Drives a [`countup_easing::Easing`] curve at a fixed cadence and exposes
//! the latest value, ready for display. The host owns time: it calls
//! [`Sampler::update`] with the milliseconds elapsed since the last call (or
//! uses [`RealtimeDriver`] to measure them) and re-renders from the returned
//! [`Outputs`].
//!
//! ```
//! use countup_sampler::{CountUpProps, Sampler};
//!
//! let mut sampler = Sampler::new(CountUpProps::new(0.0, 100.0, 100.0).started(true));
//! for _ in 0..10 {
//!     sampler.update(17.0);
//! }
//! assert_eq!(sampler.display(), "100");
//! assert!(!sampler.is_active());
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod ids;
pub mod outputs;
pub mod props;
pub mod sampler;
pub mod session;

pub use config::{SamplerConfig, DEFAULT_FPS};
pub use driver::RealtimeDriver;
pub use error::SamplerError;
pub use ids::SessionId;
pub use outputs::{Outputs, Sample, SamplerEvent};
pub use props::{format_default, CountUpProps, CountUpSpec, EasingChoice, Formatter};
pub use sampler::Sampler;
pub use session::{Session, SessionState, Tick};

pub use countup_easing::{Easing, EasingName};

/// Sampler result type
pub type Result<T> = core::result::Result<T, SamplerError>;
