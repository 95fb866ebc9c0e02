//! Sampler configuration.

use serde::{Deserialize, Serialize};

use crate::error::SamplerError;
use crate::Result;

/// Frame rate the default tick interval is derived from.
pub const DEFAULT_FPS: f64 = 60.0;

/// Smallest accepted tick interval. Bounds the ticks one `update` can run.
pub const MIN_TICK_INTERVAL_MS: f64 = 1.0;

/// Configuration for the tick cadence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Simulated time between ticks, and the amount `elapsed` advances per
    /// tick. Defaults to `round(1000 / 60) = 17` ms.
    pub tick_interval_ms: f64,
}

impl SamplerConfig {
    /// Derive the interval from a frame rate, rounded to whole milliseconds.
    pub fn from_fps(fps: f64) -> Result<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(SamplerError::InvalidFps { fps });
        }
        let cfg = Self {
            tick_interval_ms: (1000.0 / fps).round(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_tick_interval_ms(interval_ms: f64) -> Result<Self> {
        let cfg = Self {
            tick_interval_ms: interval_ms,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// The interval must be finite and at least [`MIN_TICK_INTERVAL_MS`].
    pub fn validate(&self) -> Result<()> {
        if !self.tick_interval_ms.is_finite() || self.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            log::warn!("rejecting tick interval {} ms", self.tick_interval_ms);
            return Err(SamplerError::InvalidTickInterval {
                interval_ms: self.tick_interval_ms,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: (1000.0 / DEFAULT_FPS).round(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sixty_hz_rounded() {
        assert_eq!(SamplerConfig::default().tick_interval_ms, 17.0);
    }

    #[test]
    fn from_fps_rounds_to_whole_ms() {
        assert_eq!(SamplerConfig::from_fps(30.0).unwrap().tick_interval_ms, 33.0);
        assert_eq!(SamplerConfig::from_fps(120.0).unwrap().tick_interval_ms, 8.0);
    }

    #[test]
    fn rejects_bad_rates_and_intervals() {
        assert!(matches!(
            SamplerConfig::from_fps(0.0),
            Err(SamplerError::InvalidFps { .. })
        ));
        assert!(matches!(
            SamplerConfig::from_fps(f64::NAN),
            Err(SamplerError::InvalidFps { .. })
        ));
        // 1000/5000 rounds to zero.
        assert!(matches!(
            SamplerConfig::from_fps(5000.0),
            Err(SamplerError::InvalidTickInterval { .. })
        ));
        assert!(SamplerConfig::with_tick_interval_ms(-1.0).is_err());
        assert!(SamplerConfig::with_tick_interval_ms(f64::INFINITY).is_err());
    }

    #[test]
    fn sub_millisecond_intervals_are_rejected() {
        for interval in [0.5, 0.999, 1e-300, f64::MIN_POSITIVE] {
            assert!(
                matches!(
                    SamplerConfig::with_tick_interval_ms(interval),
                    Err(SamplerError::InvalidTickInterval { .. })
                ),
                "{interval}"
            );
        }
        assert!(SamplerConfig::from_json(r#"{"tick_interval_ms": 1e-300}"#).is_err());
        assert!(SamplerConfig::from_json(r#"{"tick_interval_ms": 0.5}"#).is_err());
        assert_eq!(
            SamplerConfig::with_tick_interval_ms(1.0).unwrap().tick_interval_ms,
            MIN_TICK_INTERVAL_MS
        );
        // 1000/1500 rounds to 1 ms, the smallest accepted interval.
        assert_eq!(SamplerConfig::from_fps(1500.0).unwrap().tick_interval_ms, 1.0);
    }

    #[test]
    fn json_fills_defaults() {
        let cfg = SamplerConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SamplerConfig::default());
        let cfg = SamplerConfig::from_json(r#"{"tick_interval_ms": 10}"#).unwrap();
        assert_eq!(cfg.tick_interval_ms, 10.0);
        assert!(SamplerConfig::from_json(r#"{"tick_interval_ms": 0}"#).is_err());
        assert!(SamplerConfig::from_json("[").is_err());
    }
}
