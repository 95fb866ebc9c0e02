//! Caller-facing inputs: what to animate, how, and how to render it.

use std::fmt;
use std::sync::Arc;

use countup_easing::{Easing, EasingName};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Renders a sampled value for display.
pub type Formatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Zero decimal digits, halves rounded away from zero. Non-finite values
/// print as `NaN`, `Infinity` and `-Infinity`.
pub fn format_default(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    format!("{:.0}", value.round())
}

/// The curve requested by the caller: a resolved curve, or a name looked up
/// once when a session starts.
#[derive(Clone, Debug, PartialEq)]
pub enum EasingChoice {
    Easing(Easing),
    Name(String),
}

impl EasingChoice {
    /// Unknown names fall back to `easeOutExpo`.
    pub fn resolve(&self) -> Easing {
        match self {
            Self::Easing(easing) => easing.clone(),
            Self::Name(name) => EasingName::resolve(name).into(),
        }
    }
}

impl From<Easing> for EasingChoice {
    fn from(easing: Easing) -> Self {
        Self::Easing(easing)
    }
}

impl From<EasingName> for EasingChoice {
    fn from(name: EasingName) -> Self {
        Self::Easing(name.into())
    }
}

impl From<&str> for EasingChoice {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for EasingChoice {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Inputs of a count-up animation.
///
/// Changing any of `start`, `end`, `duration`, `started` or `easing` restarts
/// the animation; swapping only the formatter does not.
#[derive(Clone)]
pub struct CountUpProps {
    pub start: f64,
    pub end: f64,
    /// Total duration in milliseconds.
    pub duration: f64,
    pub started: bool,
    pub easing: Option<EasingChoice>,
    pub formatter: Option<Formatter>,
}

impl CountUpProps {
    /// Props for an animation that has not been started yet.
    pub fn new(start: f64, end: f64, duration: f64) -> Self {
        Self {
            start,
            end,
            duration,
            started: false,
            easing: None,
            formatter: None,
        }
    }

    #[must_use]
    pub fn started(mut self, started: bool) -> Self {
        self.started = started;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: impl Into<EasingChoice>) -> Self {
        self.easing = Some(easing.into());
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.formatter = Some(Arc::new(f));
        self
    }

    /// The curve a new session would use.
    pub fn resolve_easing(&self) -> Easing {
        self.easing
            .as_ref()
            .map(EasingChoice::resolve)
            .unwrap_or_default()
    }

    /// Render `value` with the formatter, or the zero-decimal default.
    pub fn format(&self, value: f64) -> String {
        match &self.formatter {
            Some(f) => f(value),
            None => format_default(value),
        }
    }

    /// Whether moving from `self` to `next` invalidates the running session.
    /// Numbers compare by bit pattern so a NaN input does not restart forever.
    pub(crate) fn restarts(&self, next: &CountUpProps) -> bool {
        self.start.to_bits() != next.start.to_bits()
            || self.end.to_bits() != next.end.to_bits()
            || self.duration.to_bits() != next.duration.to_bits()
            || self.started != next.started
            || self.easing != next.easing
    }
}

impl fmt::Debug for CountUpProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountUpProps")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("duration", &self.duration)
            .field("started", &self.started)
            .field("easing", &self.easing)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// JSON-friendly form of [`CountUpProps`]. Curves are selected by name only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountUpSpec {
    pub start: f64,
    pub end: f64,
    pub duration: f64,
    #[serde(default)]
    pub started: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
}

impl CountUpSpec {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_props(self) -> CountUpProps {
        CountUpProps {
            start: self.start,
            end: self.end,
            duration: self.duration,
            started: self.started,
            easing: self.easing.map(EasingChoice::Name),
            formatter: None,
        }
    }
}

impl From<CountUpSpec> for CountUpProps {
    fn from(spec: CountUpSpec) -> Self {
        spec.into_props()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_has_no_decimals() {
        assert_eq!(format_default(0.0), "0");
        assert_eq!(format_default(41.49), "41");
        assert_eq!(format_default(41.5), "42");
        assert_eq!(format_default(2.5), "3");
        assert_eq!(format_default(-2.5), "-3");
        assert_eq!(format_default(1234.9), "1235");
    }

    #[test]
    fn default_format_spells_out_non_finite_values() {
        assert_eq!(format_default(f64::NAN), "NaN");
        assert_eq!(format_default(f64::INFINITY), "Infinity");
        assert_eq!(format_default(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn formatter_overrides_default() {
        let props = CountUpProps::new(0.0, 1.0, 10.0).with_formatter(|v| format!("{v:.2}%"));
        assert_eq!(props.format(0.5), "0.50%");
        assert_eq!(CountUpProps::new(0.0, 1.0, 10.0).format(0.5), "1");
    }

    #[test]
    fn easing_resolution() {
        let props = CountUpProps::new(0.0, 1.0, 10.0);
        assert_eq!(props.resolve_easing(), Easing::Named(EasingName::EaseOutExpo));
        let props = props.with_easing("easeInCubic");
        assert_eq!(props.resolve_easing(), Easing::Named(EasingName::EaseInCubic));
        let props = props.with_easing("wobble");
        assert_eq!(props.resolve_easing(), Easing::Named(EasingName::EaseOutExpo));
        let props = props.with_easing(countup_easing::ease_in_poly(7.0));
        assert_eq!(props.resolve_easing(), countup_easing::ease_in_poly(7.0));
    }

    #[test]
    fn restart_detection_ignores_formatter() {
        let a = CountUpProps::new(0.0, 100.0, 1000.0).started(true);
        let b = a.clone().with_formatter(|v| v.to_string());
        assert!(!a.restarts(&b));
        assert!(a.restarts(&a.clone().started(false)));
        assert!(a.restarts(&CountUpProps { duration: 500.0, ..a.clone() }));
        assert!(a.restarts(&a.clone().with_easing(EasingName::Linear)));
        let nan = CountUpProps::new(f64::NAN, 1.0, 1.0);
        assert!(!nan.restarts(&nan.clone()));
    }

    #[test]
    fn spec_parses_from_json() {
        let spec = CountUpSpec::from_json(
            r#"{"start": 0, "end": 250, "duration": 1500, "started": true, "easing": "easeOutQuad"}"#,
        )
        .unwrap();
        let props = spec.into_props();
        assert!(props.started);
        assert_eq!(props.end, 250.0);
        assert_eq!(props.resolve_easing(), Easing::Named(EasingName::EaseOutQuad));

        let spec = CountUpSpec::from_json(r#"{"start": 1, "end": 2, "duration": 3}"#).unwrap();
        assert!(!spec.started);
        assert!(spec.easing.is_none());
        assert!(CountUpSpec::from_json(r#"{"start": 1}"#).is_err());
    }
}
