//! Well-known easing curve names and their fixed dispatch table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EasingError;
use crate::functions::{self, EasingFn};

/// The eleven curves selectable by name.
///
/// Serialized as the camelCase curve name (`"easeOutExpo"`). Polynomial
/// families are not nameable; build them with [`crate::ease_in_poly`] or
/// [`crate::ease_out_poly`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EasingName {
    Linear,
    #[default]
    EaseOutExpo,
    EaseInExpo,
    EaseOutQuad,
    EaseInQuad,
    EaseOutCubic,
    EaseInCubic,
    EaseOutQuart,
    EaseInQuart,
    EaseOutQuint,
    EaseInQuint,
}

impl EasingName {
    /// Every named curve, in declaration order.
    pub const ALL: [EasingName; 11] = [
        Self::Linear,
        Self::EaseOutExpo,
        Self::EaseInExpo,
        Self::EaseOutQuad,
        Self::EaseInQuad,
        Self::EaseOutCubic,
        Self::EaseInCubic,
        Self::EaseOutQuart,
        Self::EaseInQuart,
        Self::EaseOutQuint,
        Self::EaseInQuint,
    ];

    /// Get the name of this curve
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOutExpo => "easeOutExpo",
            Self::EaseInExpo => "easeInExpo",
            Self::EaseOutQuad => "easeOutQuad",
            Self::EaseInQuad => "easeInQuad",
            Self::EaseOutCubic => "easeOutCubic",
            Self::EaseInCubic => "easeInCubic",
            Self::EaseOutQuart => "easeOutQuart",
            Self::EaseInQuart => "easeInQuart",
            Self::EaseOutQuint => "easeOutQuint",
            Self::EaseInQuint => "easeInQuint",
        }
    }

    /// The function implementing this curve.
    #[inline]
    pub fn function(&self) -> EasingFn {
        match self {
            Self::Linear => functions::linear,
            Self::EaseOutExpo => functions::ease_out_expo,
            Self::EaseInExpo => functions::ease_in_expo,
            Self::EaseOutQuad => functions::ease_out_quad,
            Self::EaseInQuad => functions::ease_in_quad,
            Self::EaseOutCubic => functions::ease_out_cubic,
            Self::EaseInCubic => functions::ease_in_cubic,
            Self::EaseOutQuart => functions::ease_out_quart,
            Self::EaseInQuart => functions::ease_in_quart,
            Self::EaseOutQuint => functions::ease_out_quint,
            Self::EaseInQuint => functions::ease_in_quint,
        }
    }

    /// Lenient lookup: unknown names fall back to the default curve
    /// (`easeOutExpo`) instead of failing.
    pub fn resolve(name: &str) -> Self {
        match name.parse() {
            Ok(found) => found,
            Err(_) => {
                log::warn!(
                    "unknown easing function '{}', falling back to {}",
                    name,
                    Self::default()
                );
                Self::default()
            }
        }
    }
}

impl FromStr for EasingName {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| EasingError::UnknownName { name: s.to_string() })
    }
}

impl fmt::Display for EasingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
