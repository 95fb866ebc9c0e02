//! Polynomial easing families of arbitrary integer degree.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::functions::ipow;
use crate::name::EasingName;

/// Which end of the curve is slow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Starts slow, accelerates.
    In,
    /// Starts fast, decelerates.
    Out,
}

/// General polynomial curve `(t/d)^degree`.
///
/// For `Out` curves the sign of the shifted power flips on even degrees so the
/// curve still lands on `b + c` at `t = d` and rises toward it from below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Poly {
    pub direction: Direction,
    pub degree: u64,
}

impl Poly {
    #[inline]
    pub fn new(direction: Direction, degree: u64) -> Self {
        Self { direction, degree }
    }

    pub fn eval(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        let n = self.degree;
        match self.direction {
            Direction::In => {
                let t = t / d;
                (c * ipow(t, n)) + b
            }
            Direction::Out => {
                let x = if n % 2 == 0 { -1.0 } else { 1.0 };
                let t = t / d - 1.0;
                (c * x * (ipow(t, n) + x)) + b
            }
        }
    }
}

/// Resolve a real-valued exponent to a curve. Degrees up to 2 reuse the
/// dedicated linear/quadratic curves; NaN counts as degree <= 1.
fn family(n: f64, direction: Direction) -> Easing {
    if n.is_nan() || n <= 1.0 {
        return EasingName::Linear.into();
    }
    if n <= 2.0 {
        return match direction {
            Direction::In => EasingName::EaseInQuad.into(),
            Direction::Out => EasingName::EaseOutQuad.into(),
        };
    }
    Easing::Poly(Poly::new(direction, degree_of(n)))
}

/// Every f64 at or above 2^53 is an even integer, so clamping to the even
/// value 2^62 keeps the parity of any large exponent (and maps +inf to even).
const MAX_DEGREE: f64 = 4_611_686_018_427_387_904.0;

fn degree_of(n: f64) -> u64 {
    n.round().min(MAX_DEGREE) as u64
}

/// Accelerating polynomial of degree `round(n)`.
pub fn ease_in_poly(n: f64) -> Easing {
    family(n, Direction::In)
}

/// Decelerating polynomial of degree `round(n)`.
pub fn ease_out_poly(n: f64) -> Easing {
    family(n, Direction::Out)
}
