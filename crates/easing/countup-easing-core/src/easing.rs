//! `Easing`: one handle over named, polynomial and caller-supplied curves.

use std::fmt;
use std::sync::Arc;

use crate::name::EasingName;
use crate::poly::Poly;

/// Caller-supplied curve with the `(t, b, c, d)` signature.
///
/// Equality is identity: two handles are equal only when they share the same
/// underlying closure.
#[derive(Clone)]
pub struct CustomEasing(Arc<dyn Fn(f64, f64, f64, f64) -> f64 + Send + Sync>);

impl CustomEasing {
    pub fn new(f: impl Fn(f64, f64, f64, f64) -> f64 + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn call(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        (self.0)(t, b, c, d)
    }
}

impl PartialEq for CustomEasing {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CustomEasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CustomEasing")
            .field(&Arc::as_ptr(&self.0))
            .finish()
    }
}

/// A resolved easing curve.
#[derive(Clone, Debug, PartialEq)]
pub enum Easing {
    Named(EasingName),
    Poly(Poly),
    Custom(CustomEasing),
}

impl Easing {
    /// Wrap a closure or function as a curve.
    pub fn custom(f: impl Fn(f64, f64, f64, f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(CustomEasing::new(f))
    }

    /// Evaluate at elapsed time `t` for start `b`, change `c` and duration `d`.
    #[inline]
    pub fn eval(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        match self {
            Self::Named(name) => (name.function())(t, b, c, d),
            Self::Poly(poly) => poly.eval(t, b, c, d),
            Self::Custom(custom) => custom.call(t, b, c, d),
        }
    }

    /// Evaluate on the unit interval: progress `p` in, eased progress out.
    #[inline]
    pub fn progress(&self, p: f64) -> f64 {
        self.eval(p, 0.0, 1.0, 1.0)
    }

    /// The registered name, for named curves only.
    pub fn name(&self) -> Option<EasingName> {
        match self {
            Self::Named(name) => Some(*name),
            _ => None,
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::Named(EasingName::default())
    }
}

impl From<EasingName> for Easing {
    #[inline]
    fn from(name: EasingName) -> Self {
        Self::Named(name)
    }
}

impl From<Poly> for Easing {
    #[inline]
    fn from(poly: Poly) -> Self {
        Self::Poly(poly)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Poly(poly) => write!(f, "poly({:?}, {})", poly.direction, poly.degree),
            Self::Custom(_) => f.write_str("custom"),
        }
    }
}
