//! Easing curves with the `(t, b, c, d)` signature:
//! - `t` elapsed time, `d` total duration (same unit)
//! - `b` start value, `c` total change (`end - start`)
//!
//! None of these clamp `t`; past `d` the curves extrapolate.

/// Plain function pointer form of an easing curve.
pub type EasingFn = fn(f64, f64, f64, f64) -> f64;

/// Degrees above this go through `powf` instead of the multiply loop.
const UNROLLED_MAX_DEGREE: u64 = 16;

/// `t^n` by repeated multiplication, left to right, so that low degrees match
/// the hand-unrolled products below bit for bit. Larger degrees use `powf`,
/// which keeps the sign of odd/even integer powers of negative bases.
#[inline]
pub(crate) fn ipow(t: f64, n: u64) -> f64 {
    if n > UNROLLED_MAX_DEGREE {
        return t.powf(n as f64);
    }
    let mut acc = 1.0;
    for _ in 0..n {
        acc *= t;
    }
    acc
}

/// Constant speed.
#[inline]
pub fn linear(t: f64, b: f64, c: f64, d: f64) -> f64 {
    (c * t / d) + b
}

/// Exponential deceleration. Reaches `b + c` only approximately at `t = d`.
#[inline]
pub fn ease_out_expo(t: f64, b: f64, c: f64, d: f64) -> f64 {
    (c * (-(2f64.powf(-10.0 * t / d)) + 1.0)) + b
}

/// Exponential acceleration. Starts at `b + c / 1024`, not exactly `b`.
#[inline]
pub fn ease_in_expo(t: f64, b: f64, c: f64, d: f64) -> f64 {
    (c * 2f64.powf(10.0 * ((t / d) - 1.0))) + b
}

#[inline]
pub fn ease_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    (-c * t * (t - 2.0)) + b
}

/// Computed as `c * (t * t)` so the polynomial family of the same degree
/// agrees bit for bit; `(c * t) * t` can differ in the last bit.
#[inline]
pub fn ease_in_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    (c * (t * t)) + b
}

#[inline]
pub fn ease_out_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    (c * ((t * t * t) + 1.0)) + b
}

/// Power taken before scaling by `c`, like [`ease_in_quad`].
#[inline]
pub fn ease_in_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    (c * (t * t * t)) + b
}

#[inline]
pub fn ease_out_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    (-c * ((t * t * t * t) - 1.0)) + b
}

/// Power taken before scaling by `c`, like [`ease_in_quad`].
#[inline]
pub fn ease_in_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    (c * (t * t * t * t)) + b
}

#[inline]
pub fn ease_out_quint(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    (c * ((t * t * t * t * t) + 1.0)) + b
}

/// Power taken before scaling by `c`, like [`ease_in_quad`].
#[inline]
pub fn ease_in_quint(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    (c * (t * t * t * t * t)) + b
}
