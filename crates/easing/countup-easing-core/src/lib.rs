//! countup easing core
//!
//! Pure easing curves with the `(t, b, c, d)` signature used by count-up style
//! animations: `t` elapsed time, `b` start value, `c` total change
//! (`end - start`), `d` duration. Curves are stateless and never clamp `t`.
//!
//! - [`functions`]: the eleven named curves as plain functions.
//! - [`EasingName`]: fixed name -> function table with lenient resolution.
//! - [`ease_in_poly`] / [`ease_out_poly`]: polynomial families of any degree.
//! - [`Easing`]: a single handle over all of the above plus custom closures.

pub mod easing;
pub mod error;
pub mod functions;
pub mod name;
pub mod poly;

pub use easing::{CustomEasing, Easing};
pub use error::EasingError;
pub use functions::{
    ease_in_cubic, ease_in_expo, ease_in_quad, ease_in_quart, ease_in_quint, ease_out_cubic,
    ease_out_expo, ease_out_quad, ease_out_quart, ease_out_quint, linear, EasingFn,
};
pub use name::EasingName;
pub use poly::{ease_in_poly, ease_out_poly, Direction, Poly};
