//! Constants used in the library.
//!
//! The thresholds below decide when a series is considered converged: iteration stops once the
//! magnitude of the latest term is at or below the threshold.

/// Euler's number.
pub const E: f64 = std::f64::consts::E;

pub const PI: f64 = std::f64::consts::PI;

pub const FRAC_PI_2: f64 = PI / 2.0;

/// One full turn, `2π`.
pub const TAU: f64 = 2.0 * PI;

/// Distance from the truncated value above which a number is considered to have a fractional
/// part. Large enough to absorb representation error such as `3.0000000001`.
pub const FRACTION_EPSILON: f64 = 1e-9;

/// Convergence threshold of the `ln` series around 1.
pub const LN_EPSILON: f64 = 1e-10;

/// Convergence threshold of the `exp` series.
pub const EXP_EPSILON: f64 = 1e-12;

/// Convergence threshold of the `sin` and `cos` series.
pub const TRIG_EPSILON: f64 = 1e-10;

/// Convergence threshold of the `arcsin` and `arctan` series.
pub const INVERSE_TRIG_EPSILON: f64 = 1e-12;

/// `tan` is reported as undefined when `|cos(x)|` is below this value.
pub const TAN_POLE_EPSILON: f64 = 1e-12;

/// Number of Newton-Raphson steps taken by `sqrt`.
pub const SQRT_ITERATIONS: usize = 100;
