//! Trigonometric and inverse trigonometric functions. All angles are in radians.

use crate::consts::{FRAC_PI_2, INVERSE_TRIG_EPSILON, TAN_POLE_EPSILON, TAU, TRIG_EPSILON};
use crate::error::{Func, MathError};
use super::miscellaneous::abs;
use super::power::newton_sqrt;
use tracing::{debug, trace};

/// Beyond this magnitude, whole turns are removed with a remainder before the subtraction loop.
const LARGE_ANGLE: f64 = 1e6 * TAU;

/// `sin(π / 4)`. Above this, `arcsin` reflects its argument through `sqrt(1 - x^2)`.
const ARCSIN_REFLECT: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Above this, `arctan` halves its argument's angle before evaluating the series.
const ARCTAN_HALVE: f64 = 0.5;

/// Reduces an angle into `[-2π, 2π]` by repeatedly adding or subtracting `2π`.
///
/// Non-finite angles are returned unchanged.
pub fn normalize_angle(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }

    let mut x = if abs(x) > LARGE_ANGLE { x % TAU } else { x };
    while x > TAU {
        x -= TAU;
    }
    while x < -TAU {
        x += TAU;
    }
    x
}

/// The sine function, `sin(x)`.
///
/// Evaluates `x - x^3/3! + x^5/5! - ...` on the normalized angle, with
/// `term *= -x^2 / ((2n)(2n + 1))`, until the latest term is at most [`TRIG_EPSILON`].
pub fn sin(x: f64) -> f64 {
    let x = normalize_angle(x);
    if !x.is_finite() {
        return f64::NAN;
    }

    let x_sq = x * x;
    let mut term = x;
    let mut sum = x;
    let mut n = 1.0;
    while abs(term) > TRIG_EPSILON {
        term *= -x_sq / ((2.0 * n) * (2.0 * n + 1.0));
        sum += term;
        n += 1.0;
    }

    trace!(x, iterations = n, "sin series converged");
    sum
}

/// The cosine function, `cos(x)`.
///
/// Evaluates `1 - x^2/2! + x^4/4! - ...` on the normalized angle, with
/// `term *= -x^2 / ((2n - 1)(2n))`, until the latest term is at most [`TRIG_EPSILON`].
pub fn cos(x: f64) -> f64 {
    let x = normalize_angle(x);
    if !x.is_finite() {
        return f64::NAN;
    }

    let x_sq = x * x;
    let mut term = 1.0;
    let mut sum = 1.0;
    let mut n = 1.0;
    while abs(term) > TRIG_EPSILON {
        term *= -x_sq / ((2.0 * n - 1.0) * (2.0 * n));
        sum += term;
        n += 1.0;
    }

    trace!(x, iterations = n, "cos series converged");
    sum
}

/// The tangent function, `sin(x) / cos(x)`.
///
/// Returns [`MathError::Undefined`] when `|cos(x)|` is below [`TAN_POLE_EPSILON`], i.e. at odd
/// multiples of `π / 2`.
pub fn tan(x: f64) -> Result<f64, MathError> {
    let angle = normalize_angle(x);
    let c = cos(angle);
    if abs(c) < TAN_POLE_EPSILON {
        debug!(x, "tangent is undefined at this angle");
        return Err(MathError::Undefined { func: Func::Tan, arg: x });
    }
    Ok(sin(angle) / c)
}

/// Maclaurin series of `arcsin`, with `term *= x^2 (2n - 1)^2 / ((2n)(2n + 1))`.
fn arcsin_series(x: f64) -> f64 {
    let x_sq = x * x;
    let mut term = x;
    let mut sum = x;
    let mut n = 1.0;
    while abs(term) > INVERSE_TRIG_EPSILON {
        term *= x_sq * (2.0 * n - 1.0) * (2.0 * n - 1.0) / ((2.0 * n) * (2.0 * n + 1.0));
        sum += term;
        n += 1.0;
    }

    trace!(x, iterations = n, "arcsin series converged");
    sum
}

/// The inverse sine function, `arcsin(x)`.
///
/// For `|x| <= 1/√2` the series is evaluated directly. Closer to `±1` the series converges very
/// slowly, so the identity `arcsin(x) = ±(π/2 - arcsin(sqrt(1 - x^2)))` moves the argument back
/// below `1/√2` first.
///
/// Returns [`MathError::Domain`] if `x` is outside `[-1, 1]`.
pub fn arcsin(x: f64) -> Result<f64, MathError> {
    if !(-1.0..=1.0).contains(&x) {
        debug!(x, "rejected arcsin outside [-1, 1]");
        return Err(MathError::Domain { func: Func::Arcsin, arg: x });
    }

    if abs(x) <= ARCSIN_REFLECT {
        return Ok(arcsin_series(x));
    }

    let complement = 1.0 - x * x;
    let cos_angle = if complement > 0.0 { newton_sqrt(complement) } else { 0.0 };
    let angle = FRAC_PI_2 - arcsin_series(cos_angle);
    Ok(if x < 0.0 { -angle } else { angle })
}

/// The inverse cosine function, `π/2 - arcsin(x)`.
///
/// Returns [`MathError::Domain`] if `x` is outside `[-1, 1]`.
pub fn arccos(x: f64) -> Result<f64, MathError> {
    arcsin(x)
        .map(|angle| FRAC_PI_2 - angle)
        .map_err(|err| err.in_func(Func::Arccos))
}

/// Maclaurin series of `arctan`, with `term *= -x^2 (2n - 1) / (2n + 1)`.
fn arctan_series(x: f64) -> f64 {
    let x_sq = x * x;
    let mut term = x;
    let mut sum = x;
    let mut n = 1.0;
    while abs(term) > INVERSE_TRIG_EPSILON {
        term *= -x_sq * (2.0 * n - 1.0) / (2.0 * n + 1.0);
        sum += term;
        n += 1.0;
    }

    trace!(x, iterations = n, "arctan series converged");
    sum
}

/// The inverse tangent function, `arctan(x)`.
///
/// Arguments with `|x| > 1` are mapped into `[-1, 1]` with `arctan(x) = ±π/2 - arctan(1/x)`
/// (taking the sign of `x`). The series converges too slowly near `±1`, so arguments above
/// `1/2` in magnitude are additionally halved with `arctan(x) = 2 arctan(x / (1 + sqrt(1 + x^2)))`.
pub fn arctan(x: f64) -> f64 {
    if x > 1.0 {
        return FRAC_PI_2 - arctan(1.0 / x);
    } else if x < -1.0 {
        return -FRAC_PI_2 - arctan(1.0 / x);
    }

    if abs(x) > ARCTAN_HALVE {
        return 2.0 * arctan_series(x / (1.0 + newton_sqrt(1.0 + x * x)));
    }
    arctan_series(x)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use crate::consts::PI;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use super::*;

    #[test]
    fn normalize() {
        assert_eq!(normalize_angle(1.0), 1.0);
        assert_eq!(normalize_angle(TAU), TAU);
        assert_abs_diff_eq!(normalize_angle(3.0 * TAU + 1.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_angle(-5.0 * TAU - 0.5), -0.5, epsilon = 1e-12);

        let big = normalize_angle(1e12);
        assert!((-TAU..=TAU).contains(&big));
    }

    #[test]
    fn sine_and_cosine() {
        assert_abs_diff_eq!(sin(0.0), 0.0);
        assert_abs_diff_eq!(sin(FRAC_PI_2), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sin(PI / 6.0), 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(sin(-PI / 6.0), -0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(cos(0.0), 1.0);
        assert_abs_diff_eq!(cos(PI), -1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cos(PI / 3.0), 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(sin(100.0), -0.5063656411097588, epsilon = 1e-8);
        assert!(sin(f64::INFINITY).is_nan());
    }

    #[test]
    fn tangent() {
        assert_abs_diff_eq!(tan(PI / 4.0).unwrap(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(tan(-PI / 4.0).unwrap(), -1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(tan(0.0).unwrap(), 0.0);
        assert_eq!(tan(FRAC_PI_2), Err(MathError::Undefined { func: Func::Tan, arg: FRAC_PI_2 }));
    }

    #[test]
    fn inverse_sine_and_cosine() {
        assert_abs_diff_eq!(arcsin(0.5).unwrap(), PI / 6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(arcsin(1.0).unwrap(), FRAC_PI_2, epsilon = 1e-9);
        assert_abs_diff_eq!(arcsin(-1.0).unwrap(), -FRAC_PI_2, epsilon = 1e-9);
        assert_abs_diff_eq!(arcsin(0.9).unwrap(), 1.1197695149986342, epsilon = 1e-9);
        assert_abs_diff_eq!(arccos(0.5).unwrap(), PI / 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(arccos(-1.0).unwrap(), PI, epsilon = 1e-9);
        assert_eq!(arcsin(1.5), Err(MathError::Domain { func: Func::Arcsin, arg: 1.5 }));
        assert_eq!(arccos(-2.0), Err(MathError::Domain { func: Func::Arccos, arg: -2.0 }));
        assert!(arcsin(f64::NAN).is_err());
    }

    #[test]
    fn inverse_tangent() {
        assert_abs_diff_eq!(arctan(1.0), 0.7853981634, epsilon = 1e-10);
        assert_abs_diff_eq!(arctan(-1.0), -0.7853981634, epsilon = 1e-10);
        assert_abs_diff_eq!(arctan(0.25), 0.24497866312686414, epsilon = 1e-11);
        assert_abs_diff_eq!(arctan(10.0), 1.4711276743037347, epsilon = 1e-10);
        assert_abs_diff_eq!(arctan(-10.0), -1.4711276743037347, epsilon = 1e-10);
        assert_abs_diff_eq!(arctan(f64::INFINITY), FRAC_PI_2);
    }

    proptest! {
        #[test]
        fn pythagorean_identity(x in -1e4f64..1e4) {
            let (s, c) = (sin(x), cos(x));
            prop_assert!((s * s + c * c - 1.0).abs() < 1e-8);
        }

        #[test]
        fn arcsin_inverts_sin(x in -FRAC_PI_2 + 1e-4..FRAC_PI_2 - 1e-4) {
            prop_assert!((arcsin(sin(x)).unwrap() - x).abs() < 1e-6);
        }

        #[test]
        fn arctan_inverts_tan(x in -1.5f64..1.5) {
            prop_assert!((arctan(tan(x).unwrap()) - x).abs() < 1e-6);
        }
    }
}
