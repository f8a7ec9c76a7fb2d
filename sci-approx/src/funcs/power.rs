//! Functions related to powers, exponentiation, logarithms and roots.

use crate::consts::{E, EXP_EPSILON, LN_EPSILON, SQRT_ITERATIONS};
use crate::error::{Func, MathError};
use super::miscellaneous::{abs, has_fractional_part};
use tracing::{debug, trace};

/// Raises `base` to a non-negative integer power by repeated multiplication.
///
/// `power(x, 0)` is `1` for every `x`, including `0`.
pub fn power(base: f64, exponent: u32) -> f64 {
    let mut result = 1.0;
    for _ in 0..exponent {
        result *= base;
    }
    result
}

/// The exponential function, `e ^ x`.
///
/// Sums the Taylor series `Σ x^n / n!`, deriving each term from the previous one with
/// `term *= x / n`, until the magnitude of the latest term is at most [`EXP_EPSILON`]. Large
/// arguments converge slowly.
///
/// Negative arguments are answered as `1 / exp(-x)`, since the alternating series cancels away
/// its own precision.
pub fn exp(x: f64) -> f64 {
    if x < 0.0 {
        return 1.0 / exp(-x);
    }

    let mut term = 1.0;
    let mut sum = 1.0;
    let mut n = 1u64;
    loop {
        term *= x / n as f64;
        sum += term;
        if abs(term) <= EXP_EPSILON || !term.is_finite() {
            break;
        }
        n += 1;
    }

    trace!(x, iterations = n, "exp series converged");
    sum
}

/// Evaluates the Taylor series of `ln` centered at 1, `Σ (-1)^(n+1) (x - 1)^n / n`.
///
/// The signed power `(-1)^(n+1) (x - 1)^n` is carried from one iteration to the next. Converges
/// quickly for `x` in `[0.5, 1.5]`.
fn ln_near_one(x: f64) -> f64 {
    let z = x - 1.0;
    let mut signed_power = -1.0;
    let mut sum = 0.0;
    let mut n = 1u32;
    loop {
        signed_power *= -z;
        let term = signed_power / f64::from(n);
        sum += term;
        if abs(term) <= LN_EPSILON {
            break;
        }
        n += 1;
    }

    trace!(x, iterations = n, "ln series converged");
    sum
}

/// The natural logarithm, `ln(x)`.
///
/// The argument is first brought into `[0.5, 1.5]` by dividing (or multiplying) it by `e`,
/// counting the net number of divisions `k`. The result is `k + ln(x / e^k)`, where the second
/// term comes from the series around 1.
///
/// Returns [`MathError::Undefined`] for `0` and [`MathError::Domain`] for negative numbers.
pub fn ln(x: f64) -> Result<f64, MathError> {
    if x == 0.0 {
        debug!("rejected ln(0)");
        return Err(MathError::Undefined { func: Func::Ln, arg: x });
    } else if x < 0.0 {
        debug!(x, "rejected ln of negative number");
        return Err(MathError::Domain { func: Func::Ln, arg: x });
    } else if x.is_nan() || x == f64::INFINITY {
        return Ok(x);
    }

    let mut x = x;
    let mut k = 0i32;
    while x > 1.5 {
        x /= E;
        k += 1;
    }
    while x < 0.5 {
        x *= E;
        k -= 1;
    }

    Ok(f64::from(k) + ln_near_one(x))
}

/// The base 10 logarithm, `ln(x) / ln(10)`.
pub fn log10(x: f64) -> Result<f64, MathError> {
    let ln_x = ln(x).map_err(|err| err.in_func(Func::Log10))?;
    Ok(ln_x / ln(10.0)?)
}

/// Newton-Raphson square root with no input checks. `x` must be positive.
pub(crate) fn newton_sqrt(x: f64) -> f64 {
    let mut guess = x / 2.0;
    for _ in 0..SQRT_ITERATIONS {
        guess = (guess + x / guess) / 2.0;
    }
    guess
}

/// The square root function, `sqrt(x)`.
///
/// Runs exactly [`SQRT_ITERATIONS`] Newton-Raphson steps starting from `x / 2`. `sqrt(0)` is `0`.
///
/// Returns [`MathError::Domain`] for negative numbers.
pub fn sqrt(x: f64) -> Result<f64, MathError> {
    if x < 0.0 {
        debug!(x, "rejected square root of negative number");
        return Err(MathError::Domain { func: Func::Sqrt, arg: x });
    } else if x == 0.0 {
        return Ok(0.0);
    }

    Ok(newton_sqrt(x))
}

/// Raises `base` to a real power, computed as `exp(exponent * ln(base))`.
///
/// Returns [`MathError::Domain`] if `base` is not positive.
pub fn power_real(base: f64, exponent: f64) -> Result<f64, MathError> {
    if base <= 0.0 {
        debug!(base, exponent, "rejected non-positive base");
        return Err(MathError::Domain { func: Func::Pow, arg: base });
    }

    Ok(exp(exponent * ln(base)?))
}

/// Raises `base` to an integral exponent too large to multiply out, taking the magnitude from
/// `exp(n * ln|base|)` and the sign from the parity of `n`.
///
/// Infinite exponents count as even.
fn large_power(base: f64, n: f64) -> Result<f64, MathError> {
    let magnitude = abs(base);
    let value = if magnitude == 1.0 {
        1.0
    } else if magnitude == 0.0 {
        0.0
    } else {
        exp(n * ln(magnitude)?)
    };

    let odd = n.is_finite() && n % 2.0 != 0.0;
    Ok(if base < 0.0 && odd { -value } else { value })
}

/// General power function, `pow(base, exponent)`.
///
/// Exponents with a fractional part go through [`power_real`]. Integral exponents use repeated
/// multiplication, and negative ones are answered as `1 / power(base, -exponent)`. Exponents
/// beyond `u32::MAX` in magnitude, including infinities, skip the multiplication loop. A NaN
/// exponent gives NaN.
///
/// Returns [`MathError::Undefined`] when zero is raised to a negative power.
pub fn pow(base: f64, exponent: f64) -> Result<f64, MathError> {
    if exponent.is_nan() {
        return Ok(f64::NAN);
    } else if exponent.is_finite() && has_fractional_part(exponent) {
        return power_real(base, exponent);
    }

    let n = exponent.trunc();
    if n < 0.0 && base == 0.0 {
        debug!(exponent, "rejected negative power of zero");
        return Err(MathError::Undefined { func: Func::Pow, arg: base });
    } else if abs(n) > u32::MAX as f64 {
        return large_power(base, n);
    }

    if n >= 0.0 {
        Ok(power(base, n as u32))
    } else {
        Ok(1.0 / power(base, (-n) as u32))
    }
}
