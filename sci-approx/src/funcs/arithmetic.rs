//! The four basic operations offered by the calculator menu.

use crate::error::MathError;
use tracing::debug;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`. Returns [`MathError::DivisionByZero`] if `b` is zero.
pub fn divide(a: f64, b: f64) -> Result<f64, MathError> {
    if b == 0.0 {
        debug!(dividend = a, "rejected division by zero");
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}
