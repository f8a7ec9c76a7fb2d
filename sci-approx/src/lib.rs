//! Elementary and transcendental functions computed from first principles.
//!
//! Every function in [`funcs`] is built from plain arithmetic: Taylor series evaluated with a
//! term-ratio recurrence (each term is derived from the previous one by multiplying with a
//! closed-form ratio), Newton-Raphson iteration, and domain reduction to keep the series in their
//! fast-converging range. None of them call into the platform's `libm`.
//!
//! Functions that have a restricted domain return a [`MathError`] instead of a sentinel value, so
//! callers can decide what to do with the failure.
//!
//! # Example
//!
//! ```
//! use sci_approx::funcs::{power::power_real, trigonometry::arctan};
//!
//! let x = power_real(2.0, 3.5).unwrap();
//! assert!((x - 11.3137).abs() < 1e-4);
//! assert!((arctan(1.0) - 0.7853981634).abs() < 1e-9);
//! ```
//!
//! The calculator operations exposed by the REPL are listed in [`op::Op`].

pub mod consts;
pub mod error;
pub mod funcs;
pub mod op;

pub use error::{EvalError, Func, MathError};
pub use op::{Arity, Op};
