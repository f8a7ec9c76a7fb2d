//! All functions provided by the library.
//!
//! Series are evaluated by carrying the previous term forward and multiplying it by the ratio
//! between consecutive terms, rather than recomputing powers and factorials on every iteration.
//! The ratios used here determine both how fast each series converges and the precision it can
//! reach.
//!
//! # Example
//!
//! ```
//! use sci_approx::funcs::{power::{exp, ln}, trigonometry::{cos, sin}};
//!
//! let x = 1.25;
//! assert!((ln(exp(x)).unwrap() - x).abs() < 1e-6);
//! assert!((sin(x).powi(2) + cos(x).powi(2) - 1.0).abs() < 1e-8);
//! ```

pub mod arithmetic;
pub mod miscellaneous;
pub mod power;
pub mod trigonometry;

pub use arithmetic::{add, divide, multiply, subtract};
pub use miscellaneous::{abs, factorial, has_fractional_part};
pub use power::{exp, ln, log10, pow, power, power_real, sqrt};
pub use trigonometry::{arccos, arcsin, arctan, cos, normalize_angle, sin, tan};
