//! The operations offered by the calculator menu.
//!
//! Each [`Op`] knows its menu number, its short name, how many operands it takes, and which
//! function in [`crate::funcs`] evaluates it.

use crate::error::{EvalError, MathError};
use crate::funcs::*;
use levenshtein::levenshtein;
use std::fmt::{self, Display, Formatter};

/// The number of operands an [`Op`] takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    /// Returns the number of operands.
    pub fn count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// Lifts infallible function results into the common `Result` shape used by [`Op::eval`].
trait IntoResult {
    fn into_result(self) -> Result<f64, MathError>;
}

impl IntoResult for f64 {
    fn into_result(self) -> Result<f64, MathError> {
        Ok(self)
    }
}

impl IntoResult for Result<f64, MathError> {
    fn into_result(self) -> Result<f64, MathError> {
        self
    }
}

/// Builds the [`Op`] enum and its lookup tables from a single listing.
macro_rules! ops {
    (@call Unary $func:path, $args:ident) => { $func($args[0]).into_result() };
    (@call Binary $func:path, $args:ident) => { $func($args[0], $args[1]).into_result() };
    (
        $(
            $doc:literal,
            $number:literal $variant:ident $name:literal: $label:literal,
            $prompt:literal => $arity:ident $func:path
        ),* $(,)?
    ) => {
        /// An operation that can be chosen from the calculator menu.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Op {
            $(
                #[doc = $doc]
                $variant,
            )*
        }

        impl Op {
            /// Every operation, in menu order.
            const ALL: &'static [Op] = &[$(Op::$variant),*];

            /// Returns the number of this operation in the menu.
            pub fn number(self) -> u8 {
                match self {
                    $(Op::$variant => $number,)*
                }
            }

            /// Returns the short name of this operation, such as `ln`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Op::$variant => $name,)*
                }
            }

            /// Returns the text shown for this operation in the menu.
            pub fn label(self) -> &'static str {
                match self {
                    $(Op::$variant => $label,)*
                }
            }

            /// Returns the prompt used to ask for this operation's operands.
            pub fn operand_prompt(self) -> &'static str {
                match self {
                    $(Op::$variant => $prompt,)*
                }
            }

            /// Returns the number of operands this operation takes.
            pub fn arity(self) -> Arity {
                match self {
                    $(Op::$variant => Arity::$arity,)*
                }
            }

            fn apply(self, args: &[f64]) -> Result<f64, MathError> {
                match self {
                    $(Op::$variant => ops!(@call $arity $func, args),)*
                }
            }
        }
    };
}

ops! {
    "`a + b`.",
    1 Add "add": "Addition (+)", "Enter two numbers: " => Binary add,
    "`a - b`.",
    2 Sub "sub": "Subtraction (-)", "Enter two numbers: " => Binary subtract,
    "`a * b`.",
    3 Mul "mul": "Multiplication (*)", "Enter two numbers: " => Binary multiply,
    "`a / b`, failing if `b` is zero.",
    4 Div "div": "Division (/)", "Enter two numbers: " => Binary divide,
    "`a ^ b`, with integral and fractional exponents handled separately.",
    5 Pow "pow": "Power (a^b)", "Enter base and exponent: " => Binary pow,
    "The square root.",
    6 Sqrt "sqrt": "Square Root (sqrt)", "Enter number: " => Unary sqrt,
    "The natural logarithm.",
    7 Ln "ln": "Natural Logarithm (ln)", "Enter number: " => Unary ln,
    "The base 10 logarithm.",
    8 Log10 "log10": "Logarithm base 10 (log10)", "Enter number: " => Unary log10,
    "The exponential function.",
    9 Exp "exp": "Exponential (e^x)", "Enter power of e: " => Unary exp,
    "The sine of an angle in radians.",
    10 Sin "sin": "Sine (sin)", "Enter angle (radians): " => Unary sin,
    "The cosine of an angle in radians.",
    11 Cos "cos": "Cosine (cos)", "Enter angle (radians): " => Unary cos,
    "The tangent of an angle in radians.",
    12 Tan "tan": "Tangent (tan)", "Enter angle (radians): " => Unary tan,
    "The inverse sine.",
    13 Arcsin "arcsin": "Arcsine (arcsin)", "Enter value (-1 <= x <= 1): " => Unary arcsin,
    "The inverse cosine.",
    14 Arccos "arccos": "Arccosine (arccos)", "Enter value (-1 <= x <= 1): " => Unary arccos,
    "The inverse tangent.",
    15 Arctan "arctan": "Arctangent (arctan)", "Enter value: " => Unary arctan,
}

impl Op {
    /// Returns every operation, in menu order.
    pub fn all() -> &'static [Op] {
        Self::ALL
    }

    /// Looks up an operation by its menu number.
    pub fn from_number(number: u8) -> Option<Op> {
        Self::ALL.iter().copied().find(|op| op.number() == number)
    }

    /// Looks up an operation by its short name, ignoring case.
    pub fn from_name(name: &str) -> Option<Op> {
        Self::ALL.iter().copied().find(|op| op.name().eq_ignore_ascii_case(name))
    }

    /// Returns the names of operations that are spelled similarly to `name`.
    pub fn suggestions(name: &str) -> Vec<&'static str> {
        let name = name.to_ascii_lowercase();
        Self::ALL
            .iter()
            .map(|op| op.name())
            .filter(|candidate| levenshtein(candidate, &name) < 2)
            .collect()
    }

    /// Evaluates the operation on the given operands.
    ///
    /// Returns [`EvalError::MissingArgument`] or [`EvalError::TooManyArguments`] if the number of
    /// operands does not match [`Op::arity`].
    pub fn eval(self, args: &[f64]) -> Result<f64, EvalError> {
        let expected = self.arity().count();
        if args.len() < expected {
            return Err(EvalError::MissingArgument { op: self, given: args.len() });
        } else if args.len() > expected {
            return Err(EvalError::TooManyArguments { op: self, given: args.len() });
        }

        Ok(self.apply(args)?)
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2}. {}", self.number(), self.label())
    }
}
