//! Errors produced by the approximation functions and by operation dispatch.

use ariadne::{Fmt, Label, Report, ReportKind};
use crate::op::Op;
use sci_error::{ErrorKind, EXPR};
use std::{error::Error, fmt::{self, Display, Formatter}, ops::Range};

/// A function that can reject its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Ln,
    Log10,
    Sqrt,
    Pow,
    Tan,
    Arcsin,
    Arccos,
    Div,
}

impl Func {
    /// Human-readable description of the inputs this function accepts, if it is restricted.
    pub fn domain(self) -> Option<&'static str> {
        match self {
            Self::Ln | Self::Log10 => Some("x > 0"),
            Self::Sqrt => Some("x >= 0"),
            Self::Pow => Some("a positive base when the exponent has a fractional part"),
            Self::Arcsin | Self::Arccos => Some("-1 <= x <= 1"),
            Self::Tan | Self::Div => None,
        }
    }

    /// Index of the operand that decides whether this function's input is valid.
    fn operand(self) -> usize {
        match self {
            Self::Div => 1,
            _ => 0,
        }
    }
}

impl Display for Func {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Sqrt => "sqrt",
            Self::Pow => "pow",
            Self::Tan => "tan",
            Self::Arcsin => "arcsin",
            Self::Arccos => "arccos",
            Self::Div => "div",
        };
        write!(f, "{}", name)
    }
}

/// An error returned when a function cannot produce a value for its input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// The argument is outside the domain of the function, e.g. `sqrt(-1)` or `arcsin(2)`.
    Domain { func: Func, arg: f64 },

    /// The function has no value at the argument, e.g. `ln(0)` or `tan(π / 2)`.
    Undefined { func: Func, arg: f64 },

    /// The divisor of a division is zero.
    DivisionByZero,
}

impl MathError {
    /// Returns the same error, attributed to another function.
    ///
    /// Used by functions built on top of others, such as `log10` on top of `ln`, so the error
    /// names the function the caller actually invoked.
    pub fn in_func(self, func: Func) -> Self {
        match self {
            Self::Domain { arg, .. } => Self::Domain { func, arg },
            Self::Undefined { arg, .. } => Self::Undefined { func, arg },
            Self::DivisionByZero => Self::DivisionByZero,
        }
    }

    /// The function that rejected its input.
    pub fn func(&self) -> Func {
        match self {
            Self::Domain { func, .. } | Self::Undefined { func, .. } => *func,
            Self::DivisionByZero => Func::Div,
        }
    }

    fn label(&self) -> String {
        match self {
            Self::Domain { arg, .. } => format!("this operand is {}", arg),
            Self::Undefined { func: Func::Tan, .. } => "this angle".to_string(),
            Self::Undefined { arg, .. } => format!("this operand is {}", arg),
            Self::DivisionByZero => "this divisor is zero".to_string(),
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            Self::Domain { func, .. } => func
                .domain()
                .map(|domain| format!("`{}` is only defined for {}", func.fg(EXPR), domain)),
            Self::Undefined { func: Func::Tan, .. } => {
                Some("the tangent has no value at odd multiples of π/2".to_string())
            },
            Self::Undefined { func: Func::Pow, .. } => {
                Some("raising zero to a negative power divides by zero".to_string())
            },
            Self::Undefined { .. } | Self::DivisionByZero => None,
        }
    }
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain { func: Func::Sqrt, arg } => {
                write!(f, "square root of negative number: {}", arg)
            },
            Self::Domain { func, arg } => write!(f, "invalid input for `{}`: {}", func, arg),
            Self::Undefined { func, arg } => write!(f, "`{}` is not defined at {}", func, arg),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl Error for MathError {}

/// Picks the span of the operand at `index`, falling back to the last span available.
fn operand_span(spans: &[Range<usize>], index: usize) -> Range<usize> {
    spans.get(index).or_else(|| spans.last()).cloned().unwrap_or(0..0)
}

impl ErrorKind for MathError {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let span = operand_span(spans, self.func().operand());
        let mut builder = Report::build(ReportKind::Error, src_id, span.start)
            .with_message(self)
            .with_label(Label::new((src_id, span)).with_message(self.label()).with_color(EXPR));

        if let Some(help) = self.help() {
            builder.set_help(help);
        }
        builder.finish()
    }
}

/// An error returned when evaluating an [`Op`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalError {
    /// Fewer operands were given than the operation takes.
    MissingArgument { op: Op, given: usize },

    /// More operands were given than the operation takes.
    TooManyArguments { op: Op, given: usize },

    /// The operation itself failed.
    Math(MathError),
}

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { op, .. } => write!(f, "missing operand for `{}`", op.name()),
            Self::TooManyArguments { op, .. } => {
                write!(f, "too many operands were given to `{}`", op.name())
            },
            Self::Math(err) => write!(f, "{}", err),
        }
    }
}

impl Error for EvalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Math(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MathError> for EvalError {
    fn from(err: MathError) -> Self {
        Self::Math(err)
    }
}

impl ErrorKind for EvalError {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let (op, given) = match self {
            Self::Math(err) => return err.build_report(src_id, spans),
            Self::MissingArgument { op, given } | Self::TooManyArguments { op, given } => (op, given),
        };

        let expected = op.arity().count();
        let help = format!(
            "`{}` takes {} operand(s); there are {} operand(s) provided here",
            op.name().fg(EXPR),
            expected,
            given,
        );
        let spans: Vec<_> = match self {
            Self::TooManyArguments { .. } => spans.iter().skip(expected).cloned().collect(),
            _ => vec![operand_span(spans, spans.len().saturating_sub(1))],
        };
        let label_msg = match self {
            Self::TooManyArguments { .. } => "unexpected operand",
            _ => "expected another operand after this",
        };
        let start = spans.first().map(|span| span.start).unwrap_or(0);

        let mut builder = Report::build(ReportKind::Error, src_id, start)
            .with_message(self)
            .with_labels(spans.into_iter().map(|span| {
                Label::new((src_id, span)).with_message(label_msg).with_color(EXPR)
            }));
        builder.set_help(help);
        builder.finish()
    }
}
