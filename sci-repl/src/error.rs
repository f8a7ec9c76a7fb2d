use ariadne::{Fmt, Label, Report, ReportKind};
use sci_error::{ErrorKind, EXPR};
use std::{num::ParseFloatError, ops::Range};

/// The menu choice is neither a menu number nor the name of an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidChoice {
    /// Operation names spelled similarly to the choice, if any.
    pub suggestions: Vec<&'static str>,
}

impl ErrorKind for InvalidChoice {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let help = if self.suggestions.is_empty() {
            format!("enter a number from 1 to 16, or an operation name such as {}", "sqrt".fg(EXPR))
        } else if self.suggestions.len() == 1 {
            format!("did you mean the `{}` operation?", self.suggestions[0].fg(EXPR))
        } else {
            format!(
                "did you mean one of these operations? {}",
                self.suggestions
                    .iter()
                    .map(|s| format!("`{}`", s.fg(EXPR)))
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        };

        let mut builder = Report::build(ReportKind::Error, src_id, spans[0].start)
            .with_message("Invalid choice! Please try again.")
            .with_label(Label::new((src_id, spans[0].clone())).with_message("this choice").with_color(EXPR));
        builder.set_help(help);
        builder.finish()
    }
}

/// An operand could not be parsed as a number.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidNumber {
    /// The text that was entered.
    pub text: String,

    /// Why parsing failed.
    pub source: ParseFloatError,
}

impl ErrorKind for InvalidNumber {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, spans[0].start)
            .with_message(format!("`{}` is not a number", self.text))
            .with_label(
                Label::new((src_id, spans[0].clone()))
                    .with_message(&self.source)
                    .with_color(EXPR),
            )
            .finish()
    }
}
