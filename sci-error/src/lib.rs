//! Diagnostics for a single line of calculator input.
//!
//! A failed menu choice or evaluation is shown under the line the user typed, with the offending
//! operands underlined. Each failure type implements [`ErrorKind`] to describe itself; [`Error`]
//! pairs it with the byte ranges to underline and writes the finished report.

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, io::{self, Write}, ops::Range};

/// Color of underlined operands and of names quoted in help text.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// A failure that knows how to describe itself against the input line.
pub trait ErrorKind: Debug + Send {
    /// Builds a report whose labels point into the input line at `spans`.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// A failure together with the parts of the input line it concerns.
#[derive(Debug)]
pub struct Error {
    /// Byte ranges of the input line to underline, usually one per operand.
    pub spans: Vec<Range<usize>>,

    /// What went wrong.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Pairs `kind` with the byte ranges it concerns.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Builds the report without printing it.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report against `input` and writes it to `w`.
    ///
    /// Reports are written to an explicit writer, so sessions can send them to stderr or to a
    /// buffer.
    pub fn write_report(&self, src_id: &str, input: &str, w: impl Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), w)
    }
}

#[cfg(test)]
mod tests {
    use ariadne::{Label, ReportKind};
    use super::*;

    #[derive(Debug)]
    struct NotANumber;

    impl ErrorKind for NotANumber {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans[0].start)
                .with_message("not a number")
                .with_label(Label::new((src_id, spans[0].clone())).with_message("this operand"))
                .finish()
        }
    }

    fn render(err: &Error, input: &str) -> String {
        let mut out = Vec::new();
        err.write_report("input", input, &mut out).unwrap();
        strip_ansi_escapes::strip_str(String::from_utf8(out).unwrap())
    }

    #[test]
    fn report_mentions_message_and_label() {
        let err = Error::new(vec![2..5], NotANumber);
        let rendered = render(&err, "2 abc");
        assert!(rendered.contains("not a number"));
        assert!(rendered.contains("this operand"));
        assert!(rendered.contains("2 abc"));
    }
}
