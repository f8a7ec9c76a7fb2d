//! The menu-driven calculator session.
//!
//! A session repeatedly shows the menu, reads a choice, reads the operands for the chosen
//! operation, and prints either `Result: <value>` or a report describing what went wrong. Errors
//! never end the session; only the exit choice or the end of input do.

use crate::error::{InvalidChoice, InvalidNumber};
use crate::fmt::NumberFormat;
use crate::input::Input;
use sci_approx::Op;
use sci_error::Error;
use std::{io::{self, Write}, ops::Range};
use tracing::debug;

/// Menu number of the exit entry, listed after every operation.
pub const EXIT_CHOICE: u8 = 16;

/// What the user picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Op(Op),
    Exit,
}

impl Choice {
    /// Parses a menu number (`1` to `16`) or an operation name such as `sqrt` or `exit`.
    pub fn parse(choice: &str) -> Result<Self, InvalidChoice> {
        if let Ok(number) = choice.parse::<u8>() {
            if number == EXIT_CHOICE {
                return Ok(Self::Exit);
            }
            return Op::from_number(number)
                .map(Self::Op)
                .ok_or_else(|| InvalidChoice { suggestions: Vec::new() });
        }

        if choice.eq_ignore_ascii_case("exit") || choice.eq_ignore_ascii_case("quit") {
            return Ok(Self::Exit);
        }
        Op::from_name(choice)
            .map(Self::Op)
            .ok_or_else(|| InvalidChoice { suggestions: Op::suggestions(choice) })
    }
}

/// Whether the session should keep going.
enum Flow {
    Continue,
    Exit,
}

/// Splits a line of operands on whitespace, returning each operand with its byte range.
fn split_operands(line: &str) -> Vec<(Range<usize>, &str)> {
    let mut operands = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices().chain(std::iter::once((line.len(), ' '))) {
        match (start, c.is_whitespace()) {
            (None, false) => start = Some(i),
            (Some(s), true) => {
                operands.push((s..i, &line[s..i]));
                start = None;
            },
            _ => (),
        }
    }
    operands
}

/// An interactive calculator session writing results to `out` and reports to `err`.
pub struct Session<O, E> {
    out: O,
    err: E,
    format: NumberFormat,
    show_menu: bool,
}

impl<O: Write, E: Write> Session<O, E> {
    /// Creates a session that does not print the menu.
    pub fn new(out: O, err: E, format: NumberFormat) -> Self {
        Self { out, err, format, show_menu: false }
    }

    /// Sets whether the menu is printed before every choice.
    pub fn show_menu(mut self, show_menu: bool) -> Self {
        self.show_menu = show_menu;
        self
    }

    /// Consumes the session, returning its writers.
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Runs the session until the exit choice is made or the input ends.
    pub fn run(&mut self, input: &mut impl Input) -> io::Result<()> {
        loop {
            if self.show_menu {
                self.print_menu()?;
            }
            self.out.flush()?;

            let Some(line) = input.read_line("Enter your choice: ")? else {
                return Ok(());
            };
            if let Flow::Exit = self.choose(&line, input)? {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "========= SCIENTIFIC CALCULATOR =========")?;
        for op in Op::all() {
            writeln!(self.out, "{}", op)?;
        }
        writeln!(self.out, "{:>2}. Exit", EXIT_CHOICE)?;
        writeln!(self.out, "=========================================")
    }

    /// Handles one menu choice, reading the operands from `input` if needed.
    fn choose(&mut self, line: &str, input: &mut impl Input) -> io::Result<Flow> {
        let choice = line.trim();
        if choice.is_empty() {
            return Ok(Flow::Continue);
        }

        match Choice::parse(choice) {
            Ok(Choice::Exit) => {
                writeln!(self.out, "Exiting program. Goodbye!")?;
                Ok(Flow::Exit)
            },
            Ok(Choice::Op(op)) => {
                self.out.flush()?;
                match input.read_line(op.operand_prompt())? {
                    Some(operands) => {
                        self.evaluate(op, &operands)?;
                        Ok(Flow::Continue)
                    },
                    None => Ok(Flow::Exit),
                }
            },
            Err(err) => {
                debug!(choice, "invalid menu choice");
                self.report(Error::new(vec![0..choice.len()], err), choice)?;
                Ok(Flow::Continue)
            },
        }
    }

    /// Parses the operands in `line`, evaluates `op` on them and prints the outcome.
    fn evaluate(&mut self, op: Op, line: &str) -> io::Result<()> {
        let operands = split_operands(line);
        let mut values = Vec::with_capacity(operands.len());
        for (span, text) in &operands {
            match text.parse::<f64>() {
                Ok(value) => values.push(value),
                Err(source) => {
                    let kind = InvalidNumber { text: text.to_string(), source };
                    return self.report(Error::new(vec![span.clone()], kind), line);
                },
            }
        }

        match op.eval(&values) {
            Ok(value) => writeln!(self.out, "Result: {}", self.format.format(value)),
            Err(err) => {
                debug!(op = op.name(), %err, "evaluation failed");
                if operands.is_empty() {
                    // nothing to point at
                    writeln!(self.err, "Error: {}", err)
                } else {
                    let spans = operands.into_iter().map(|(span, _)| span).collect();
                    self.report(Error::new(spans, err), line)
                }
            },
        }
    }

    fn report(&mut self, err: Error, input: &str) -> io::Result<()> {
        err.write_report("input", input, &mut self.err)
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Lines;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Runs a scripted session, returning what was written to `out` and `err`.
    fn run_with(script: &str, show_menu: bool) -> (String, String) {
        let mut session = Session::new(Vec::new(), Vec::new(), NumberFormat::default())
            .show_menu(show_menu);
        session.run(&mut Lines::new(script.as_bytes())).unwrap();

        let (out, err) = session.into_parts();
        (
            String::from_utf8(out).unwrap(),
            strip_ansi_escapes::strip_str(String::from_utf8(err).unwrap()),
        )
    }

    fn run(script: &str) -> (String, String) {
        run_with(script, false)
    }

    #[test]
    fn split() {
        let operands = split_operands("  2  -3.5 ");
        assert_eq!(operands, vec![(2..3, "2"), (5..9, "-3.5")]);
        assert!(split_operands("   ").is_empty());
    }

    #[test]
    fn parse_choices() {
        assert_eq!(Choice::parse("7"), Ok(Choice::Op(Op::Ln)));
        assert_eq!(Choice::parse("arctan"), Ok(Choice::Op(Op::Arctan)));
        assert_eq!(Choice::parse("16"), Ok(Choice::Exit));
        assert_eq!(Choice::parse("Exit"), Ok(Choice::Exit));
        assert_eq!(Choice::parse("0"), Err(InvalidChoice { suggestions: Vec::new() }));
        assert_eq!(Choice::parse("cso"), Err(InvalidChoice { suggestions: vec!["cos"] }));
    }

    #[test]
    fn real_power() {
        let (out, err) = run("5\n2 3.5\n16\n");
        assert_eq!(out, "Result: 11.3137\nExiting program. Goodbye!\n");
        assert_eq!(err, "");
    }

    #[test]
    fn named_operations() {
        let (out, _) = run("arctan\n1\nsqrt\n0\npow\n2 10\n");
        assert_eq!(out, "Result: 0.785398\nResult: 0\nResult: 1024\n");
    }

    #[test]
    fn powers_of_small_bases() {
        let (out, _) = run("5\n0.01 10.5\n5\n-1 1e10\n");
        assert_eq!(out, "Result: 1e-21\nResult: 1\n");
    }

    #[test]
    fn ln_of_negative_number() {
        let (out, err) = run("7\n-1\n");
        assert_eq!(out, "");
        assert!(err.contains("invalid input for `ln`: -1"));
        assert!(err.contains("x > 0"));
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let (out, err) = run("4\n1 0\n1\n2 2\n12\n1.5707963267948966\n3\n3 4\n");
        assert_eq!(out, "Result: 4\nResult: 12\n");
        assert!(err.contains("division by zero"));
        assert!(err.contains("this divisor is zero"));
        assert!(err.contains("`tan` is not defined"));
    }

    #[test]
    fn invalid_choices() {
        let (out, err) = run("17\nsqr\n\n16\n");
        assert_eq!(out, "Exiting program. Goodbye!\n");
        assert_eq!(err.matches("Invalid choice! Please try again.").count(), 2);
        assert!(err.contains("did you mean the `sqrt` operation?"));
    }

    #[test]
    fn bad_operands() {
        let (out, err) = run("6\nabc\n2\n5\n6\n\n13\n0.5 0.5\n");
        assert_eq!(out, "");
        assert!(err.contains("`abc` is not a number"));
        assert!(err.contains("missing operand for `sub`"));
        assert!(err.contains("Error: missing operand for `sqrt`"));
        assert!(err.contains("too many operands were given to `arcsin`"));
    }

    #[test]
    fn menu() {
        let (out, _) = run_with("exit\n", true);
        assert!(out.contains("========= SCIENTIFIC CALCULATOR ========="));
        assert!(out.contains(" 1. Addition (+)\n"));
        assert!(out.contains("15. Arctangent (arctan)\n"));
        assert!(out.contains("16. Exit\n"));
        assert!(out.ends_with("Exiting program. Goodbye!\n"));
    }

    #[test]
    fn end_of_input_while_reading_operands() {
        let (out, err) = run("6\n");
        assert_eq!(out, "");
        assert_eq!(err, "");
    }
}
