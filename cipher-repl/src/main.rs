//! Simple command line tool to encode, decode, and break Caesar ciphers.
//!
//! Enter a shift (positive to encode, negative to decode) and then the line to code. With
//! `--break`, enter a ciphertext and the most likely shift and plaintext are printed.

mod error;

use clap::Parser;
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use sci_cipher::{CipherConfig, Shift};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cipher-repl")]
#[command(about = "Caesar cipher encoder, decoder and breaker", long_about = None)]
struct Cli {
    /// Guess the shift of each line instead of asking for it
    #[arg(short, long = "break")]
    break_mode: bool,

    /// Reject lines longer than this many characters
    #[arg(long)]
    max_len: Option<usize>,
}

/// Codes `line` with the shift parsed from `shift`.
fn code(config: &CipherConfig, shift: &str, line: &str) -> Result<String, Error> {
    let shift = shift.parse::<Shift>()?;
    Ok(config.encode(line, shift)?)
}

/// Breaks `line`, returning the report to print.
fn crack(config: &CipherConfig, line: &str) -> Result<String, Error> {
    let best = config.break_cipher(line)?;
    Ok(format!("Best shift found: {}\nDecrypted message: {}", best.shift, best.plaintext))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CipherConfig { max_len: cli.max_len };

    // run the repl / interactive mode
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    fn read(rl: &mut DefaultEditor, prompt: &str) -> Result<String, ReadlineError> {
        let input = rl.readline(prompt)?;
        if !input.trim().is_empty() {
            rl.add_history_entry(&input)?;
        }
        Ok(input)
    }

    let process_line = |rl: &mut DefaultEditor| -> Result<(), ReadlineError> {
        let res = if cli.break_mode {
            let line = read(rl, "Enter the encoded message: ")?;
            crack(&config, &line)
        } else {
            let shift = read(rl, "Enter shift value (+ve for Encode, -ve for Decode): ")?;
            let line = read(rl, "Enter the line to be coded: ")?;
            code(&config, &shift, &line).map(|output| format!("OUTPUT: {}", output))
        };

        match res {
            Ok(output) => println!("{}", output),
            Err(e) => eprintln!("{}", e),
        }
        Ok(())
    };

    loop {
        if let Err(err) = process_line(&mut rl) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sci_cipher::CipherError;
    use super::*;

    #[test]
    fn encode_and_decode() {
        let config = CipherConfig::default();
        assert_eq!(code(&config, "3", "Attack"), Ok("Dwwdfn".to_string()));
        assert_eq!(code(&config, "-3", "Dwwdfn"), Ok("Attack".to_string()));
    }

    #[test]
    fn bad_shift() {
        let err = code(&CipherConfig::default(), "three", "Attack").unwrap_err();
        assert!(matches!(err, Error::Shift(_)));
        assert!(err.to_string().starts_with("invalid shift value"));
    }

    #[test]
    fn limit() {
        let config = CipherConfig { max_len: Some(4) };
        assert_eq!(
            code(&config, "1", "Attack"),
            Err(Error::Cipher(CipherError::InputTooLong { len: 6, max: 4 })),
        );
    }

    #[test]
    fn break_report() {
        let report = crack(&CipherConfig::default(), "bvejp jefb").unwrap();
        assert_eq!(report, "Best shift found: 1\nDecrypted message: audio idea");
    }
}
