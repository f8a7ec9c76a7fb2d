//! Menu-driven scientific calculator.
//!
//! Pick an operation by its menu number or name (`5` or `pow`), then enter its operands on one
//! line, e.g. `2 3.5`. Every function is computed from series expansions and Newton-Raphson
//! iteration rather than the platform math library.

mod error;
mod fmt;
mod input;
mod session;

use clap::Parser;
use fmt::NumberFormat;
use input::{Input, Lines};
use session::Session;
use std::{fs::File, io::{self, BufReader, IsTerminal}, path::PathBuf, process::ExitCode};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sci-repl")]
#[command(about = "Scientific calculator built on series approximations", long_about = None)]
struct Cli {
    /// Script of menu choices and operands to run instead of reading from the terminal
    script: Option<PathBuf>,

    /// Significant digits to print results with; 0 prints every digit
    #[arg(short, long, default_value_t = 6)]
    precision: usize,
}

/// Runs a session over `input`, printing the menu if the input is interactive.
fn run(input: &mut impl Input, format: NumberFormat, show_menu: bool) -> io::Result<()> {
    Session::new(io::stdout(), io::stderr(), format)
        .show_menu(show_menu)
        .run(input)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let format = NumberFormat::with_precision(cli.precision);

    let res = if let Some(script) = cli.script {
        // run script file
        File::open(&script)
            .and_then(|file| run(&mut Lines::new(BufReader::new(file)), format, false))
            .map_err(|err| {
                error!(script = %script.display(), "cannot run script");
                err
            })
    } else if !io::stdin().is_terminal() {
        // read choices from stdin
        run(&mut Lines::new(io::stdin().lock()), format, false)
    } else {
        // run the repl / interactive mode
        input::editor().and_then(|mut rl| run(&mut rl, format, true))
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}
