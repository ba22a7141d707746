//! treescope CLI binary entry point.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use treescope::cli::run_locate;

/// Locate syntax-tree nodes by kind in a Ruby file and report the
/// module/class/method scopes each match is nested in.
#[derive(Parser)]
#[command(name = "treescope")]
#[command(version, about, long_about = None)]
#[command(after_long_help = "\
Examples:
  Find all assignments in a large file:
    treescope assignment massive_code_file.rb

  Find all method calls:
    treescope call massive_code_file.rb

  Find all method definitions:
    treescope defn massive_code_file.rb

Kinds are tree-sitter-ruby node tags; `defn` is accepted as an alias for
`method` and also matches `def self.` singletons.")]
struct Cli {
    /// Node kind to search for (e.g. assignment, call, defn)
    kind: Option<String>,

    /// Ruby source file to analyze
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing();

    // Missing arguments ask for the manual, not an error.
    let (Some(kind), Some(file)) = (cli.kind, cli.file) else {
        let _ = Cli::command().print_long_help();
        return ExitCode::SUCCESS;
    };

    match run_locate(&kind, &file) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(err.error_code().code())
        }
    }
}

/// Initialize tracing subscriber. Logs go to stderr so stdout stays a
/// clean report.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
