//! swish CLI entry point.
//!
//! Usage:
//!   swish                      # Interactive shell
//!   swish --echo               # Interactive shell, echoing each input line
//!   swish -c <command>         # Execute one command line and exit

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use swish_repl::{LineResult, Repl, ReplConfig};

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        None => {
            swish_repl::run(ReplConfig::default())?;
            Ok(ExitCode::SUCCESS)
        }

        Some("--echo") => {
            swish_repl::run(ReplConfig::default().with_echo(true))?;
            Ok(ExitCode::SUCCESS)
        }

        Some("--help" | "-h") => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        Some("--version" | "-V") => {
            println!("swish {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }

        Some("-c") => {
            let cmd = args.get(2).context("-c requires a command argument")?;
            run_command(cmd)
        }

        Some(unknown) => {
            eprintln!("Unknown option: {unknown}");
            eprintln!("Run 'swish --help' for usage.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_help() {
    println!(
        r#"swish v{}

Usage:
  swish                        Interactive shell
  swish --echo                 Interactive shell, echoing input lines
  swish -c <command>           Execute command line and exit

Options:
  --echo                       Print each line after reading it
  -c <command>                 Execute command string and exit
  -h, --help                   Show this help
  -V, --version                Show version

Examples:
  swish                        # Start the shell
  swish -c 'sleep 1'           # Run a command
  printf 'jobs\n' | swish --echo
"#,
        env!("CARGO_PKG_VERSION")
    );
}

/// Execute a single command line and exit with its status.
fn run_command(cmd: &str) -> Result<ExitCode> {
    swish_kernel::signals::ignore_job_control_signals()
        .context("Failed to ignore SIGTTIN/SIGTTOU")?;
    let mut repl = Repl::new(&ReplConfig::default().with_history(None));

    let result = match repl.process_line(cmd) {
        LineResult::Continue(result) => result,
        LineResult::Exit => return Ok(ExitCode::SUCCESS),
    };

    if !result.out.is_empty() {
        print!("{}", result.out);
    }
    if !result.err.is_empty() {
        eprintln!("{}", result.err.trim_end());
    }

    Ok(ExitCode::from(result.code.clamp(0, 255) as u8))
}
