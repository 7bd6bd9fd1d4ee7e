//! swish REPL — the interactive front end.
//!
//! This crate reads command lines and hands them to the kernel. It handles:
//! - `exit` and `help`
//! - Command execution via the Kernel
//! - Command history via rustyline (when standard input is a terminal)
//! - Plain line reading with `--echo` for piped input

use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use swish_kernel::signals::ignore_job_control_signals;
use swish_kernel::{ExecResult, Kernel, KernelConfig};

/// Default prompt.
pub const PROMPT: &str = "@> ";

/// REPL configuration.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt printed before each line.
    pub prompt: String,
    /// Print each line back after reading it.
    pub echo: bool,
    /// Where to keep line-editor history (None disables it).
    pub history: Option<PathBuf>,
    /// Hand the terminal to foreground jobs.
    pub job_control: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: PROMPT.to_string(),
            echo: false,
            history: default_history_path(),
            job_control: true,
        }
    }
}

impl ReplConfig {
    /// Echo input lines.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Use a different prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Use a different history file, or none.
    pub fn with_history(mut self, history: Option<PathBuf>) -> Self {
        self.history = history;
        self
    }

    /// Enable or disable terminal control.
    pub fn with_job_control(mut self, enabled: bool) -> Self {
        self.job_control = enabled;
        self
    }
}

/// `$XDG_DATA_HOME/swish/history.txt`, if a home directory is known.
pub fn default_history_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.data_dir().join("swish").join("history.txt"))
}

/// Result of processing one line.
#[derive(Debug)]
pub enum LineResult {
    /// Keep reading; show this result.
    Continue(ExecResult),
    /// Leave the REPL.
    Exit,
}

/// REPL state.
pub struct Repl {
    kernel: Kernel,
}

impl Repl {
    /// Create a new REPL instance.
    pub fn new(config: &ReplConfig) -> Self {
        let kernel_config = KernelConfig::interactive().with_job_control(config.job_control);
        Self {
            kernel: Kernel::new(kernel_config),
        }
    }

    /// The kernel behind this REPL.
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Process a single line of input.
    pub fn process_line(&mut self, line: &str) -> LineResult {
        let trimmed = line.trim();
        let command = trimmed.split_whitespace().next().unwrap_or("");

        match command {
            "exit" => LineResult::Exit,
            "help" => LineResult::Continue(ExecResult::success(self.help_text())),
            _ => LineResult::Continue(self.kernel.execute(trimmed)),
        }
    }

    fn help_text(&self) -> String {
        let mut text = String::from(HELP_HEADER);
        for schema in self.kernel.tool_schemas() {
            text.push_str(&format!("  {:<20}{}\n", schema.usage, schema.description));
        }
        text.push_str(HELP_FOOTER);
        text
    }
}

const HELP_HEADER: &str = "swish — a small job-control shell

Built-in commands:
  exit                Leave the shell
  help                Show this help
";

const HELP_FOOTER: &str = "
External commands:
  prog args...        Run in the foreground (Ctrl-Z stops it)
  prog args... &      Run in the background
  prog < in           Read standard input from a file
  prog > out          Write standard output to a file (truncate)
  prog >> out         Append standard output to a file
";

/// Print a result the way a shell would: output to stdout, errors to stderr.
fn print_result(result: &ExecResult) {
    if !result.out.is_empty() {
        print!("{}", result.out);
        if let Err(e) = std::io::stdout().flush() {
            tracing::warn!("Failed to flush stdout: {}", e);
        }
    }
    if !result.err.is_empty() {
        if result.err.ends_with('\n') {
            eprint!("{}", result.err);
        } else {
            eprintln!("{}", result.err);
        }
    }
}

/// Save REPL history to disk.
fn save_history(rl: &mut Editor<(), DefaultHistory>, history_path: &Option<PathBuf>) {
    if let Some(path) = history_path {
        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            tracing::warn!("Failed to create history directory: {}", e);
        }
        if let Err(e) = rl.save_history(path) {
            tracing::warn!("Failed to save history: {}", e);
        }
    }
}

/// Run the REPL until `exit` or end of input.
pub fn run(config: ReplConfig) -> Result<()> {
    // The shell must survive touching the terminal from the background.
    ignore_job_control_signals().context("Failed to ignore SIGTTIN/SIGTTOU")?;

    let mut repl = Repl::new(&config);
    tracing::debug!(kernel = repl.kernel().name(), "repl started");

    if std::io::stdin().is_terminal() {
        run_editor(&mut repl, &config)
    } else {
        run_plain(&mut repl, &config)
    }
}

/// Interactive loop with line editing and history.
fn run_editor(repl: &mut Repl, config: &ReplConfig) -> Result<()> {
    let mut rl: Editor<(), DefaultHistory> =
        Editor::new().context("Failed to create editor")?;

    if let Some(ref path) = config.history
        && let Err(e) = rl.load_history(path)
    {
        // Only log if it's not a "file not found" error (expected on first run)
        let is_not_found = matches!(&e, ReadlineError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound);
        if !is_not_found {
            tracing::warn!("Failed to load history: {}", e);
        }
    }

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                if config.echo {
                    println!("{}", line);
                }
                if !line.trim().is_empty()
                    && let Err(e) = rl.add_history_entry(line.as_str())
                {
                    tracing::warn!("Failed to add history entry: {}", e);
                }

                match repl.process_line(&line) {
                    LineResult::Continue(result) => print_result(&result),
                    LineResult::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    save_history(&mut rl, &config.history);
    Ok(())
}

/// Loop over plain lines from standard input.
fn run_plain(repl: &mut Repl, config: &ReplConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    print!("{}", config.prompt);
    stdout.flush().context("Failed to write prompt")?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        if config.echo {
            println!("{}", line);
        }

        match repl.process_line(&line) {
            LineResult::Continue(result) => print_result(&result),
            LineResult::Exit => return Ok(()),
        }

        print!("{}", config.prompt);
        stdout.flush().context("Failed to write prompt")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repl() -> Repl {
        Repl::new(&ReplConfig::default().with_history(None).with_job_control(false))
    }

    #[test]
    fn test_exit() {
        assert!(matches!(repl().process_line("  exit  "), LineResult::Exit));
    }

    #[test]
    fn test_help_lists_job_builtins() {
        let LineResult::Continue(result) = repl().process_line("help") else {
            panic!("help should not exit");
        };
        for name in ["fg <index>...", "bg <index>...", "wait-for <index>", "wait-all", "jobs"] {
            assert!(result.out.contains(name), "help missing {}: {}", name, result.out);
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = ReplConfig::default();
        assert_eq!(config.prompt, "@> ");
        assert!(!config.echo);
        assert!(config.job_control);
        let config = config.with_echo(true).with_prompt("$ ");
        assert!(config.echo);
        assert_eq!(config.prompt, "$ ");
    }
}
