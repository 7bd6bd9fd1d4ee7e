//! Process launcher.
//!
//! Every child the shell starts is placed in a process group of its own, so
//! that the terminal can be handed to it (and taken back) independently of
//! the shell. Redirection targets are opened in the shell before forking, so
//! a bad file name is reported without a child ever existing; exec failures
//! come back through `spawn()`. Either way the child never runs shell code.

use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

use nix::unistd::Pid;

use crate::command::CommandLine;
use crate::error::LaunchError;
use crate::redirect::Redirections;
use crate::signals;

/// A freshly launched child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launched {
    /// Process ID, which is also the process group ID.
    pub pid: Pid,
    /// Program name as typed.
    pub name: String,
}

/// Launch `argv` with the given redirections.
///
/// `argv` must already be free of redirection operators.
pub fn launch(argv: &[String], redirections: &Redirections) -> Result<Launched, LaunchError> {
    let (program, args) = argv.split_first().ok_or(LaunchError::EmptyCommand)?;

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(file) = redirections.open_input()? {
        cmd.stdin(Stdio::from(file));
    }
    if let Some(file) = redirections.open_output()? {
        cmd.stdout(Stdio::from(file));
    }

    // The child leads its own group: pgid = pid.
    cmd.process_group(0);

    // SAFETY: the hook only calls sigaction, which is async-signal-safe, and
    // allocates nothing.
    unsafe {
        cmd.pre_exec(|| {
            signals::restore_default_job_control_signals().map_err(std::io::Error::from)
        });
    }

    let child = cmd.spawn().map_err(|source| LaunchError::Exec {
        program: program.clone(),
        source,
    })?;

    let pid = Pid::from_raw(child.id() as i32);
    tracing::debug!(%pid, program = %program, ?redirections, "launched");

    // Reaping goes through waitpid on the pid; the std handle is not needed.
    drop(child);

    Ok(Launched {
        pid,
        name: program.clone(),
    })
}

/// Launch a parsed command line.
pub fn launch_command(line: &CommandLine) -> Result<Launched, LaunchError> {
    launch(&line.argv, &line.redirections)
}
