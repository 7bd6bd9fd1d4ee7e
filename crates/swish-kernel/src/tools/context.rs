//! Execution context shared by the job controller and the builtins.

use std::path::{Path, PathBuf};

use nix::unistd::Pid;

use crate::error::{JobError, JobResult};
use crate::scheduler::JobTable;
use crate::terminal::TerminalState;

/// Which process group currently holds the terminal foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foreground {
    /// The shell itself.
    Shell,
    /// A job's process group.
    Job(Pid),
}

/// Process-wide shell state, passed by reference into every job operation.
///
/// Owns the job table and the terminal handle, and records which group holds
/// the terminal. The record is kept even when no terminal is attached, so the
/// handoff protocol is the same with and without one.
#[derive(Debug)]
pub struct ShellContext {
    /// Jobs that did not run to completion synchronously.
    pub jobs: JobTable,
    /// Controlling terminal (None when standard input is not a terminal).
    terminal: Option<TerminalState>,
    /// Current foreground holder.
    foreground: Foreground,
    /// Previous working directory (for `cd -`).
    prev_dir: Option<PathBuf>,
}

impl ShellContext {
    /// Create a context without terminal control.
    pub fn new() -> Self {
        Self::with_terminal(None)
    }

    /// Create a context that transfers the given terminal.
    pub fn with_terminal(terminal: Option<TerminalState>) -> Self {
        Self {
            jobs: JobTable::new(),
            terminal,
            foreground: Foreground::Shell,
            prev_dir: None,
        }
    }

    /// Create a context for an interactive shell, using the terminal on
    /// standard input if there is one.
    pub fn interactive() -> Self {
        Self::with_terminal(TerminalState::acquire())
    }

    /// True if terminal transfers are performed.
    pub fn has_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    /// Who holds the terminal foreground.
    pub fn foreground(&self) -> Foreground {
        self.foreground
    }

    /// Previous working directory.
    pub fn prev_dir(&self) -> Option<&Path> {
        self.prev_dir.as_deref()
    }

    /// Remember the directory `cd` is leaving.
    pub fn set_prev_dir(&mut self, dir: Option<PathBuf>) {
        if dir.is_some() {
            self.prev_dir = dir;
        }
    }

    /// Hand the terminal to a job's process group.
    pub(crate) fn grant_foreground(&mut self, pgid: Pid) -> JobResult<()> {
        if let Some(term) = &self.terminal {
            term.give_terminal_to(pgid)
                .map_err(|e| JobError::sys("tcsetpgrp", e))?;
        }
        self.foreground = Foreground::Job(pgid);
        Ok(())
    }

    /// Take the terminal back for the shell.
    pub(crate) fn reclaim_foreground(&mut self) -> JobResult<()> {
        if let Some(term) = &self.terminal
            && let Err(e) = term.reclaim_terminal()
        {
            tracing::warn!("failed to reclaim terminal: {}", e);
            return Err(JobError::sys("tcsetpgrp", e));
        }
        self.foreground = Foreground::Shell;
        Ok(())
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_shell_in_foreground() {
        let ctx = ShellContext::new();
        assert_eq!(ctx.foreground(), Foreground::Shell);
        assert!(!ctx.has_terminal());
        assert!(ctx.jobs.is_empty());
    }

    #[test]
    fn test_grant_and_reclaim_without_terminal() {
        let mut ctx = ShellContext::new();
        let pgid = Pid::from_raw(4321);
        ctx.grant_foreground(pgid).unwrap();
        assert_eq!(ctx.foreground(), Foreground::Job(pgid));
        ctx.reclaim_foreground().unwrap();
        assert_eq!(ctx.foreground(), Foreground::Shell);
    }
}
