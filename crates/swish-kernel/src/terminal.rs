//! Terminal foreground control.
//!
//! Exactly one process group receives the terminal's interrupt and suspend
//! keystrokes. The shell hands the terminal to a job's group right before it
//! waits on that job, and takes it back as soon as the wait returns.

use std::io::IsTerminal;
use std::os::fd::AsFd;

use nix::sys::signal::Signal;
use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
use nix::unistd::{self, Pid};

/// How a waited-on process changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitResult {
    /// Exited normally with a status code.
    Exited(i32),
    /// Killed by a signal.
    Signaled(Signal),
    /// Stopped by a signal; still alive.
    Stopped(Signal),
}

/// Block until `pid` stops or terminates.
///
/// Uses `WUNTRACED` so that a stop is reported as its own outcome instead of
/// being mistaken for termination. Interrupted waits are retried.
pub fn wait_for_stop_or_exit(pid: Pid) -> nix::Result<WaitResult> {
    loop {
        match waitpid(pid, Some(WaitPidFlag::WUNTRACED)) {
            Ok(WaitStatus::Exited(_, code)) => return Ok(WaitResult::Exited(code)),
            Ok(WaitStatus::Signaled(_, sig, _)) => return Ok(WaitResult::Signaled(sig)),
            Ok(WaitStatus::Stopped(_, sig)) => return Ok(WaitResult::Stopped(sig)),
            Ok(other) => {
                tracing::trace!(?other, "ignoring wait status");
                continue;
            }
            Err(nix::errno::Errno::EINTR) => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Handle on the controlling terminal of an interactive shell.
#[derive(Debug, Clone)]
pub struct TerminalState {
    /// The shell's own process group.
    shell_pgid: Pid,
}

impl TerminalState {
    /// Take charge of the terminal on standard input.
    ///
    /// Returns `None` when standard input is not a terminal (piped input,
    /// tests); the shell then runs without terminal transfers.
    pub fn acquire() -> Option<Self> {
        if !std::io::stdin().is_terminal() {
            return None;
        }
        let shell_pgid = unistd::getpgrp();
        tracing::debug!(%shell_pgid, "terminal acquired");
        Some(Self { shell_pgid })
    }

    /// Make `pgid` the terminal's foreground process group.
    pub fn give_terminal_to(&self, pgid: Pid) -> nix::Result<()> {
        tracing::debug!(%pgid, "giving terminal to job");
        unistd::tcsetpgrp(std::io::stdin().as_fd(), pgid)
    }

    /// Make the shell the terminal's foreground process group again.
    pub fn reclaim_terminal(&self) -> nix::Result<()> {
        tracing::debug!(pgid = %self.shell_pgid, "reclaiming terminal");
        unistd::tcsetpgrp(std::io::stdin().as_fd(), self.shell_pgid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;

    fn spawn(args: &[&str]) -> Pid {
        let child = Command::new(args[0]).args(&args[1..]).spawn().unwrap();
        Pid::from_raw(child.id() as i32)
    }

    #[test]
    fn test_wait_reports_exit_code() {
        let pid = spawn(&["sh", "-c", "exit 3"]);
        assert_eq!(wait_for_stop_or_exit(pid).unwrap(), WaitResult::Exited(3));
    }

    #[test]
    fn test_wait_reports_signal() {
        let pid = spawn(&["sh", "-c", "kill -KILL $$"]);
        let result = wait_for_stop_or_exit(pid).unwrap();
        assert_eq!(result, WaitResult::Signaled(Signal::SIGKILL));
    }

    #[test]
    fn test_wait_reports_stop() {
        let pid = spawn(&["sh", "-c", "kill -STOP $$"]);
        let result = wait_for_stop_or_exit(pid).unwrap();
        assert_eq!(result, WaitResult::Stopped(Signal::SIGSTOP));

        nix::sys::signal::kill(pid, Signal::SIGKILL).unwrap();
        assert_eq!(
            wait_for_stop_or_exit(pid).unwrap(),
            WaitResult::Signaled(Signal::SIGKILL)
        );
    }

    #[test]
    fn test_wait_on_reaped_child_fails() {
        let pid = spawn(&["true"]);
        wait_for_stop_or_exit(pid).unwrap();
        assert_eq!(wait_for_stop_or_exit(pid), Err(nix::errno::Errno::ECHILD));
    }
}
