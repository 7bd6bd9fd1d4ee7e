//! Signal dispositions for job control.
//!
//! The shell ignores `SIGTTIN` and `SIGTTOU` for its whole life, so that
//! touching the terminal while a child group holds the foreground does not
//! stop the shell itself. Ignored dispositions survive `exec`, so every child
//! puts them back to default before it replaces its image.

use nix::sys::signal::{self, SigHandler, Signal};

/// The terminal-driven stop signals the shell ignores.
pub const JOB_CONTROL_SIGNALS: [Signal; 2] = [Signal::SIGTTIN, Signal::SIGTTOU];

/// Ignore the terminal stop signals in the shell process.
pub fn ignore_job_control_signals() -> nix::Result<()> {
    set_disposition(SigHandler::SigIgn)
}

/// Restore default dispositions.
///
/// Runs in the child between fork and exec, so it sticks to `sigaction`,
/// which is async-signal-safe.
pub fn restore_default_job_control_signals() -> nix::Result<()> {
    set_disposition(SigHandler::SigDfl)
}

fn set_disposition(handler: SigHandler) -> nix::Result<()> {
    for sig in JOB_CONTROL_SIGNALS {
        // SAFETY: SigIgn and SigDfl install no Rust handler code.
        unsafe { signal::signal(sig, handler) }?;
    }
    Ok(())
}
