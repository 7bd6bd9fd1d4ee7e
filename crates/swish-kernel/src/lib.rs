//! swish-kernel: the job-control core of swish.
//!
//! This crate provides:
//!
//! - **Scheduler**: job table, process launcher, and the job lifecycle
//!   controller (foreground/background runs, `fg`, `bg`, waits)
//! - **Terminal**: handing the terminal foreground to job process groups and
//!   taking it back
//! - **Redirect**: `<`, `>`, `>>` parsing and file opening
//! - **Tools**: the `Tool` trait, `ShellContext`, and builtin commands
//! - **Kernel**: line-level dispatch tying it all together

pub mod command;
pub mod error;
pub mod kernel;
pub mod redirect;
pub mod scheduler;
pub mod signals;
pub mod terminal;
pub mod tools;

pub use command::{CommandLine, tokenize};
pub use error::{JobError, JobResult, LaunchError};
pub use kernel::{Kernel, KernelConfig};
pub use redirect::{OutputMode, Redirections};
pub use scheduler::{JobId, JobInfo, JobOutcome, JobStatus};
pub use terminal::{TerminalState, WaitResult};
pub use tools::{Foreground, ShellContext};

// Re-exported for front ends that only need result types.
pub use swish_types::ExecResult;
