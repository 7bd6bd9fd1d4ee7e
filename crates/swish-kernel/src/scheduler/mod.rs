//! Scheduler module for swish — launching children and tracking jobs.
//!
//! This module provides:
//! - **Launcher**: start a program in its own process group, with
//!   redirections applied and job-control signals restored.
//! - **Job table**: remember background and stopped jobs.
//! - **Controller**: foreground/background execution, `fg`, `bg`, and waits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        control                              │
//! │  dispatch_foreground ─┐                                     │
//! │  dispatch_background ─┼──▶ launch ──▶ child (own pgid)      │
//! │  resume / wait_one  ──┤                                     │
//! │  wait_all           ──┘                                     │
//! │            │                          │                     │
//! │            ▼                          ▼                     │
//! │     ShellContext.jobs          TerminalState                │
//! │   (JobTable: Vec<Job>)      give_terminal_to / reclaim      │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod control;
mod job;
mod launch;

pub use control::{
    JobOutcome, STOPPED_EXIT_CODE, dispatch_background, dispatch_foreground, list_jobs, resume,
    resume_job, resume_many, wait_all, wait_one,
};
pub use job::{Job, JobId, JobInfo, JobStatus, JobTable};
pub use launch::{Launched, launch, launch_command};
