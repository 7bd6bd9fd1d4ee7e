//! Job lifecycle controller.
//!
//! A job is either running in the foreground (never stored), running in the
//! background, stopped, or gone. These functions move jobs between those
//! states, using the launcher to create children, the terminal arbiter to
//! move foreground ownership, and the job table to remember everything that
//! does not finish synchronously.
//!
//! Whenever the shell blocks on a foreground job, the terminal is granted
//! before the wait starts and reclaimed right after it returns, whatever the
//! outcome.

use nix::sys::signal::{Signal, killpg};
use nix::unistd::Pid;

use crate::command::CommandLine;
use crate::error::{JobError, JobResult};
use crate::scheduler::launch::launch_command;
use crate::scheduler::{JobId, JobInfo, JobStatus};
use crate::terminal::{WaitResult, wait_for_stop_or_exit};
use crate::tools::ShellContext;

/// Exit status reported for a job that stopped (128 + SIGTSTP).
pub const STOPPED_EXIT_CODE: i64 = 148;

/// What happened to a job the shell waited on in the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// Exited normally with a status code.
    Exited(i32),
    /// Killed by a signal.
    Signaled(Signal),
    /// Stopped; the job is now in the table under this id.
    Stopped(JobId),
}

impl JobOutcome {
    /// Shell-style exit status: the code, or 128 + signal number.
    pub fn exit_code(&self) -> i64 {
        match self {
            JobOutcome::Exited(code) => *code as i64,
            JobOutcome::Signaled(sig) => 128 + *sig as i64,
            JobOutcome::Stopped(_) => STOPPED_EXIT_CODE,
        }
    }
}

/// Run a command in the foreground and wait for it to stop or exit.
///
/// A stopped job is added to the table as `Stopped`; a finished one leaves
/// no trace.
pub fn dispatch_foreground(ctx: &mut ShellContext, line: &CommandLine) -> JobResult<JobOutcome> {
    let child = launch_command(line)?;

    if let Err(e) = ctx.grant_foreground(child.pid) {
        // The child is running and not waited on; keep track of it.
        let id = ctx.jobs.add(child.pid, child.name, JobStatus::Background);
        tracing::warn!(%id, "could not give terminal to job, left in background");
        return Err(e);
    }

    let waited = wait_for_stop_or_exit(child.pid);
    let reclaimed = ctx.reclaim_foreground();

    let outcome = match waited.map_err(|e| JobError::sys("waitpid", e))? {
        WaitResult::Exited(code) => JobOutcome::Exited(code),
        WaitResult::Signaled(sig) => JobOutcome::Signaled(sig),
        WaitResult::Stopped(sig) => {
            let id = ctx.jobs.add(child.pid, child.name, JobStatus::Stopped);
            tracing::debug!(%id, ?sig, "foreground job stopped");
            JobOutcome::Stopped(id)
        }
    };

    reclaimed?;
    Ok(outcome)
}

/// Start a command in the background and return at once.
pub fn dispatch_background(ctx: &mut ShellContext, line: &CommandLine) -> JobResult<JobId> {
    let child = launch_command(line)?;
    Ok(ctx.jobs.add(child.pid, child.name, JobStatus::Background))
}

/// Snapshot of the job table with display indices.
pub fn list_jobs(ctx: &ShellContext) -> Vec<JobInfo> {
    ctx.jobs.list()
}

/// Resume the job at `index`, in the foreground or the background.
pub fn resume(ctx: &mut ShellContext, index: usize, foreground: bool) -> JobResult<()> {
    let id = resolve(ctx, index)?;
    resume_job(ctx, id, foreground).map(|_| ())
}

/// Resume several jobs in turn.
///
/// Every index is resolved before the first job is touched, so a job that
/// finishes during the batch cannot shift a later index onto the wrong job.
/// A job named more than once is resumed once. Returns the foreground outcome
/// of each distinct job (`None` for background resumes).
pub fn resume_many(
    ctx: &mut ShellContext,
    indices: &[usize],
    foreground: bool,
) -> JobResult<Vec<Option<JobOutcome>>> {
    let mut ids = Vec::with_capacity(indices.len());
    for &index in indices {
        let id = resolve(ctx, index)?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    ids.into_iter()
        .map(|id| resume_job(ctx, id, foreground))
        .collect()
}

/// Resume a job by id.
///
/// Foreground resumes block until the job stops again or terminates.
pub fn resume_job(
    ctx: &mut ShellContext,
    id: JobId,
    foreground: bool,
) -> JobResult<Option<JobOutcome>> {
    let pid = ctx.jobs.get_by_id(id).ok_or(JobError::UnknownJob(id))?.pid;

    if !foreground {
        continue_group(pid)?;
        if let Some(job) = ctx.jobs.get_by_id_mut(id) {
            job.status = JobStatus::Background;
        }
        return Ok(None);
    }

    ctx.grant_foreground(pid)?;
    if let Err(e) = continue_group(pid) {
        // Nothing to wait for; the job keeps its status.
        let _ = ctx.reclaim_foreground();
        return Err(e);
    }

    let waited = wait_for_stop_or_exit(pid);
    let reclaimed = ctx.reclaim_foreground();

    let outcome = settle(ctx, id, waited.map_err(|e| JobError::sys("waitpid", e))?);
    reclaimed?;
    Ok(Some(outcome))
}

/// Wait for the background job at `index` to stop or terminate.
///
/// Waiting on a stopped job is refused: it would block until someone else
/// continued it.
pub fn wait_one(ctx: &mut ShellContext, index: usize) -> JobResult<()> {
    let job = ctx.jobs.get(index).ok_or(JobError::IndexOutOfBounds(index))?;
    if job.status == JobStatus::Stopped {
        return Err(JobError::WrongJobState {
            index,
            status: job.status,
        });
    }
    let (id, pid) = (job.id, job.pid);

    let waited = wait_for_stop_or_exit(pid).map_err(|e| JobError::sys("waitpid", e))?;
    settle(ctx, id, waited);
    Ok(())
}

/// Wait once on every background job.
///
/// Jobs that stop are marked `Stopped` and stay listed; after the scan, every
/// job still marked `Background` has terminated and is removed in one pass.
/// Stopped jobs are skipped.
pub fn wait_all(ctx: &mut ShellContext) -> JobResult<()> {
    let targets: Vec<(JobId, Pid)> = ctx
        .jobs
        .iter()
        .filter(|job| job.status == JobStatus::Background)
        .map(|job| (job.id, job.pid))
        .collect();

    let mut reaped = Vec::with_capacity(targets.len());
    for (id, pid) in targets {
        match wait_for_stop_or_exit(pid) {
            Ok(WaitResult::Stopped(_)) => {
                if let Some(job) = ctx.jobs.get_by_id_mut(id) {
                    job.status = JobStatus::Stopped;
                }
            }
            Ok(result) => {
                tracing::debug!(%id, ?result, "background job finished");
                reaped.push(id);
            }
            Err(e) => {
                // Drop what was already reaped so no later wait targets a
                // vanished pid.
                for id in reaped {
                    ctx.jobs.remove_by_id(id);
                }
                return Err(JobError::sys("waitpid", e));
            }
        }
    }

    ctx.jobs.remove_by_status(JobStatus::Background);
    Ok(())
}

fn resolve(ctx: &ShellContext, index: usize) -> JobResult<JobId> {
    ctx.jobs.id_at(index).ok_or(JobError::IndexOutOfBounds(index))
}

fn continue_group(pgid: Pid) -> JobResult<()> {
    killpg(pgid, Signal::SIGCONT).map_err(|e| {
        tracing::warn!(%pgid, "failed to continue job: {}", e);
        JobError::sys("killpg", e)
    })
}

/// Apply a wait result to a tracked job: gone jobs are removed, stopped jobs
/// are marked `Stopped`.
fn settle(ctx: &mut ShellContext, id: JobId, waited: WaitResult) -> JobOutcome {
    match waited {
        WaitResult::Stopped(_) => {
            if let Some(job) = ctx.jobs.get_by_id_mut(id) {
                job.status = JobStatus::Stopped;
            }
            JobOutcome::Stopped(id)
        }
        WaitResult::Exited(code) => {
            ctx.jobs.remove_by_id(id);
            JobOutcome::Exited(code)
        }
        WaitResult::Signaled(sig) => {
            ctx.jobs.remove_by_id(id);
            JobOutcome::Signaled(sig)
        }
    }
}
