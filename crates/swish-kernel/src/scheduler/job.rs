//! Job table for swish.
//!
//! Provides the `JobTable` that tracks every job which did not run to
//! completion synchronously: background launches and stopped foreground jobs.
//!
//! Users address jobs by their position in the table (`fg 0`), and positions
//! shift when an earlier job is removed. Inside the kernel, jobs are addressed
//! by a stable [`JobId`] instead; an index is resolved to an id exactly once,
//! at the boundary.

use nix::unistd::Pid;

use crate::error::{JobError, JobResult};

pub use swish_types::{JobId, JobInfo, JobStatus};

/// A tracked job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Stable job ID.
    pub id: JobId,
    /// Process ID of the child, which is also its process group ID.
    pub pid: Pid,
    /// Program name as typed.
    pub name: String,
    /// Current status.
    pub status: JobStatus,
}

impl Job {
    fn info(&self, index: usize) -> JobInfo {
        JobInfo {
            index,
            id: self.id,
            name: self.name.clone(),
            status: self.status,
        }
    }
}

/// Ordered table of live jobs.
#[derive(Debug)]
pub struct JobTable {
    /// Counter for generating unique job IDs.
    next_id: u64,
    /// Jobs in insertion order.
    jobs: Vec<Job>,
}

impl JobTable {
    /// Create an empty job table.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            jobs: Vec::new(),
        }
    }

    /// Append a job at the end of the table.
    pub fn add(&mut self, pid: Pid, name: impl Into<String>, status: JobStatus) -> JobId {
        let id = JobId(self.next_id);
        self.next_id += 1;
        let name = name.into();
        tracing::debug!(%id, %pid, %name, %status, "job added");
        self.jobs.push(Job {
            id,
            pid,
            name,
            status,
        });
        id
    }

    /// Get the job at a display index.
    pub fn get(&self, index: usize) -> Option<&Job> {
        self.jobs.get(index)
    }

    /// Resolve a display index to the job's stable id.
    pub fn id_at(&self, index: usize) -> Option<JobId> {
        self.jobs.get(index).map(|job| job.id)
    }

    /// Current display index of a job.
    pub fn index_of(&self, id: JobId) -> Option<usize> {
        self.jobs.iter().position(|job| job.id == id)
    }

    /// Get a job by id.
    pub fn get_by_id(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Get a job by id for updating.
    pub fn get_by_id_mut(&mut self, id: JobId) -> Option<&mut Job> {
        self.jobs.iter_mut().find(|job| job.id == id)
    }

    /// Remove the job at a display index. Later jobs shift down by one.
    pub fn remove(&mut self, index: usize) -> JobResult<Job> {
        if index >= self.jobs.len() {
            return Err(JobError::IndexOutOfBounds(index));
        }
        let job = self.jobs.remove(index);
        tracing::debug!(id = %job.id, pid = %job.pid, "job removed");
        Ok(job)
    }

    /// Remove a job by id.
    pub fn remove_by_id(&mut self, id: JobId) -> Option<Job> {
        let index = self.index_of(id)?;
        self.remove(index).ok()
    }

    /// Remove every job with the given status, returning how many went.
    pub fn remove_by_status(&mut self, status: JobStatus) -> usize {
        let before = self.jobs.len();
        self.jobs.retain(|job| job.status != status);
        let removed = before - self.jobs.len();
        tracing::debug!(%status, removed, "jobs removed by status");
        removed
    }

    /// Iterate over jobs in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }

    /// Snapshot of all jobs with their display indices.
    pub fn list(&self) -> Vec<JobInfo> {
        self.jobs
            .iter()
            .enumerate()
            .map(|(index, job)| job.info(index))
            .collect()
    }

    /// Number of tracked jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// True if no jobs are tracked.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl Default for JobTable {
    fn default() -> Self {
        Self::new()
    }
}
