//! Job identification and status types.

/// Stable identifier for a tracked job.
///
/// Ids come from a monotonic counter and are never reused, unlike the
/// positional index shown by `jobs`, which shifts whenever an earlier job
/// is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(pub u64);

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a tracked job.
///
/// Terminated jobs have no status: they are removed from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    /// Running without holding the terminal.
    Background,
    /// Stopped by a signal (e.g., Ctrl-Z / SIGTSTP) and not yet resumed.
    Stopped,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Background => write!(f, "background"),
            JobStatus::Stopped => write!(f, "stopped"),
        }
    }
}

/// Information about a job for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobInfo {
    /// Position in the current listing (0-based). Not stable across removals.
    pub index: usize,
    /// Stable job ID.
    pub id: JobId,
    /// Program name as typed.
    pub name: String,
    /// Current status.
    pub status: JobStatus,
}

impl std::fmt::Display for JobInfo {
    /// `<index>: <name> (<background|stopped>)`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.index, self.name, self.status)
    }
}
