//! Error types for the job-control core.

use std::io;
use std::path::PathBuf;

use nix::errno::Errno;
use thiserror::Error;

use crate::scheduler::{JobId, JobStatus};

/// Result type for job-control operations.
pub type JobResult<T> = Result<T, JobError>;

/// Errors from launching a child process.
///
/// All of these are detected before the program image is replaced, so a
/// failed launch never leaves a half-configured child behind.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Nothing left to run after `&` and redirections were stripped.
    #[error("empty command")]
    EmptyCommand,

    /// A redirection operator was the last token.
    #[error("syntax error: expected a file name after '{0}'")]
    MissingRedirectTarget(String),

    /// A redirection target could not be opened.
    #[error("{}: {source}", path.display())]
    Redirection {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The program could not be found or executed.
    #[error("{program}: {}", exec_reason(source))]
    Exec {
        program: String,
        #[source]
        source: io::Error,
    },
}

fn exec_reason(err: &io::Error) -> String {
    if err.kind() == io::ErrorKind::NotFound {
        "command not found".to_string()
    } else {
        err.to_string()
    }
}

impl LaunchError {
    /// Shell exit status for this failure: 127 when the program is missing,
    /// 126 when it exists but cannot run, 1 otherwise.
    pub fn exit_code(&self) -> i64 {
        match self {
            LaunchError::Exec { source, .. } if source.kind() == io::ErrorKind::NotFound => 127,
            LaunchError::Exec { .. } => 126,
            _ => 1,
        }
    }
}

/// Errors from job-control operations.
///
/// None of these are fatal to the shell.
#[derive(Debug, Error)]
pub enum JobError {
    /// No job at the given display index.
    #[error("job index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// The job exists but is in the wrong state for the operation.
    #[error("job {index} is {status}")]
    WrongJobState { index: usize, status: JobStatus },

    /// A job id no longer names a live record.
    #[error("no such job: {0}")]
    UnknownJob(JobId),

    /// The child could not be launched.
    #[error(transparent)]
    Launch(#[from] LaunchError),

    /// A wait, signal or terminal-control call failed.
    #[error("{op} failed: {source}")]
    SystemCall {
        op: &'static str,
        #[source]
        source: Errno,
    },
}

impl JobError {
    pub(crate) fn sys(op: &'static str, source: Errno) -> Self {
        JobError::SystemCall { op, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exec_not_found_message() {
        let err = LaunchError::Exec {
            program: "nosuch".to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "nosuch: command not found");
        assert_eq!(err.exit_code(), 127);
    }

    #[test]
    fn test_exec_permission_denied_code() {
        let err = LaunchError::Exec {
            program: "./notes.txt".to_string(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.exit_code(), 126);
    }

    #[test]
    fn test_wrong_state_message() {
        let err = JobError::WrongJobState {
            index: 1,
            status: JobStatus::Stopped,
        };
        assert_eq!(err.to_string(), "job 1 is stopped");
    }

    #[test]
    fn test_system_call_message() {
        let err = JobError::sys("waitpid", Errno::ECHILD);
        assert!(err.to_string().starts_with("waitpid failed"));
    }
}
