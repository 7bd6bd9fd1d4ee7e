//! jobs — List background and stopped jobs.

use swish_types::ExecResult;

use crate::scheduler;
use crate::tools::{ShellContext, Tool, ToolArgs, ToolSchema};

/// Jobs tool: list tracked jobs as `<index>: <name> (<status>)`.
pub struct Jobs;

impl Tool for Jobs {
    fn name(&self) -> &str {
        "jobs"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("jobs", "List background and stopped jobs")
            .example("List jobs", "jobs")
    }

    fn execute(&self, _args: ToolArgs, ctx: &mut ShellContext) -> ExecResult {
        let text: String = scheduler::list_jobs(ctx)
            .iter()
            .map(|job| format!("{}\n", job))
            .collect();
        ExecResult::success(text)
    }
}
