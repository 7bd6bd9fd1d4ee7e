//! wait-for — Wait for one background job.

use swish_types::ExecResult;

use crate::scheduler;
use crate::tools::{ShellContext, Tool, ToolArgs, ToolSchema};

/// WaitFor tool: block until a background job stops or terminates.
pub struct WaitFor;

impl Tool for WaitFor {
    fn name(&self) -> &str {
        "wait-for"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("wait-for", "Wait for a background job to stop or finish")
            .usage("wait-for <index>")
            .example("Wait for job 0", "wait-for 0")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ShellContext) -> ExecResult {
        let index = match args.job_indices("wait-for") {
            Ok(indices) if indices.len() == 1 => indices[0],
            Ok(_) => return ExecResult::failure(1, "wait-for: usage: wait-for <index>"),
            Err(result) => return result,
        };

        match scheduler::wait_one(ctx, index) {
            Ok(()) => ExecResult::success(""),
            Err(e) => ExecResult::failure(1, format!("wait-for: {}", e)),
        }
    }
}
