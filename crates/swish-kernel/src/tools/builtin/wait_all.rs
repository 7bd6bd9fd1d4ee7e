//! wait-all — Wait for every background job.

use swish_types::ExecResult;

use crate::scheduler;
use crate::tools::{ShellContext, Tool, ToolArgs, ToolSchema};

/// WaitAll tool: wait once on each background job, skipping stopped ones.
pub struct WaitAll;

impl Tool for WaitAll {
    fn name(&self) -> &str {
        "wait-all"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("wait-all", "Wait for all background jobs to stop or finish")
            .example("Wait for everything started with &", "wait-all")
    }

    fn execute(&self, _args: ToolArgs, ctx: &mut ShellContext) -> ExecResult {
        match scheduler::wait_all(ctx) {
            Ok(()) => ExecResult::success(""),
            Err(e) => ExecResult::failure(1, format!("wait-all: {}", e)),
        }
    }
}
