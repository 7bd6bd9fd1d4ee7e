//! fg — Resume jobs in the foreground.

use swish_types::ExecResult;

use crate::scheduler::{self, JobOutcome};
use crate::tools::{ShellContext, Tool, ToolArgs, ToolSchema};

/// Fg tool: resume jobs in the foreground, one after another.
pub struct Fg;

impl Tool for Fg {
    fn name(&self) -> &str {
        "fg"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("fg", "Resume jobs in the foreground")
            .usage("fg <index>...")
            .example("Resume job 0", "fg 0")
            .example("Resume jobs 0 and 2 in turn", "fg 0 2")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ShellContext) -> ExecResult {
        let indices = match args.job_indices("fg") {
            Ok(indices) => indices,
            Err(result) => return result,
        };

        let names: Vec<String> = indices
            .iter()
            .map(|&i| ctx.jobs.get(i).map(|job| job.name.clone()).unwrap_or_default())
            .collect();

        let outcomes = match scheduler::resume_many(ctx, &indices, true) {
            Ok(outcomes) => outcomes,
            Err(e) => return ExecResult::failure(1, format!("fg: {}", e)),
        };

        let mut code = 0;
        let mut err = String::new();
        for (name, outcome) in names.iter().zip(outcomes.into_iter().flatten()) {
            code = outcome.exit_code();
            // Stopped again
            if let JobOutcome::Stopped(id) = outcome
                && let Some(index) = ctx.jobs.index_of(id)
            {
                err.push_str(&format!("\n[{}] Stopped\t{}\n", index, name));
            }
        }

        ExecResult::from_output(code, String::new(), err)
    }
}
