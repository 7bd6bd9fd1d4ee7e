//! bg — Resume jobs in the background.

use swish_types::ExecResult;

use crate::scheduler;
use crate::tools::{ShellContext, Tool, ToolArgs, ToolSchema};

/// Bg tool: continue jobs without giving them the terminal.
pub struct Bg;

impl Tool for Bg {
    fn name(&self) -> &str {
        "bg"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("bg", "Resume jobs in the background")
            .usage("bg <index>...")
            .example("Resume job 1", "bg 1")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ShellContext) -> ExecResult {
        let indices = match args.job_indices("bg") {
            Ok(indices) => indices,
            Err(result) => return result,
        };

        // Background resumes never remove jobs, so indices stay valid.
        if let Err(e) = scheduler::resume_many(ctx, &indices, false) {
            return ExecResult::failure(1, format!("bg: {}", e));
        }

        let mut out = String::new();
        for index in indices {
            if let Some(job) = ctx.jobs.get(index) {
                out.push_str(&format!("[{}] {} &\n", index, job.name));
            }
        }
        ExecResult::success(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandLine;
    use swish_types::JobStatus;

    #[test]
    fn test_bg_bad_index() {
        let mut ctx = ShellContext::new();
        let result = Bg.execute(ToolArgs::from_tokens(["2"]), &mut ctx);
        assert!(!result.ok());
        assert_eq!(result.err, "bg: job index out of bounds: 2");
    }

    #[test]
    fn test_bg_continues_stopped_job() {
        let mut ctx = ShellContext::new();
        let line = CommandLine::new(["sh", "-c", "kill -STOP $$"]);
        scheduler::dispatch_foreground(&mut ctx, &line).unwrap();

        let result = Bg.execute(ToolArgs::from_tokens(["0"]), &mut ctx);
        assert!(result.ok());
        assert_eq!(result.out, "[0] sh &\n");
        assert_eq!(ctx.jobs.get(0).unwrap().status, JobStatus::Background);

        scheduler::wait_one(&mut ctx, 0).unwrap();
        assert!(ctx.jobs.is_empty());
    }
}
