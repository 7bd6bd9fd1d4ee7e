//! Kernel (核) — the entry point for running swish command lines.
//!
//! The kernel owns the shell context and the tool registry. A line is
//! tokenized, builtins run in-process, and everything else goes to the job
//! controller in the foreground or, with a trailing `&`, in the background.

use swish_types::ExecResult;

use crate::command::{CommandLine, tokenize};
use crate::error::JobError;
use crate::scheduler::{self, JobOutcome};
use crate::tools::{ShellContext, ToolArgs, ToolRegistry, ToolSchema, register_builtins};

/// Configuration for kernel initialization.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Name of this kernel (for identification in logs).
    pub name: String,

    /// Whether to take control of the terminal on standard input.
    ///
    /// When true and standard input is a terminal, foreground jobs get the
    /// terminal while they run. When false, or without a terminal, jobs are
    /// still placed in their own process groups but no transfer happens.
    pub job_control: bool,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            job_control: false,
        }
    }
}

impl KernelConfig {
    /// Config for an interactive shell: job control on.
    pub fn interactive() -> Self {
        Self {
            name: "interactive".to_string(),
            job_control: true,
        }
    }

    /// Config for running without terminal control (scripts, tests).
    pub fn detached() -> Self {
        Self {
            name: "detached".to_string(),
            job_control: false,
        }
    }

    /// Set the kernel name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enable or disable terminal control.
    pub fn with_job_control(mut self, enabled: bool) -> Self {
        self.job_control = enabled;
        self
    }
}

/// The swish kernel.
#[derive(Debug)]
pub struct Kernel {
    name: String,
    ctx: ShellContext,
    tools: ToolRegistry,
}

impl Kernel {
    /// Create a new kernel.
    pub fn new(config: KernelConfig) -> Self {
        let ctx = if config.job_control {
            ShellContext::interactive()
        } else {
            ShellContext::new()
        };

        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools);

        tracing::debug!(
            name = %config.name,
            terminal = ctx.has_terminal(),
            "kernel created"
        );

        Self {
            name: config.name,
            ctx,
            tools,
        }
    }

    /// Kernel name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shell state, for inspection.
    pub fn context(&self) -> &ShellContext {
        &self.ctx
    }

    /// Schemas of the builtin tools.
    pub fn tool_schemas(&self) -> Vec<ToolSchema> {
        self.tools.schemas()
    }

    /// Execute one command line.
    pub fn execute(&mut self, line: &str) -> ExecResult {
        let mut tokens = tokenize(line);
        if tokens.is_empty() {
            return ExecResult::success("");
        }

        if let Some(tool) = self.tools.get(&tokens[0]) {
            let args = ToolArgs::from_tokens(tokens.drain(1..));
            return tool.execute(args, &mut self.ctx);
        }

        let command = match CommandLine::parse(tokens) {
            Ok(command) => command,
            Err(e) => return ExecResult::failure(e.exit_code(), format!("swish: {}", e)),
        };

        if command.background {
            return match scheduler::dispatch_background(&mut self.ctx, &command) {
                Ok(_) => ExecResult::success(""),
                Err(e) => job_failure(e),
            };
        }

        match scheduler::dispatch_foreground(&mut self.ctx, &command) {
            Ok(JobOutcome::Stopped(id)) => {
                let index = self.ctx.jobs.index_of(id).unwrap_or_default();
                ExecResult::failure(
                    scheduler::STOPPED_EXIT_CODE,
                    format!("\n[{}] Stopped\t{}\n", index, command.program()),
                )
            }
            Ok(outcome) => ExecResult::from_output(outcome.exit_code(), String::new(), String::new()),
            Err(e) => job_failure(e),
        }
    }
}

fn job_failure(err: JobError) -> ExecResult {
    let code = match &err {
        JobError::Launch(launch) => launch.exit_code(),
        _ => 1,
    };
    ExecResult::failure(code, format!("swish: {}", err))
}
