//! pwd — Print working directory.

use swish_types::ExecResult;

use crate::tools::{ShellContext, Tool, ToolArgs, ToolSchema};

/// Pwd tool: print the shell's current working directory.
pub struct Pwd;

impl Tool for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("pwd", "Print current working directory")
            .example("Show current directory", "pwd")
    }

    fn execute(&self, _args: ToolArgs, _ctx: &mut ShellContext) -> ExecResult {
        match std::env::current_dir() {
            Ok(dir) => ExecResult::success(format!("{}\n", dir.display())),
            Err(e) => ExecResult::failure(1, format!("pwd: {}", e)),
        }
    }
}
