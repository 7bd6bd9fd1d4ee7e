//! cd — Change working directory.

use std::path::PathBuf;

use swish_types::ExecResult;

use crate::tools::{ShellContext, Tool, ToolArgs, ToolSchema};

/// Cd tool: change the shell's working directory, which children inherit.
pub struct Cd;

impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change current working directory")
            .usage("cd [dir | -]")
            .example("Go home", "cd")
            .example("Go back to the previous directory", "cd -")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ShellContext) -> ExecResult {
        let arg = args.get_positional(0);

        let target: PathBuf = match arg {
            Some("-") => match ctx.prev_dir() {
                Some(prev) => prev.to_path_buf(),
                None => return ExecResult::failure(1, "cd: OLDPWD not set"),
            },
            Some(path) => PathBuf::from(path),
            None => match std::env::var_os("HOME") {
                Some(home) => PathBuf::from(home),
                None => return ExecResult::failure(1, "cd: HOME not set"),
            },
        };

        let previous = std::env::current_dir().ok();
        if let Err(e) = std::env::set_current_dir(&target) {
            return ExecResult::failure(1, format!("cd: {}: {}", target.display(), e));
        }
        ctx.set_prev_dir(previous);

        // For `cd -`, output the new directory (like bash)
        if arg == Some("-") {
            ExecResult::success(format!("{}\n", target.display()))
        } else {
            ExecResult::success("")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial(cwd)]
    fn test_cd_into_dir_and_back() {
        let original = std::env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().canonicalize().unwrap();
        let mut ctx = ShellContext::new();

        let result = Cd.execute(ToolArgs::from_tokens([target.display().to_string()]), &mut ctx);
        assert_eq!(result, ExecResult::success(""));
        assert_eq!(std::env::current_dir().unwrap(), target);
        assert_eq!(ctx.prev_dir(), Some(original.as_path()));

        // `cd -` swaps back and names the directory it landed in
        let result = Cd.execute(ToolArgs::from_tokens(["-"]), &mut ctx);
        assert_eq!(result.out, format!("{}\n", original.display()));
        assert_eq!(std::env::current_dir().unwrap(), original);
        assert_eq!(ctx.prev_dir(), Some(target.as_path()));
    }

    #[test]
    #[serial_test::serial(cwd)]
    fn test_cd_nonexistent() {
        let mut ctx = ShellContext::new();
        let before = std::env::current_dir().unwrap();
        let result = Cd.execute(ToolArgs::from_tokens(["/swish/definitely/not/here"]), &mut ctx);
        assert!(!result.ok());
        assert!(result.err.starts_with("cd: /swish/definitely/not/here:"));
        assert_eq!(std::env::current_dir().unwrap(), before);
        assert!(ctx.prev_dir().is_none());
    }

    #[test]
    fn test_cd_file_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut ctx = ShellContext::new();
        let arg = file.path().display().to_string();
        let result = Cd.execute(ToolArgs::from_tokens([arg]), &mut ctx);
        assert!(!result.ok());
    }

    #[test]
    fn test_cd_dash_without_history() {
        let mut ctx = ShellContext::new();
        let result = Cd.execute(ToolArgs::from_tokens(["-"]), &mut ctx);
        assert_eq!(result.err, "cd: OLDPWD not set");
    }
}
