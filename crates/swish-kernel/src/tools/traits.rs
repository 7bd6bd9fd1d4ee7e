//! Core tool traits and types.

use swish_types::ExecResult;

use super::context::ShellContext;

/// Schema describing a tool's interface, used by `help`.
#[derive(Debug, Clone)]
pub struct ToolSchema {
    /// Tool name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Usage line, e.g. `fg <index>...`.
    pub usage: String,
    /// Example invocations: (description, command).
    pub examples: Vec<(String, String)>,
}

impl ToolSchema {
    /// Create a new tool schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            usage: name.clone(),
            name,
            description: description.into(),
            examples: Vec::new(),
        }
    }

    /// Set the usage line.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Add an example.
    pub fn example(mut self, description: impl Into<String>, command: impl Into<String>) -> Self {
        self.examples.push((description.into(), command.into()));
        self
    }
}

/// Arguments passed to a tool: every token after the tool name.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Positional arguments in order.
    pub positional: Vec<String>,
}

impl ToolArgs {
    /// Create empty args.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create args from tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positional: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Get a positional argument by index.
    pub fn get_positional(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Parse every positional argument as a job index, dropping repeats.
    ///
    /// On failure returns a ready-made error result naming the tool.
    pub fn job_indices(&self, tool: &str) -> Result<Vec<usize>, ExecResult> {
        if self.positional.is_empty() {
            return Err(ExecResult::failure(1, format!("{}: usage: {} <index>...", tool, tool)));
        }
        let mut indices = Vec::with_capacity(self.positional.len());
        for s in &self.positional {
            let index = s
                .parse::<usize>()
                .map_err(|_| ExecResult::failure(1, format!("{}: invalid job index: {}", tool, s)))?;
            if !indices.contains(&index) {
                indices.push(index);
            }
        }
        Ok(indices)
    }
}

/// A command the shell runs in-process.
pub trait Tool: Send + Sync {
    /// The tool's name (used for lookup).
    fn name(&self) -> &str;

    /// Get the tool's schema.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments and context.
    fn execute(&self, args: ToolArgs, ctx: &mut ShellContext) -> ExecResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_indices() {
        let args = ToolArgs::from_tokens(["0", "2"]);
        assert_eq!(args.job_indices("fg").unwrap(), vec![0, 2]);
    }

    #[test]
    fn test_job_indices_drops_repeats() {
        let args = ToolArgs::from_tokens(["1", "0", "1", "0"]);
        assert_eq!(args.job_indices("fg").unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_job_indices_rejects_garbage() {
        let err = ToolArgs::from_tokens(["1", "x"]).job_indices("bg").unwrap_err();
        assert_eq!(err.code, 1);
        assert_eq!(err.err, "bg: invalid job index: x");

        let err = ToolArgs::from_tokens(["-1"]).job_indices("fg").unwrap_err();
        assert!(err.err.contains("invalid job index"));
    }

    #[test]
    fn test_job_indices_requires_one() {
        let err = ToolArgs::new().job_indices("fg").unwrap_err();
        assert_eq!(err.err, "fg: usage: fg <index>...");
    }
}
