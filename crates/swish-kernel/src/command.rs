//! Command-line tokenizing.
//!
//! swish has no quoting or expansion: a line is split on whitespace, a
//! trailing `&` requests background execution, and redirection operators are
//! pulled out of the argument list.

use crate::error::LaunchError;
use crate::redirect::Redirections;

/// Split a line into whitespace-separated tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

/// A parsed external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Program followed by its arguments, redirections removed.
    pub argv: Vec<String>,
    /// Redirections to apply in the child.
    pub redirections: Redirections,
    /// True if the line ended with `&`.
    pub background: bool,
}

impl CommandLine {
    /// Parse a token list.
    pub fn parse(mut tokens: Vec<String>) -> Result<Self, LaunchError> {
        let background = tokens.last().is_some_and(|t| t == "&");
        if background {
            tokens.pop();
        }

        let (argv, redirections) = Redirections::extract(tokens)?;
        if argv.is_empty() {
            return Err(LaunchError::EmptyCommand);
        }

        Ok(Self {
            argv,
            redirections,
            background,
        })
    }

    /// Build a foreground command with no redirections.
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
            redirections: Redirections::none(),
            background: false,
        }
    }

    /// Program name as typed.
    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redirect::OutputMode;

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  ls   -l \t /tmp "), vec!["ls", "-l", "/tmp"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_parse_foreground() {
        let cmd = CommandLine::parse(tokenize("echo hi")).unwrap();
        assert_eq!(cmd.argv, vec!["echo", "hi"]);
        assert!(!cmd.background);
        assert!(cmd.redirections.is_empty());
        assert_eq!(cmd.program(), "echo");
    }

    #[test]
    fn test_parse_background() {
        let cmd = CommandLine::parse(tokenize("sleep 100 &")).unwrap();
        assert_eq!(cmd.argv, vec!["sleep", "100"]);
        assert!(cmd.background);
    }

    #[test]
    fn test_ampersand_only_counts_at_end() {
        let cmd = CommandLine::parse(tokenize("echo & done")).unwrap();
        assert_eq!(cmd.argv, vec!["echo", "&", "done"]);
        assert!(!cmd.background);
    }

    #[test]
    fn test_parse_background_with_redirection() {
        let cmd = CommandLine::parse(tokenize("ls >> log.txt &")).unwrap();
        assert_eq!(cmd.argv, vec!["ls"]);
        assert!(cmd.background);
        assert_eq!(cmd.redirections.output.unwrap().mode, OutputMode::Append);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            CommandLine::parse(tokenize("&")),
            Err(LaunchError::EmptyCommand)
        ));
        assert!(matches!(
            CommandLine::parse(tokenize("> out.txt")),
            Err(LaunchError::EmptyCommand)
        ));
    }
}
