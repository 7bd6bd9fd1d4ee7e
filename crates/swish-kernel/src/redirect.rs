//! I/O redirection: `< file`, `> file`, `>> file`.
//!
//! Redirection operators may appear anywhere in a command line. Every
//! operator and the file name after it are stripped from the argument list,
//! but only one input and one output are honored:
//!
//! - the first `<`
//! - the first `>`, or if there is none, the first `>>`

use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::path::PathBuf;

use crate::error::LaunchError;

/// Permission bits for files created by output redirection (owner rw).
pub const OUTPUT_FILE_MODE: u32 = 0o600;

/// How an output file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// `>` — truncate an existing file.
    Truncate,
    /// `>>` — append to an existing file.
    Append,
}

/// An output redirection target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRedirect {
    pub path: PathBuf,
    pub mode: OutputMode,
}

/// The redirections that apply to one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Redirections {
    /// File to use as standard input.
    pub input: Option<PathBuf>,
    /// File to use as standard output.
    pub output: Option<OutputRedirect>,
}

impl Redirections {
    /// No redirections.
    pub fn none() -> Self {
        Self::default()
    }

    /// Redirect standard input from a file.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Redirect standard output to a file.
    pub fn with_output(mut self, path: impl Into<PathBuf>, mode: OutputMode) -> Self {
        self.output = Some(OutputRedirect {
            path: path.into(),
            mode,
        });
        self
    }

    /// True if neither stream is redirected.
    pub fn is_empty(&self) -> bool {
        self.input.is_none() && self.output.is_none()
    }

    /// Split redirections out of a token list.
    ///
    /// Returns the remaining arguments and the honored redirections.
    pub fn extract(tokens: Vec<String>) -> Result<(Vec<String>, Redirections), LaunchError> {
        let mut argv = Vec::with_capacity(tokens.len());
        let mut input = None;
        let mut truncate = None;
        let mut append = None;

        let mut iter = tokens.into_iter();
        while let Some(token) = iter.next() {
            let slot = match token.as_str() {
                "<" => &mut input,
                ">" => &mut truncate,
                ">>" => &mut append,
                _ => {
                    argv.push(token);
                    continue;
                }
            };
            let target = iter
                .next()
                .ok_or_else(|| LaunchError::MissingRedirectTarget(token.clone()))?;
            if slot.is_none() {
                *slot = Some(PathBuf::from(target));
            }
        }

        let output = match (truncate, append) {
            (Some(path), _) => Some(OutputRedirect {
                path,
                mode: OutputMode::Truncate,
            }),
            (None, Some(path)) => Some(OutputRedirect {
                path,
                mode: OutputMode::Append,
            }),
            (None, None) => None,
        };

        Ok((argv, Redirections { input, output }))
    }

    /// Open the input file read-only, if any.
    pub fn open_input(&self) -> Result<Option<File>, LaunchError> {
        let Some(path) = &self.input else {
            return Ok(None);
        };
        File::open(path)
            .map(Some)
            .map_err(|source| LaunchError::Redirection {
                path: path.clone(),
                source,
            })
    }

    /// Open the output file write-only, creating it if absent.
    pub fn open_output(&self) -> Result<Option<File>, LaunchError> {
        let Some(target) = &self.output else {
            return Ok(None);
        };
        let mut options = OpenOptions::new();
        options.write(true).create(true).mode(OUTPUT_FILE_MODE);
        match target.mode {
            OutputMode::Truncate => options.truncate(true),
            OutputMode::Append => options.append(true),
        };
        options
            .open(&target.path)
            .map(Some)
            .map_err(|source| LaunchError::Redirection {
                path: target.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn toks(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[rstest]
    #[case::plain("ls -l", "ls -l", None, None)]
    #[case::input("sort < in.txt", "sort", Some("in.txt"), None)]
    #[case::truncate("ls > out.txt", "ls", None, Some(("out.txt", OutputMode::Truncate)))]
    #[case::append("ls >> out.txt", "ls", None, Some(("out.txt", OutputMode::Append)))]
    #[case::middle("grep > out.txt foo", "grep foo", None, Some(("out.txt", OutputMode::Truncate)))]
    #[case::both("cat < a > b", "cat", Some("a"), Some(("b", OutputMode::Truncate)))]
    #[case::truncate_beats_append("cat >> a > b", "cat", None, Some(("b", OutputMode::Truncate)))]
    #[case::first_input_wins("cat < a < b", "cat", Some("a"), None)]
    fn test_extract(
        #[case] line: &str,
        #[case] expected_argv: &str,
        #[case] input: Option<&str>,
        #[case] output: Option<(&str, OutputMode)>,
    ) {
        let (argv, redir) = Redirections::extract(toks(line)).unwrap();
        assert_eq!(argv, toks(expected_argv));
        assert_eq!(redir.input, input.map(PathBuf::from));
        assert_eq!(
            redir.output,
            output.map(|(path, mode)| OutputRedirect {
                path: PathBuf::from(path),
                mode
            })
        );
    }

    #[rstest]
    #[case("cat <")]
    #[case("ls >")]
    #[case("ls >>")]
    fn test_missing_target(#[case] line: &str) {
        let err = Redirections::extract(toks(line)).unwrap_err();
        assert!(matches!(err, LaunchError::MissingRedirectTarget(_)));
    }

    #[test]
    fn test_open_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let redir = Redirections::none().with_input(dir.path().join("absent.txt"));
        let err = redir.open_input().unwrap_err();
        assert!(matches!(err, LaunchError::Redirection { .. }));
    }

    #[test]
    fn test_open_output_creates_owner_only_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");
        let redir = Redirections::none().with_output(&path, OutputMode::Truncate);
        assert!(redir.open_output().unwrap().is_some());

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777 & !OUTPUT_FILE_MODE, 0);
    }

    #[test]
    fn test_open_nothing() {
        let redir = Redirections::none();
        assert!(redir.is_empty());
        assert!(redir.open_input().unwrap().is_none());
        assert!(redir.open_output().unwrap().is_none());
    }
}
