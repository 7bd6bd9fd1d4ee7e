//! Tool system for swish.
//!
//! Builtins are the commands the shell runs in-process instead of launching
//! a child: job control (`jobs`, `fg`, `bg`, `wait-for`, `wait-all`) and the
//! directory commands (`cd`, `pwd`). Each implements the `Tool` trait and
//! receives the `ShellContext`.
//!
//! # Architecture
//!
//! ```text
//! ToolRegistry
//! ├── Job control (jobs, fg, bg, wait-for, wait-all)
//! └── Directory (cd, pwd)
//! ```

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use context::{Foreground, ShellContext};
pub use registry::ToolRegistry;
pub use traits::{Tool, ToolArgs, ToolSchema};
