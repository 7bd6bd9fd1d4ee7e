//! Built-in tools for swish.
//!
//! These run inside the shell process. Everything else is launched as a child.

mod bg;
mod cd;
mod fg;
mod jobs;
mod pwd;
mod wait_all;
mod wait_for;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(bg::Bg);
    registry.register(cd::Cd);
    registry.register(fg::Fg);
    registry.register(jobs::Jobs);
    registry.register(pwd::Pwd);
    registry.register(wait_all::WaitAll);
    registry.register(wait_for::WaitFor);
}
