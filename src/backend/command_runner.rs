//! Host command runner trait definition

use trait_variant::make;

use crate::core::error::CommandResult;

/// Exit status and captured output of a finished command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was terminated by a signal
    pub code: Option<i32>,
    /// Captured stdout followed by stderr
    pub output: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Abstraction over spawning host tools (systemctl, dpkg, apt)
///
/// This trait enables testing by allowing mock implementations
/// that never touch the host.
#[make(Send)]
pub trait CommandRunner: Sync + 'static {
    /// Run `program` with `args` to completion and capture its output
    ///
    /// A non-zero exit is not an error; only failing to spawn the process is.
    async fn run(&self, program: &str, args: &[&str]) -> CommandResult<CommandOutput>;
}
