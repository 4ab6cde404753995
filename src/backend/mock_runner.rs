//! Mock command runner for testing

use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

use crate::backend::{CommandOutput, CommandRunner};
use crate::core::error::{CommandError, CommandResult};

/// Internal state for the mock runner
#[derive(Debug, Default)]
struct MockState {
    invocations: Vec<String>,
    responses: HashMap<String, CommandOutput>,
    missing_programs: Vec<String>,
}

/// Mock command runner for testing
///
/// Every command succeeds with empty output unless scripted otherwise.
/// Commands are keyed by their full command line, e.g. `"systemctl restart hostapd"`.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    inner: Arc<Mutex<MockState>>,
}

impl MockRunner {
    /// Create a new mock runner where every command succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the exit code returned for a command line
    pub async fn set_exit_code(&self, command_line: &str, code: i32) {
        self.set_response(command_line, Some(code), "").await;
    }

    /// Configure exit code and captured output for a command line
    pub async fn set_response(&self, command_line: &str, code: Option<i32>, output: &str) {
        self.inner.lock().await.responses.insert(
            command_line.to_string(),
            CommandOutput {
                code,
                output: output.to_string(),
            },
        );
    }

    /// Make every invocation of `program` fail to spawn
    pub async fn set_missing_program(&self, program: &str) {
        self.inner
            .lock()
            .await
            .missing_programs
            .push(program.to_string());
    }

    /// Command lines run so far, in order
    pub async fn invocations(&self) -> Vec<String> {
        self.inner.lock().await.invocations.clone()
    }
}

impl CommandRunner for MockRunner {
    async fn run(&self, program: &str, args: &[&str]) -> CommandResult<CommandOutput> {
        let mut state = self.inner.lock().await;

        let command_line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        state.invocations.push(command_line.clone());

        if state.missing_programs.iter().any(|p| p == program) {
            return Err(CommandError::Spawn {
                program: program.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }

        Ok(state
            .responses
            .get(&command_line)
            .cloned()
            .unwrap_or(CommandOutput {
                code: Some(0),
                output: String::new(),
            }))
    }
}
