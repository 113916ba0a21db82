//! CommandRunner port
//! Interface for executing a single privileged system command.
//! The runner itself never errors: all failure is reported in the result.

use async_trait::async_trait;

/// Result of one external command invocation
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Diagnostic text for the operator: stderr when present, stdout otherwise
    pub fn detail(&self) -> String {
        if self.stderr.trim().is_empty() {
            self.stdout.trim().to_string()
        } else {
            self.stderr.trim().to_string()
        }
    }
}

/// Port for running commands with elevated privileges
///
/// Exactly one external command is executed per call; no retries and no
/// timeout beyond what the OS provides. Arguments are passed as an argv
/// array, never interpolated into a shell string.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> CommandOutput;
}

/// Render a program + argv as one line, for logs and test assertions
pub fn render_argv(program: &str, args: &[String]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
