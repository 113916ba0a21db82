//! Privileged command execution through sudo
//!
//! The elevation credential is resolved exactly once at construction, from
//! `NM_SUDO_PASSWORD` or `NM_SUDO_PASSWORD_FILE`. With a credential the
//! password is piped to `sudo -S` over stdin; without one `sudo -n` is used
//! and the environment must grant passwordless elevation.

use crate::domain::ports::{render_argv, CommandOutput, CommandRunner};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

/// Credential for privilege elevation, injected at process start
#[derive(Clone, Debug)]
pub enum SudoCredential {
    /// Pipe this password to `sudo -S`
    Password(String),
    /// Rely on passwordless sudo (`sudo -n`)
    None,
}

impl SudoCredential {
    /// Resolve the credential from the environment, once
    pub fn from_env() -> Result<Self, String> {
        if let Ok(password) = std::env::var("NM_SUDO_PASSWORD") {
            if !password.is_empty() {
                return Ok(SudoCredential::Password(password));
            }
        }
        if let Ok(path) = std::env::var("NM_SUDO_PASSWORD_FILE") {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read credential file '{}': {}", path, e))?;
            let password = contents.trim_end_matches(['\r', '\n']).to_string();
            if password.is_empty() {
                return Err(format!("Credential file '{}' is empty", path));
            }
            return Ok(SudoCredential::Password(password));
        }
        Ok(SudoCredential::None)
    }
}

/// CommandRunner adapter that prefixes every invocation with sudo
pub struct SudoCommandRunner {
    credential: SudoCredential,
}

impl SudoCommandRunner {
    pub fn new(credential: SudoCredential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl CommandRunner for SudoCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> CommandOutput {
        debug!(command = %render_argv(program, args), "Running privileged command");

        let mut command = Command::new("sudo");
        match &self.credential {
            // -p "" keeps the prompt out of stderr
            SudoCredential::Password(_) => command.args(["-S", "-p", ""]),
            SudoCredential::None => command.arg("-n"),
        };
        command
            .arg("--")
            .arg(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!(program, error = %e, "Failed to spawn privileged command");
                return CommandOutput::failed(format!("Failed to spawn sudo: {}", e));
            }
        };

        if let SudoCredential::Password(password) = &self.credential {
            if let Some(mut stdin) = child.stdin.take() {
                let line = format!("{}\n", password);
                if let Err(e) = stdin.write_all(line.as_bytes()).await {
                    warn!(program, error = %e, "Failed to write credential to sudo");
                }
                // Dropping stdin closes the pipe
            }
        } else {
            drop(child.stdin.take());
        }

        match child.wait_with_output().await {
            Ok(output) => CommandOutput {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(e) => {
                warn!(program, error = %e, "Failed to collect command output");
                CommandOutput::failed(format!("Failed to collect output: {}", e))
            }
        }
    }
}
