//! Mock command runner for testing
//! Records every issued argv and answers from scripted stubs

use crate::domain::ports::command_runner::render_argv;
use crate::domain::ports::{CommandOutput, CommandRunner};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Scripted, recording mock of the CommandRunner port
///
/// Unstubbed commands succeed with empty output. Stubs are matched by prefix
/// against the rendered argv line; the most recently added match wins.
#[derive(Clone, Default)]
pub struct MockCommandRunner {
    stubs: Arc<Mutex<Vec<(String, CommandOutput)>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a response for commands whose argv line starts with `prefix`
    pub fn stub(&self, prefix: &str, output: CommandOutput) {
        self.stubs
            .lock()
            .unwrap()
            .push((prefix.to_string(), output));
    }

    /// Every argv line issued so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Whether any issued argv line starts with `prefix`
    pub fn issued(&self, prefix: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|line| line.starts_with(prefix))
    }
}

#[async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> CommandOutput {
        let line = render_argv(program, args);
        self.calls.lock().unwrap().push(line.clone());

        let stubs = self.stubs.lock().unwrap();
        stubs
            .iter()
            .rev()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map(|(_, output)| output.clone())
            .unwrap_or_else(|| CommandOutput::ok(""))
    }
}
