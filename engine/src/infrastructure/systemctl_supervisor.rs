//! ServiceSupervisor adapter backed by systemctl

use crate::domain::ports::{CommandOutput, CommandRunner, ServiceSupervisor};
use crate::domain::value_objects::ServiceAction;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

pub struct SystemctlSupervisor {
    runner: Arc<dyn CommandRunner>,
    config_check: Vec<String>,
}

impl SystemctlSupervisor {
    /// `config_check` is the full argv of the syntax check, e.g. `nginx -t`
    pub fn new(runner: Arc<dyn CommandRunner>, config_check: Vec<String>) -> Self {
        Self {
            runner,
            config_check,
        }
    }
}

#[async_trait]
impl ServiceSupervisor for SystemctlSupervisor {
    async fn is_active(&self, unit: &str) -> bool {
        let output = self
            .runner
            .run(
                "systemctl",
                &["is-active".to_string(), unit.to_string()],
            )
            .await;
        let state = output.stdout.trim();
        debug!(unit, state, "Probed unit state");
        output.success && state == "active"
    }

    async fn control(&self, unit: &str, action: ServiceAction) -> CommandOutput {
        self.runner
            .run(
                "systemctl",
                &[action.as_str().to_string(), unit.to_string()],
            )
            .await
    }

    async fn check_config(&self) -> CommandOutput {
        let (program, args) = match self.config_check.split_first() {
            Some((program, args)) => (program.clone(), args.to_vec()),
            // Unreachable with validated settings; fail closed
            None => {
                return CommandOutput::failed("No configuration check command configured");
            }
        };
        self.runner.run(&program, &args).await
    }
}
