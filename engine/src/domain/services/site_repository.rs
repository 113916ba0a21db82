//! Site repository
//! Sole owner of the available/enabled configuration directories.
//! All filesystem state is reached through the privileged runner; nothing
//! is cached beyond a single call.

use crate::domain::ports::CommandRunner;
use crate::domain::services::staging;
use crate::domain::value_objects::SiteName;
use crate::domain::{DomainError, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct SiteRepository {
    runner: Arc<dyn CommandRunner>,
    available_dir: PathBuf,
    enabled_dir: PathBuf,
    staging_dir: PathBuf,
}

impl SiteRepository {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        available_dir: impl Into<PathBuf>,
        enabled_dir: impl Into<PathBuf>,
        staging_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runner,
            available_dir: available_dir.into(),
            enabled_dir: enabled_dir.into(),
            staging_dir: staging_dir.into(),
        }
    }

    fn available_path(&self, name: &SiteName) -> String {
        self.available_dir.join(name.as_str()).display().to_string()
    }

    fn enabled_path(&self, name: &SiteName) -> String {
        self.enabled_dir.join(name.as_str()).display().to_string()
    }

    /// Names of all available sites; runner failure yields an empty list
    pub async fn list_available(&self) -> Vec<String> {
        self.list_dir(&self.available_dir).await
    }

    /// Names of all enabled sites; runner failure yields an empty list
    pub async fn list_enabled(&self) -> Vec<String> {
        self.list_dir(&self.enabled_dir).await
    }

    async fn list_dir(&self, dir: &Path) -> Vec<String> {
        let dir = dir.display().to_string();
        let output = self.runner.run("ls", &[dir.clone()]).await;
        if !output.success {
            warn!(dir = %dir, detail = %output.detail(), "Directory listing failed");
            return Vec::new();
        }

        output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Read the canonical content of an available site
    pub async fn read(&self, name: &SiteName) -> Result<String> {
        let output = self.runner.run("cat", &[self.available_path(name)]).await;
        if output.success {
            Ok(output.stdout)
        } else {
            debug!(site = %name, detail = %output.detail(), "Site read failed");
            Err(DomainError::NotFound(name.to_string()))
        }
    }

    /// Probe whether the available entry exists
    pub async fn exists(&self, name: &SiteName) -> bool {
        self.runner
            .run("ls", &[self.available_path(name)])
            .await
            .success
    }

    /// Replace the available entry's content
    ///
    /// Stages locally, copies into place with elevation and removes the
    /// staging file on all exit paths.
    pub async fn write(&self, name: &SiteName, content: &str) -> Result<()> {
        let target = self.available_path(name);
        let output =
            staging::install_file(self.runner.as_ref(), &self.staging_dir, &target, content).await;

        if output.success {
            debug!(site = %name, "Site configuration written");
            Ok(())
        } else {
            Err(DomainError::WriteFailed(output.detail()))
        }
    }

    /// Remove the available entry and, if present, the enabled symlink.
    /// Idempotent: removing a non-existent entry is not an error.
    pub async fn remove(&self, name: &SiteName) -> Result<()> {
        // Symlink first so the enabled set never points at a removed entry
        let link = self
            .runner
            .run("rm", &["-f".to_string(), self.enabled_path(name)])
            .await;
        if !link.success {
            debug!(site = %name, detail = %link.detail(), "Enabled symlink removal failed");
        }

        let output = self
            .runner
            .run("rm", &["-f".to_string(), self.available_path(name)])
            .await;
        if output.success {
            Ok(())
        } else {
            Err(DomainError::DeleteFailed(output.detail()))
        }
    }

    /// Create the enabled symlink pointing at the available entry
    pub async fn link(&self, name: &SiteName) -> Result<()> {
        let output = self
            .runner
            .run(
                "ln",
                &[
                    "-s".to_string(),
                    self.available_path(name),
                    self.enabled_path(name),
                ],
            )
            .await;
        if output.success {
            Ok(())
        } else {
            Err(DomainError::ToggleFailed(output.detail()))
        }
    }

    /// Remove the enabled symlink; idempotent
    pub async fn unlink(&self, name: &SiteName) -> Result<()> {
        let output = self
            .runner
            .run("rm", &["-f".to_string(), self.enabled_path(name)])
            .await;
        if output.success {
            Ok(())
        } else {
            Err(DomainError::ToggleFailed(output.detail()))
        }
    }
}
