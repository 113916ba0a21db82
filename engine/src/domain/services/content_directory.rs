//! Content directory service
//! Provisions per-site content directories under the workspace root and
//! removes them on request. Removal never follows a path outside the
//! workspace root, regardless of what was asked for.

use crate::domain::ports::CommandRunner;
use crate::domain::services::staging;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct ContentDirectoryService {
    runner: Arc<dyn CommandRunner>,
    workspace_root: PathBuf,
    staging_dir: PathBuf,
    /// `user:group`-style owner applied to provisioned content, when set
    owner: Option<String>,
}

impl ContentDirectoryService {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        workspace_root: impl Into<PathBuf>,
        staging_dir: impl Into<PathBuf>,
        owner: Option<String>,
    ) -> Self {
        Self {
            runner,
            workspace_root: workspace_root.into(),
            staging_dir: staging_dir.into(),
            owner,
        }
    }

    /// Ensure `root` exists and, when freshly created, populate it with the
    /// placeholder page. All failures are non-fatal and returned as warnings.
    pub async fn provision(&self, root: &str, page: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        let existed = self
            .runner
            .run("test", &["-d".to_string(), root.to_string()])
            .await
            .success;

        let mkdir = self
            .runner
            .run("mkdir", &["-p".to_string(), root.to_string()])
            .await;
        if !mkdir.success {
            warnings.push(format!(
                "Failed to create content directory {}: {}",
                root,
                mkdir.detail()
            ));
            return warnings;
        }

        if let Some(owner) = &self.owner {
            let chown = self
                .runner
                .run(
                    "chown",
                    &["-R".to_string(), owner.clone(), root.to_string()],
                )
                .await;
            if !chown.success {
                warnings.push(format!(
                    "Failed to change owner of {}: {}",
                    root,
                    chown.detail()
                ));
            }
        }

        if !existed {
            let index = format!("{}/index.html", root.trim_end_matches('/'));
            let install =
                staging::install_file(self.runner.as_ref(), &self.staging_dir, &index, page).await;
            if !install.success {
                warnings.push(format!(
                    "Failed to install placeholder page at {}: {}",
                    index,
                    install.detail()
                ));
            } else if let Some(owner) = &self.owner {
                let chown = self.runner.run("chown", &[owner.clone(), index]).await;
                if !chown.success {
                    warnings.push(format!(
                        "Failed to change owner of placeholder page: {}",
                        chown.detail()
                    ));
                }
            }
            debug!(root = %root, "Content directory provisioned");
        }

        warnings
    }

    /// Remove `<workspace>/<base>` recursively. Refuses any resolved path
    /// not strictly contained in the workspace root.
    pub async fn remove(&self, base: &str) -> Vec<String> {
        let dir = self.workspace_root.join(base);

        if !is_contained(&self.workspace_root, &dir) {
            warn!(dir = %dir.display(), "Refusing to remove directory outside workspace root");
            return vec![format!(
                "Refused to remove {}: outside the workspace root",
                dir.display()
            )];
        }

        let output = self
            .runner
            .run("rm", &["-rf".to_string(), dir.display().to_string()])
            .await;
        if output.success {
            Vec::new()
        } else {
            vec![format!(
                "Failed to remove content directory {}: {}",
                dir.display(),
                output.detail()
            )]
        }
    }
}

/// Strict lexical containment: `dir` must be below `root` and free of any
/// parent-directory components
fn is_contained(root: &Path, dir: &Path) -> bool {
    dir != root
        && dir.starts_with(root)
        && !dir
            .components()
            .any(|c| matches!(c, Component::ParentDir))
}
