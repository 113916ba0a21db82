//! Staged installation of file content through the privileged runner
//!
//! The daemon itself cannot write into privileged locations, so content is
//! written to a local staging file first and then copied into place with
//! elevation. The staging file is removed on every exit path.

use crate::domain::ports::{CommandOutput, CommandRunner};
use std::path::Path;
use uuid::Uuid;

pub(crate) async fn install_file(
    runner: &dyn CommandRunner,
    staging_dir: &Path,
    dest: &str,
    content: &str,
) -> CommandOutput {
    let temp = staging_dir.join(format!("stage-{}", Uuid::new_v4()));

    if let Err(e) = tokio::fs::write(&temp, content).await {
        return CommandOutput::failed(format!(
            "failed to stage content at {}: {}",
            temp.display(),
            e
        ));
    }

    let output = runner
        .run(
            "cp",
            &[temp.display().to_string(), dest.to_string()],
        )
        .await;

    let _ = tokio::fs::remove_file(&temp).await;

    output
}
