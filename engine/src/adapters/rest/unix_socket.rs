//! Transport support for the REST adapter
//!
//! Serves the router over TCP (default) or a Unix domain socket.

use axum::Router;
use std::future::Future;
use std::path::Path;
use tracing::{info, warn};

#[cfg(unix)]
use hyper::server::accept;
#[cfg(unix)]
use tokio::net::UnixListener;
#[cfg(unix)]
use tokio_stream::wrappers::UnixListenerStream;

/// Serve the API on a Unix socket
///
/// Preferred for local daemon communication: no network port consumption,
/// filesystem-based permissions.
#[cfg(unix)]
pub async fn serve_on_unix_socket(
    socket_path: &str,
    app: Router,
    shutdown: impl Future<Output = ()>,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(socket_path);

    // Remove a stale socket file from a previous run
    if path.exists() {
        info!("Removing existing socket file: {}", socket_path);
        std::fs::remove_file(path)?;
    }

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            info!("Creating socket directory: {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }

    let listener = UnixListener::bind(socket_path)?;

    // 0660: owner and group only
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o660);
        std::fs::set_permissions(socket_path, permissions)?;
    }

    info!("API server listening on Unix socket: {}", socket_path);

    let stream = UnixListenerStream::new(listener);
    axum::Server::builder(accept::from_stream(stream))
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;

    if path.exists() {
        warn!("Cleaning up socket file: {}", socket_path);
        let _ = std::fs::remove_file(path);
    }

    Ok(())
}

/// Serve the API on TCP
pub async fn serve_on_tcp(
    addr: std::net::SocketAddr,
    app: Router,
    shutdown: impl Future<Output = ()>,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("API server listening on TCP {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
