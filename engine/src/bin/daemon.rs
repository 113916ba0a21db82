//! nginx-managerd: administrative console daemon for the local web server

use clap::Parser;
use nm_engine::adapters::rest::{build_router, serve_on_tcp};
#[cfg(unix)]
use nm_engine::adapters::rest::serve_on_unix_socket;
use nm_engine::application::UseCaseRegistry;
use nm_engine::infrastructure::{
    Settings, SudoCommandRunner, SudoCredential, SystemctlSupervisor,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "nginx-managerd")]
#[command(about = "Local administrative console for nginx virtual hosts")]
struct Options {
    /// Path to a YAML settings file
    #[arg(long)]
    config: Option<String>,

    /// TCP listen address, overrides settings
    #[arg(long)]
    listen: Option<String>,

    /// Serve on a Unix domain socket instead of TCP
    #[arg(long)]
    unix_socket: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = Options::parse();

    let mut settings = Settings::resolve(options.config.as_deref())?;
    if let Some(listen) = options.listen {
        settings.http_addr = listen;
    }

    let credential = SudoCredential::from_env()?;
    let runner: Arc<dyn nm_engine::domain::ports::CommandRunner> =
        Arc::new(SudoCommandRunner::new(credential));
    let supervisor = Arc::new(SystemctlSupervisor::new(
        runner.clone(),
        settings.config_check.clone(),
    ));

    let registry = Arc::new(UseCaseRegistry::new(runner, supervisor, &settings));
    let app = build_router(registry);

    info!(
        service_unit = %settings.service_unit,
        sites_available = %settings.sites_available,
        "Starting daemon"
    );

    match options.unix_socket {
        #[cfg(unix)]
        Some(socket_path) => {
            serve_on_unix_socket(&socket_path, app, shutdown_signal()).await?;
        }
        #[cfg(not(unix))]
        Some(_) => {
            return Err("Unix sockets are not supported on this platform".into());
        }
        None => {
            let addr = settings
                .http_addr
                .parse()
                .map_err(|e| format!("Invalid listen address '{}': {}", settings.http_addr, e))?;
            serve_on_tcp(addr, app, shutdown_signal()).await?;
        }
    }

    info!("Daemon stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
