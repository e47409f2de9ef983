use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mlassist::{build_router, prepare_frontend_dir, ChatController, Container, ProviderConfig};

#[derive(Parser)]
#[command(name = "mlassist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    #[arg(short, long, default_value_t = 8010)]
    port: u16,

    /// Directory served for every path other than `/chat`
    #[arg(long, default_value = "frontend")]
    frontend_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ProviderConfig::from_env()?;
    let container = Arc::new(Container::new(config)?);
    let provider = container.provider_config();
    info!(
        "Completion provider: {} (model {}, timeout {:?}, configured={})",
        provider.base_url(),
        provider.model(),
        provider.timeout(),
        provider.is_configured()
    );

    prepare_frontend_dir(&cli.frontend_dir).with_context(|| {
        format!(
            "failed to create frontend directory {}",
            cli.frontend_dir.display()
        )
    })?;

    let app = build_router(ChatController::new(container), &cli.frontend_dir);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", cli.host, cli.port))?;

    info!(
        "Python ML assistant listening on http://{} (frontend: {})",
        listener.local_addr()?,
        cli.frontend_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn defaults_listen_on_all_interfaces_port_8010() {
        let cli = Cli::try_parse_from(["mlassist"]).unwrap();
        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.port, 8010);
        assert_eq!(cli.frontend_dir, PathBuf::from("frontend"));
        assert!(!cli.verbose);
    }

    #[test]
    fn subcommands_are_not_accepted() {
        let res = Cli::try_parse_from(["mlassist", "serve"]);
        assert!(res.is_err(), "mlassist takes no subcommands");
    }
}
