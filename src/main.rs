use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use fakeapi::infrastructure::faker::FakeFieldProvider;
use fakeapi::infrastructure::observability::{TracingConfig, init_tracing};
use fakeapi::presentation::{ApiConfig, Settings, SettingsOverrides, build_app};

#[derive(Parser)]
#[command(name = "fakeapi")]
#[command(about = "Create a fake API with auto-generated response data")]
struct Cli {
    /// Endpoint file (JSON, or YAML by extension) describing the mocked API
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Seed of the fake data generator; equal seeds give equal data
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Cli> for SettingsOverrides {
    fn from(cli: Cli) -> Self {
        Self {
            endpoints_file: cli.config,
            host: cli.host,
            port: cli.port,
            seed: cli.seed,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let overrides = SettingsOverrides::from(Cli::parse());
    let settings = Settings::load(&overrides).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging));

    let api_config = ApiConfig::load(&settings.endpoints_file).with_context(|| {
        format!(
            "Failed to load endpoints from {}",
            settings.endpoints_file.display()
        )
    })?;

    tracing::info!(
        endpoints = api_config.endpoints.len(),
        file = %settings.endpoints_file.display(),
        seed = settings.generator.seed,
        "Endpoint configuration loaded"
    );

    let provider = Arc::new(FakeFieldProvider::seeded(settings.generator.seed));
    let router = build_app(api_config, provider, settings.server.max_body_bytes);

    let listener = TcpListener::bind((settings.server.host.as_str(), settings.server.port))
        .await
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                settings.server.host, settings.server.port
            )
        })?;
    let addr: SocketAddr = listener.local_addr()?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
