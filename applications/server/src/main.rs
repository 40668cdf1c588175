/// Chatbot Admin API server
use chatbot_server::{api, config::ServerConfig, state::AppState};
use clap::Parser;
use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chatbot-server")]
#[command(about = "Chatbot onboarding admin API", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatbot_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Chatbot Admin API");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Connect to the document store; an unreachable store is fatal here.
    let db = chatbot_storage::connect(&config.mongodb.uri, &config.mongodb.database).await?;

    // Build application state (one store per collection)
    let state = AppState::new(&db);

    // Build router
    let app = api::router(state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
