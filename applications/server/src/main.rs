/// Play Server - song catalog and playlist REST back end
use clap::{Parser, Subcommand};
use play_server::{config::ServerConfig, router::create_router, state::AppState};
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "play-server")]
#[command(about = "Play song catalog and playlist server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Print every song in the catalog
    ListSongs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "play_server=info,play_storage=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            serve().await?;
        }
        Commands::ListSongs => {
            list_songs().await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Play Server ({} profile)", config.profile);
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let gateway = play_storage::connect(&config.storage.database_url).await?;
    tracing::info!("Database connected");

    // Build application state
    let app_state = AppState::new(Arc::new(gateway));

    // Build router
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_songs() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let gateway = play_storage::connect(&config.storage.database_url).await?;

    let songs = play_storage::songs::get_all(gateway.pool()).await?;

    println!("Songs:");
    for song in songs {
        println!(
            "  {} - {} by {} [{}] rated {}",
            song.id, song.name, song.artist_name, song.genre, song.song_rating
        );
    }

    Ok(())
}
