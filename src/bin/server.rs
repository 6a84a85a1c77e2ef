use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cabletv::config::ServerConfig;
use cabletv::{db, web};

#[derive(Parser, Debug)]
#[command(author, version, about = "HTTP gateway for the CableTV_DBMS engine", long_about = None)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<String>,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx::query=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    init_logging();

    let config = match ServerConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load server configuration: {}", e);
            return Err(e.into());
        }
    };

    // The gateway is useless without its engine: refuse to start.
    let pool = match db::connect(&config.database_url, config.max_connections).await {
        Ok(pool) => {
            info!("Connected to the CableTV_DBMS engine.");
            pool
        }
        Err(e) => {
            error!(error = %e, "Failed to connect to the database engine.");
            return Err(e.into());
        }
    };

    let app = web::create_router(pool);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(address = %config.listen_addr, "Gateway listening");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
