use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use pingpong_server_db::{serve, ServerConfig};

/// Server command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "pingpong-server-db",
    about = "Health/ping HTTP server with a MySQL table listing endpoint"
)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    // An unset DATABASE_URL is not fatal here; /tables reports it per request.
    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        warn!("DATABASE_URL is not set; /tables will return errors");
        String::new()
    });

    let config = ServerConfig {
        host: args.bind,
        port: args.port,
        database_url,
    };

    serve(config).await
}
