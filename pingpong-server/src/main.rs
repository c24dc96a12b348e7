use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pingpong_server::{serve, ServerConfig};

/// Server command-line arguments
#[derive(Parser, Debug)]
#[command(name = "pingpong-server", about = "Minimal health/ping HTTP server")]
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
    init_tracing();

    let args = Args::parse();
    let config = ServerConfig {
        host: args.bind,
        port: args.port,
    };

    serve(config).await
}
