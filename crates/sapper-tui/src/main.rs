//! Sapper TUI entry point.

use clap::Parser;
use sapper_tui::Runtime;
use tracing_subscriber::EnvFilter;

/// Sapper terminal game client
#[derive(Parser, Debug)]
#[command(name = "sapper-tui")]
#[command(about = "Terminal input client for the sapper game server")]
#[command(version)]
struct Args {
    /// Server address to connect to (host:port)
    ///
    /// If not provided, runs in practice mode with an in-process server.
    #[arg(short, long)]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr, controlled by RUST_LOG; the alternate screen keeps the
    // TUI itself on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let runtime = match args.server {
        Some(addr) => Runtime::with_server(addr).await?,
        None => Runtime::new()?,
    };

    Ok(runtime.run().await?)
}
