//! Drive RPC Server - JSON-RPC backend for the drive demo route.
//!
//! This binary seeds one directory registry and serves it over JSON-RPC 2.0
//! until it receives Ctrl-C. Nothing is kept across restarts.

mod handler;
mod server;
mod wrapper;

use anyhow::Result;
use clap::Parser;
use drive_core::{DirectoryRegistry, RpcConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "drive-rpc")]
#[command(about = "JSON-RPC server for the drive demo registry")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value_t = RpcConfig::DEFAULT_PORT)]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = RpcConfig::DEFAULT_HOST)]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("Starting Drive RPC Server");

    let registry = DirectoryRegistry::seeded();
    info!("Registry seeded with {} directories", registry.len());

    let addr = server::start_server(registry, &args.host, args.port).await?;

    // Intentional stdout: the front-end launcher reads the port from this line
    println!("{}{}", RpcConfig::PORT_ANNOUNCE_PREFIX, addr.port());

    info!("RPC server running on {}", addr);

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
