//! mockd server binary.
//!
//! Loads route definitions from a directory, builds the router, and
//! serves the registered mocks over HTTP/1.1.

use clap::Parser;
use mockd_core::config::load_definitions;
use mockd_core::routing::build_router;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod serve;

/// Configurable HTTP mock server.
///
/// Serves canned responses loaded from a directory of route
/// definition files, one file per route.
#[derive(Debug, Parser)]
#[command(name = "mockd", version)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    /// Directory holding route definition files
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let definitions = match load_definitions(&args.data_dir) {
        Ok(definitions) => definitions,
        Err(err) => {
            error!(error = %err, "failed to load route definitions");
            return ExitCode::FAILURE;
        }
    };

    let router = Arc::new(build_router(definitions));

    info!("############### ROUTES ################");
    for route in router.registered_routes() {
        info!("{route}");
    }
    info!("############### ROUTES ################");

    if let Err(err) = serve::serve(args.addr, router).await {
        error!(error = %err, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
