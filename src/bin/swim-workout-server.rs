// ABOUTME: Server binary for the swim workout generator HTTP service
// ABOUTME: Loads environment configuration, applies CLI overrides, initializes logging, and serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Swim Workout Server Binary
//!
//! ```bash
//! HTTP_PORT=8080 swim-workout-server --static-root ./public
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use swim_workout_server::{config::environment::ServerConfig, logging, server};
use tracing::info;

#[derive(Parser)]
#[command(name = "swim-workout-server")]
#[command(about = "Swim workout generator - builds pool-aware workouts over HTTP")]
struct Args {
    /// Override HTTP port
    #[arg(long, visible_alias = "http-port")]
    port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Directory holding index.html and styles.css
    #[arg(long)]
    static_root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(host) = args.host {
        config.http_host = host;
    }
    if let Some(static_root) = args.static_root {
        config.static_root = static_root;
    }

    info!("{}", config.summary());
    server::run(config).await
}
