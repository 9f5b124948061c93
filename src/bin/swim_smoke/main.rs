// ABOUTME: Smoke-test runner that exercises a live swim workout server over HTTP
// ABOUTME: Runs the reliability, rep-cap, and yards-conversion suites and exits non-zero on hard failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
//!
//! Usage:
//! ```bash
//! # Against a local server on the default port
//! swim-smoke
//!
//! # Against a deployed server with more trials
//! swim-smoke --base-url https://swim.example.com --trials 50
//!
//! # Against a server started with SWIM_MAX_REPS_PER_SET=12
//! swim-smoke --rep-cap 12
//! ```

mod suites;

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use swim_core::constants::{defaults, limits};
use swim_workout_server::logging::LoggingConfig;
use tracing::info;

use suites::SmokeClient;

#[derive(Parser)]
#[command(
    name = "swim-smoke",
    about = "Smoke tests for the swim workout server",
    long_about = "Sends repeated POST /generate-workout requests and checks response shape, rep counts, and yards conversion."
)]
struct Cli {
    /// Server base URL
    #[arg(long, default_value = "http://localhost:3000")]
    base_url: String,

    /// Requests per suite
    #[arg(long, default_value_t = 30)]
    trials: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Reps-per-set cap the server runs with (its `SWIM_MAX_REPS_PER_SET`)
    #[arg(
        long,
        default_value_t = defaults::MAX_REPS_PER_SET,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(limits::MAX_REPS_PER_SET_CEILING))
    )]
    rep_cap: u32,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    LoggingConfig {
        service_name: "swim-smoke".into(),
        ..LoggingConfig::from_env()
    }
    .init()?;

    let client = SmokeClient::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))
        .context("Failed to build HTTP client")?;
    info!(
        base_url = %cli.base_url,
        trials = cli.trials,
        rep_cap = cli.rep_cap,
        "running smoke suites"
    );

    let reports = vec![
        suites::reliability(&client, cli.trials).await,
        suites::rep_cap(&client, cli.trials, cli.rep_cap).await,
        suites::yards_conversion(&client, cli.trials).await,
    ];

    for report in &reports {
        println!("{report}");
    }

    let failed = reports.iter().filter(|report| report.has_hard_failure()).count();
    if failed == 0 {
        println!("All {} suites passed", reports.len());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{failed} of {} suites failed", reports.len());
        Ok(ExitCode::FAILURE)
    }
}
