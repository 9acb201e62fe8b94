//! # faasctl
//!
//! A command-line client for serverless function engines.
//!
//! Every verb maps onto one REST call against the engine's control
//! plane: function registration and packaging, immutable versions,
//! named aliases, synchronous and asynchronous executions, cron jobs,
//! webhooks, and runtime worker pools.
//!
//! ## Quick Start
//!
//! ```bash
//! # Point at an engine
//! export FAAS_ENDPOINT=http://localhost:7070
//!
//! # Register a runtime and a function
//! faasctl runtime create python3:latest --name py3
//! faasctl function create --runtime <runtime-id> --file hello.py
//!
//! # Invoke it
//! faasctl execution create <function-id> --sync --input '{"name": "world"}'
//! ```
//!
//! ## Configuration
//!
//! Endpoints live in `~/.config/faasctl/config.yaml` (see `faasctl
//! profile add`), or come from `--endpoint` / `FAAS_ENDPOINT` directly.
//! Set `RUST_LOG=faasctl=debug` to see each outgoing request.

use anyhow::Result;
use clap::Parser;
use faasctl::{commands, Cli};
use tracing_subscriber::EnvFilter;

/// Main entry point for faasctl
///
/// Parses command-line arguments and delegates to the appropriate
/// command handler. If no command is provided, displays an error
/// message and exits.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut cli = Cli::parse();
    let cmd = match cli.cmd.take() {
        Some(cmd) => cmd,
        None => {
            eprintln!("No command provided. Use --help to see available commands.");
            std::process::exit(1);
        }
    };
    commands::run(cli, cmd).await
}
