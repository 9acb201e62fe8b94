//! # faasctl Library
//!
//! Core library functionality for the faasctl tool: the function engine
//! REST client in [`client`] and the command surface in [`commands`].

use clap::Parser;

pub mod client;
pub mod commands;
pub mod config;
pub mod filters;
pub mod output;
pub mod package;

/// Command-line client for serverless function engines
///
/// faasctl manages the full control-plane surface of a function engine:
/// runtimes, functions and their versions, aliases, executions,
/// scheduled jobs, webhooks, and the worker pools backing it all. Each
/// verb maps onto a single REST call against the configured endpoint.
#[derive(Parser, Debug)]
#[command(
    name = "faasctl",
    version,
    about = "Command-line client for serverless function engines",
    long_about = "A command-line client for serverless function engines.\n\nManage runtimes, functions, versions, aliases, executions, scheduled jobs and\nwebhooks over the control-plane REST API. Endpoints and credentials come from\nprofiles in the config file, the FAAS_ENDPOINT/FAAS_TOKEN environment\nvariables, or the --endpoint flag."
)]
pub struct Cli {
    /// Profile name from the config file
    #[arg(long, global = true)]
    pub profile: Option<String>,
    /// Endpoint URL, overriding any profile
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
    #[command(subcommand)]
    pub cmd: Option<commands::Commands>,
}
