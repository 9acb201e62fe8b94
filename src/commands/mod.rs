use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use std::future::Future;

pub mod alias;
pub mod completions;
pub mod execution;
pub mod function;
pub mod job;
pub mod profile;
pub mod runtime;
pub mod version;
pub mod webhook;
pub mod worker;

use crate::client::{ApiError, Client};
use crate::config;
use crate::Cli;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage runtimes, the container images functions execute in
    #[command(subcommand)]
    Runtime(runtime::RuntimeCommands),
    /// Manage functions (code packages, object-store refs or images)
    #[command(subcommand)]
    Function(function::FunctionCommands),
    /// Manage immutable function versions
    #[command(subcommand)]
    Version(version::VersionCommands),
    /// Manage named aliases pointing at function versions
    #[command(subcommand)]
    Alias(alias::AliasCommands),
    /// Invoke functions and inspect past executions
    #[command(subcommand)]
    Execution(execution::ExecutionCommands),
    /// Manage scheduled jobs
    #[command(subcommand)]
    Job(job::JobCommands),
    /// Manage HTTP-triggerable webhooks
    #[command(subcommand)]
    Webhook(webhook::WebhookCommands),
    /// Inspect the workers backing a function
    #[command(subcommand)]
    Worker(worker::WorkerCommands),
    /// Manage endpoint profiles in the config file (no network)
    #[command(subcommand)]
    Profile(profile::ProfileCommands),
    /// Emit shell completion scripts (bash/zsh/fish)
    Completions { shell: String },
}

pub async fn run(cli: Cli, cmd: Commands) -> Result<()> {
    match cmd {
        // These never talk to the engine, so no client is built for them.
        Commands::Profile(cmd) => return profile::run(cmd).await,
        Commands::Completions { shell } => return completions::run(shell),
        _ => {}
    }

    let global = config::load_global_config()?;
    let resolved =
        config::resolve_profile(&global, cli.profile.as_deref(), cli.endpoint.as_deref())?;
    let client = Client::new(&resolved)?;

    match cmd {
        Commands::Runtime(cmd) => runtime::run(cmd, &client).await,
        Commands::Function(cmd) => function::run(cmd, &client).await,
        Commands::Version(cmd) => version::run(cmd, &client).await,
        Commands::Alias(cmd) => alias::run(cmd, &client).await,
        Commands::Execution(cmd) => execution::run(cmd, &client).await,
        Commands::Job(cmd) => job::run(cmd, &client).await,
        Commands::Webhook(cmd) => webhook::run(cmd, &client).await,
        Commands::Worker(cmd) => worker::run(cmd, &client).await,
        Commands::Profile(_) | Commands::Completions { .. } => unreachable!(),
    }
}

/// Repeated `--filter key=op:value` arguments shared by the list verbs.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    #[arg(long = "filter", value_name = "KEY=OP:VALUE")]
    pub filters: Vec<String>,
}

impl FilterArgs {
    pub fn parse(&self) -> Result<Vec<(String, String)>> {
        crate::filters::parse_filters(&self.filters)
    }
}

/// Delete several resources one at a time. Failures are printed as they
/// happen, successes acknowledged individually, and after every id was
/// attempted a single aggregate error is raised if anything failed.
/// The first failure never short-circuits the remaining ids.
pub async fn delete_each<'a, F, Fut>(resource: &str, ids: &'a [String], delete: F) -> Result<()>
where
    F: Fn(&'a str) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let mut failed = false;
    for id in ids {
        match delete(id.as_str()).await {
            Ok(()) => println!("Request to delete {resource} {id} has been accepted."),
            Err(e) => {
                failed = true;
                eprintln!("{e}");
            }
        }
    }
    if failed {
        bail!("Unable to delete the specified {resource}(s).");
    }
    Ok(())
}

/// Resolve a function reference that may be an id or a name. Anything
/// that parses as a UUID is passed through untouched.
pub(crate) async fn resolve_function_id(client: &Client, reference: &str) -> Result<String> {
    if uuid::Uuid::parse_str(reference).is_ok() {
        return Ok(reference.to_string());
    }
    let function = client.functions().find(reference).await?;
    Ok(function.get("id")?.as_str().unwrap_or_default().to_string())
}
