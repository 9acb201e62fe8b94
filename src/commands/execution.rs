use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use serde_json::{json, Value};

use crate::client::{Client, ExecutionCreate};
use crate::output;

use super::{resolve_function_id, FilterArgs};

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ExecutionMode {
    /// Run the execution synchronously
    #[arg(long)]
    sync: bool,
    /// Run the execution asynchronously
    #[arg(long = "async")]
    asynchronous: bool,
}

impl ExecutionMode {
    fn is_sync(&self) -> bool {
        self.sync && !self.asynchronous
    }
}

#[derive(Subcommand, Debug)]
pub enum ExecutionCommands {
    /// List executions
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Invoke a function
    Create {
        /// Function ID or name
        function: String,
        /// Function version number
        #[arg(long, default_value_t = 0)]
        function_version: i64,
        /// Input for the function, as a JSON document
        #[arg(long)]
        input: Option<String>,
        #[command(flatten)]
        mode: ExecutionMode,
    },
    /// Delete one or more executions by id
    Delete {
        #[arg(required = true, value_name = "EXECUTION")]
        execution: Vec<String>,
    },
    /// Show one execution
    Show { execution: String },
    /// Print an execution's log output
    Log { execution: String },
}

pub async fn run(cmd: ExecutionCommands, client: &Client) -> Result<()> {
    match cmd {
        ExecutionCommands::List { filters } => {
            let filters = filters.parse()?;
            let executions = client.executions().list(&filters).await?;
            output::print_list(output::EXECUTION_COLUMNS, &executions);
        }
        ExecutionCommands::Create {
            function,
            function_version,
            input,
            mode,
        } => {
            let input = match input {
                Some(raw) => serde_json::from_str::<Value>(&raw)
                    .map_err(|_| anyhow!("Input is not a valid JSON document: {raw}"))?,
                None => json!({}),
            };
            let function_id = resolve_function_id(client, &function).await?;

            let execution = client
                .executions()
                .create(&ExecutionCreate {
                    function_id: Some(function_id),
                    function_version,
                    function_alias: None,
                    sync: mode.is_sync(),
                    input: Some(input),
                })
                .await?;
            output::print_detail(output::EXECUTION_COLUMNS, &execution);
        }
        ExecutionCommands::Delete { execution } => {
            let api = client.executions();
            super::delete_each("execution", &execution, |id| api.delete(id)).await?;
        }
        ExecutionCommands::Show { execution } => {
            let execution = client.executions().get(&execution).await?;
            output::print_detail(output::EXECUTION_COLUMNS, &execution);
        }
        ExecutionCommands::Log { execution } => {
            let log = client.executions().get_log(&execution).await?;
            print!("{}", String::from_utf8_lossy(&log));
        }
    }
    Ok(())
}
