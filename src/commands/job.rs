use anyhow::{bail, Result};
use chrono::NaiveDateTime;
use clap::Subcommand;

use crate::client::{Client, JobCreate, JobUpdate};
use crate::output;

use super::{resolve_function_id, FilterArgs};

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Subcommand, Debug)]
pub enum JobCommands {
    /// List jobs
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Schedule a new job
    Create {
        /// Function ID or name
        function: String,
        /// Function version number
        #[arg(long, default_value_t = 0)]
        function_version: i64,
        /// Job name
        #[arg(long)]
        name: Option<String>,
        /// The earliest execution time (UTC) for the job
        #[arg(long)]
        first_execution_time: Option<String>,
        /// The cron pattern for job execution
        #[arg(long)]
        pattern: Option<String>,
        /// Function input
        #[arg(long)]
        function_input: Option<String>,
        /// Expected number of executions triggered by the job
        #[arg(long)]
        count: Option<i64>,
    },
    /// Delete one or more jobs by id
    Delete {
        #[arg(required = true, value_name = "JOB")]
        job: Vec<String>,
    },
    /// Show one job
    Show { job: String },
    /// Update a job's schedule or status
    Update {
        /// Job ID
        id: String,
        /// Job name
        #[arg(long)]
        name: Option<String>,
        /// Job status
        #[arg(long, value_parser = ["running", "paused", "done", "cancelled"])]
        status: Option<String>,
        /// The next execution time (UTC) for the job
        #[arg(long)]
        next_execution_time: Option<String>,
        /// The cron pattern for job execution
        #[arg(long)]
        pattern: Option<String>,
        /// Function input
        #[arg(long)]
        function_input: Option<String>,
    },
}

pub async fn run(cmd: JobCommands, client: &Client) -> Result<()> {
    match cmd {
        JobCommands::List { filters } => {
            let filters = filters.parse()?;
            let jobs = client.jobs().list(&filters).await?;
            output::print_list(output::JOB_COLUMNS, &jobs);
        }
        JobCommands::Create {
            function,
            function_version,
            name,
            first_execution_time,
            pattern,
            function_input,
            count,
        } => {
            if let Some(time) = &first_execution_time {
                validate_execution_time(time)?;
            }
            let function_id = resolve_function_id(client, &function).await?;

            let job = client
                .jobs()
                .create(&JobCreate {
                    function_alias: None,
                    function_id: Some(function_id),
                    function_version,
                    name,
                    first_execution_time,
                    pattern,
                    function_input,
                    count,
                })
                .await?;
            output::print_detail(output::JOB_COLUMNS, &job);
        }
        JobCommands::Delete { job } => {
            let api = client.jobs();
            super::delete_each("job", &job, |id| api.delete(id)).await?;
        }
        JobCommands::Show { job } => {
            let job = client.jobs().get(&job).await?;
            output::print_detail(output::JOB_COLUMNS, &job);
        }
        JobCommands::Update {
            id,
            name,
            status,
            next_execution_time,
            pattern,
            function_input,
        } => {
            if let Some(time) = &next_execution_time {
                validate_execution_time(time)?;
            }
            let job = client
                .jobs()
                .update(
                    &id,
                    &JobUpdate {
                        name,
                        status,
                        pattern,
                        next_execution_time,
                        function_input,
                    },
                )
                .await?;
            output::print_detail(output::JOB_COLUMNS, &job);
        }
    }
    Ok(())
}

/// Execution times travel as `YYYY-MM-DDThh:mm:ss` (UTC); reject anything
/// else before a request goes out.
fn validate_execution_time(value: &str) -> Result<()> {
    if NaiveDateTime::parse_from_str(value, TIME_FORMAT).is_err() {
        bail!("Execution time must look like 2018-08-16T08:00:00, got '{value}'.");
    }
    Ok(())
}
