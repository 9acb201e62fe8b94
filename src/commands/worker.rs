use anyhow::Result;
use clap::Subcommand;

use crate::client::Client;
use crate::output;

use super::FilterArgs;

#[derive(Subcommand, Debug)]
pub enum WorkerCommands {
    /// List the workers backing a function
    List {
        function_id: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
}

pub async fn run(cmd: WorkerCommands, client: &Client) -> Result<()> {
    match cmd {
        WorkerCommands::List {
            function_id,
            filters,
        } => {
            let filters = filters.parse()?;
            let workers = client.workers().list(&function_id, &filters).await?;
            output::print_list(output::WORKER_COLUMNS, &workers);
        }
    }
    Ok(())
}
