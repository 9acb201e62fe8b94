use anyhow::Result;
use clap::Subcommand;

use crate::client::{Client, RuntimeCreate};
use crate::output;

use super::FilterArgs;

#[derive(Subcommand, Debug)]
pub enum RuntimeCommands {
    /// List runtimes
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Register a new runtime from a container image
    Create {
        /// Container image name used by the runtime
        image: String,
        /// Runtime name
        #[arg(long)]
        name: Option<String>,
        /// Runtime description
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete one or more runtimes by id
    Delete {
        #[arg(required = true, value_name = "RUNTIME")]
        runtime: Vec<String>,
    },
    /// Show one runtime
    Show { runtime: String },
    /// Show a runtime's worker pool status
    Pool { runtime: String },
}

pub async fn run(cmd: RuntimeCommands, client: &Client) -> Result<()> {
    match cmd {
        RuntimeCommands::List { filters } => {
            let filters = filters.parse()?;
            let runtimes = client.runtimes().list(&filters).await?;
            output::print_list(output::RUNTIME_COLUMNS, &runtimes);
        }
        RuntimeCommands::Create {
            image,
            name,
            description,
        } => {
            let mut body = RuntimeCreate::new(image);
            body.name = name;
            body.description = description;
            let runtime = client.runtimes().create(&body).await?;
            output::print_detail(output::RUNTIME_COLUMNS, &runtime);
        }
        RuntimeCommands::Delete { runtime } => {
            let api = client.runtimes();
            super::delete_each("runtime", &runtime, |id| api.delete(id)).await?;
        }
        RuntimeCommands::Show { runtime } => {
            let runtime = client.runtimes().get(&runtime).await?;
            output::print_detail(output::RUNTIME_COLUMNS, &runtime);
        }
        RuntimeCommands::Pool { runtime } => {
            let pool = client.runtimes().get_pool(&runtime).await?;
            output::print_detail(output::RUNTIME_POOL_COLUMNS, &pool);
        }
    }
    Ok(())
}
