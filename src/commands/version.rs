use anyhow::{bail, Result};
use clap::Subcommand;

use crate::client::Client;
use crate::output;

use super::{resolve_function_id, FilterArgs};

#[derive(Subcommand, Debug)]
pub enum VersionCommands {
    /// List the versions of a function
    List {
        function_id: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Snapshot a function's current code and config as a new version
    Create {
        /// Function name or ID
        function: String,
        /// Description for the new version
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete one function version
    Delete {
        function_id: String,
        version_number: u32,
    },
    /// Show one function version
    Show {
        function_id: String,
        version_number: u32,
    },
    /// Release the workers assigned to a function version
    Detach {
        function_id: String,
        version_number: u32,
    },
}

pub async fn run(cmd: VersionCommands, client: &Client) -> Result<()> {
    match cmd {
        VersionCommands::List {
            function_id,
            filters,
        } => {
            let filters = filters.parse()?;
            let versions = client
                .function_versions()
                .list(&function_id, &filters)
                .await?;
            output::print_list(output::FUNCTION_VERSION_COLUMNS, &versions);
        }
        VersionCommands::Create {
            function,
            description,
        } => {
            let function_id = resolve_function_id(client, &function).await?;
            let version = client
                .function_versions()
                .create(&function_id, description.as_deref())
                .await?;
            output::print_detail(output::FUNCTION_VERSION_COLUMNS, &version);
        }
        VersionCommands::Delete {
            function_id,
            version_number,
        } => {
            client
                .function_versions()
                .delete(&function_id, version_number)
                .await?;
        }
        VersionCommands::Show {
            function_id,
            version_number,
        } => {
            let version = client
                .function_versions()
                .get(&function_id, version_number)
                .await?;
            output::print_detail(output::FUNCTION_VERSION_COLUMNS, &version);
        }
        VersionCommands::Detach {
            function_id,
            version_number,
        } => {
            if let Err(e) = client
                .function_versions()
                .detach(&function_id, version_number)
                .await
            {
                eprintln!("{e}");
                bail!("Unable to detach the specified function version.");
            }
            println!(
                "Request to detach function {function_id} (version {version_number}) has been accepted."
            );
        }
    }
    Ok(())
}
