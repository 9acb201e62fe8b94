use anyhow::Result;
use clap::Subcommand;

use crate::client::{AliasCreate, AliasUpdate, Client};
use crate::output;

use super::{resolve_function_id, FilterArgs};

#[derive(Subcommand, Debug)]
pub enum AliasCommands {
    /// List function aliases
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Create an alias pointing at a function version
    Create {
        /// Alias name
        name: String,
        /// Function ID or name
        #[arg(long, required = true)]
        function: String,
        /// Function version number
        #[arg(long, default_value_t = 0)]
        function_version: i64,
        /// Description for the new alias
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete one or more aliases by name
    Delete {
        #[arg(required = true, value_name = "NAME")]
        name: Vec<String>,
    },
    /// Show one alias
    Show { name: String },
    /// Repoint or describe an existing alias
    Update {
        /// Alias name
        name: String,
        /// Function ID or name
        #[arg(long)]
        function: Option<String>,
        /// Function version number
        #[arg(long)]
        function_version: Option<i64>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },
}

pub async fn run(cmd: AliasCommands, client: &Client) -> Result<()> {
    match cmd {
        AliasCommands::List { filters } => {
            let filters = filters.parse()?;
            let aliases = client.aliases().list(&filters).await?;
            output::print_list(output::FUNCTION_ALIAS_COLUMNS, &aliases);
        }
        AliasCommands::Create {
            name,
            function,
            function_version,
            description,
        } => {
            let function_id = resolve_function_id(client, &function).await?;
            let alias = client
                .aliases()
                .create(&AliasCreate {
                    name,
                    function_id,
                    function_version,
                    description,
                })
                .await?;
            output::print_detail(output::FUNCTION_ALIAS_COLUMNS, &alias);
        }
        AliasCommands::Delete { name } => {
            let api = client.aliases();
            super::delete_each("function_alias", &name, |n| api.delete(n)).await?;
        }
        AliasCommands::Show { name } => {
            let alias = client.aliases().get(&name).await?;
            output::print_detail(output::FUNCTION_ALIAS_COLUMNS, &alias);
        }
        AliasCommands::Update {
            name,
            function,
            function_version,
            description,
        } => {
            let function_id = match function {
                Some(reference) => Some(resolve_function_id(client, &reference).await?),
                None => None,
            };
            let alias = client
                .aliases()
                .update(
                    &name,
                    &AliasUpdate {
                        function_id,
                        function_version,
                        description,
                    },
                )
                .await?;
            output::print_detail(output::FUNCTION_ALIAS_COLUMNS, &alias);
        }
    }
    Ok(())
}
