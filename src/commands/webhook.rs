use anyhow::Result;
use clap::{Args, Subcommand};

use crate::client::{Client, WebhookCreate, WebhookUpdate};
use crate::output;

use super::{resolve_function_id, FilterArgs};

/// Exactly one of the two updatable fields must be given; the other
/// still travels as null.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct WebhookUpdateFields {
    /// Function ID
    #[arg(long)]
    function_id: Option<String>,
    /// Webhook description
    #[arg(long)]
    description: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum WebhookCommands {
    /// List webhooks
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Create a webhook bound to a function
    Create {
        /// Function ID or name
        function: String,
        /// Function version number
        #[arg(long, default_value_t = 0)]
        function_version: i64,
        /// Webhook description
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete one or more webhooks by id
    Delete {
        #[arg(required = true, value_name = "WEBHOOK")]
        webhook: Vec<String>,
    },
    /// Show one webhook
    Show { webhook: String },
    /// Rebind or describe an existing webhook
    Update {
        /// Webhook ID
        id: String,
        #[command(flatten)]
        fields: WebhookUpdateFields,
    },
}

pub async fn run(cmd: WebhookCommands, client: &Client) -> Result<()> {
    match cmd {
        WebhookCommands::List { filters } => {
            let filters = filters.parse()?;
            let webhooks = client.webhooks().list(&filters).await?;
            output::print_list(output::WEBHOOK_COLUMNS, &webhooks);
        }
        WebhookCommands::Create {
            function,
            function_version,
            description,
        } => {
            let function_id = resolve_function_id(client, &function).await?;
            let webhook = client
                .webhooks()
                .create(&WebhookCreate {
                    function_id: Some(function_id),
                    function_version,
                    function_alias: None,
                    description,
                })
                .await?;
            output::print_detail(output::WEBHOOK_COLUMNS, &webhook);
        }
        WebhookCommands::Delete { webhook } => {
            let api = client.webhooks();
            super::delete_each("webhook", &webhook, |id| api.delete(id)).await?;
        }
        WebhookCommands::Show { webhook } => {
            let webhook = client.webhooks().get(&webhook).await?;
            output::print_detail(output::WEBHOOK_COLUMNS, &webhook);
        }
        WebhookCommands::Update { id, fields } => {
            let webhook = client
                .webhooks()
                .update(
                    &id,
                    &WebhookUpdate {
                        function_id: fields.function_id,
                        function_version: None,
                        description: fields.description,
                    },
                )
                .await?;
            output::print_detail(output::WEBHOOK_COLUMNS, &webhook);
        }
    }
    Ok(())
}
