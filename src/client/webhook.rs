use serde::Serialize;

use super::base::{with_query, ManagerCore, Resource};
use super::error::ApiError;

const COLLECTION: &str = "/v1/webhooks";

/// Create body: the function reference fields are always present (null
/// when unset); the description only travels when given. Exactly one of
/// `function_id` / `function_alias` is expected to carry a value.
#[derive(Debug, Serialize)]
pub struct WebhookCreate {
    pub function_id: Option<String>,
    pub function_version: i64,
    pub function_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Update body: `function_id` and `description` are both always present,
/// null when unset; the engine has always been sent the unfiltered pair.
/// `function_version` only travels when given.
#[derive(Debug, Default, Serialize)]
pub struct WebhookUpdate {
    pub function_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_version: Option<i64>,
    pub description: Option<String>,
}

pub struct WebhookManager<'a> {
    pub(crate) core: ManagerCore<'a>,
}

impl WebhookManager<'_> {
    pub async fn list(&self, filters: &[(String, String)]) -> Result<Vec<Resource>, ApiError> {
        self.core
            .list(&with_query(COLLECTION, filters), "webhooks")
            .await
    }

    pub async fn create(&self, body: &WebhookCreate) -> Result<Resource, ApiError> {
        self.core
            .create(COLLECTION, serde_json::to_value(body)?)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.core.delete(&format!("{COLLECTION}/{id}")).await
    }

    pub async fn get(&self, id: &str) -> Result<Resource, ApiError> {
        self.core.get(&format!("{COLLECTION}/{id}")).await
    }

    pub async fn update(&self, id: &str, body: &WebhookUpdate) -> Result<Resource, ApiError> {
        self.core
            .update(&format!("{COLLECTION}/{id}"), serde_json::to_value(body)?)
            .await
    }
}
