use serde::Serialize;

use super::base::{with_query, ManagerCore, Resource};
use super::error::ApiError;

const COLLECTION: &str = "/v1/aliases";

/// Create body: every field is always present. The version defaults to 0
/// (the unversioned function) and the description to the empty string.
#[derive(Debug, Serialize)]
pub struct AliasCreate {
    pub name: String,
    pub function_id: String,
    pub function_version: i64,
    pub description: String,
}

/// Update body: all three updatable fields are sent, null when unset.
#[derive(Debug, Default, Serialize)]
pub struct AliasUpdate {
    pub function_id: Option<String>,
    pub function_version: Option<i64>,
    pub description: Option<String>,
}

/// Aliases are keyed by name, not id.
pub struct FunctionAliasManager<'a> {
    pub(crate) core: ManagerCore<'a>,
}

impl FunctionAliasManager<'_> {
    pub async fn list(&self, filters: &[(String, String)]) -> Result<Vec<Resource>, ApiError> {
        self.core
            .list(&with_query(COLLECTION, filters), "function_aliases")
            .await
    }

    pub async fn create(&self, body: &AliasCreate) -> Result<Resource, ApiError> {
        self.core
            .create(COLLECTION, serde_json::to_value(body)?)
            .await
    }

    pub async fn delete(&self, name: &str) -> Result<(), ApiError> {
        self.core.delete(&format!("{COLLECTION}/{name}")).await
    }

    pub async fn get(&self, name: &str) -> Result<Resource, ApiError> {
        self.core.get(&format!("{COLLECTION}/{name}")).await
    }

    pub async fn update(&self, name: &str, body: &AliasUpdate) -> Result<Resource, ApiError> {
        self.core
            .update(&format!("{COLLECTION}/{name}"), serde_json::to_value(body)?)
            .await
    }
}
