use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

use super::base::{with_query, ManagerCore, Resource};
use super::error::ApiError;

const COLLECTION: &str = "/v1/executions";

/// Create body: every field is always present, null when unset. Exactly
/// one of `function_id` / `function_alias` is expected to carry a value;
/// the engine rejects anything else.
#[derive(Debug, Serialize)]
pub struct ExecutionCreate {
    pub function_id: Option<String>,
    pub function_version: i64,
    pub function_alias: Option<String>,
    pub sync: bool,
    pub input: Option<Value>,
}

pub struct ExecutionManager<'a> {
    pub(crate) core: ManagerCore<'a>,
}

impl ExecutionManager<'_> {
    pub async fn list(&self, filters: &[(String, String)]) -> Result<Vec<Resource>, ApiError> {
        self.core
            .list(&with_query(COLLECTION, filters), "executions")
            .await
    }

    pub async fn create(&self, body: &ExecutionCreate) -> Result<Resource, ApiError> {
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

    /// The execution's log output, undecoded.
    pub async fn get_log(&self, id: &str) -> Result<Bytes, ApiError> {
        self.core.get_raw(&format!("{COLLECTION}/{id}/log")).await
    }
}
