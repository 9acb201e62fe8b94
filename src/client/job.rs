use serde::Serialize;

use super::base::{with_query, ManagerCore, Resource};
use super::error::ApiError;

const COLLECTION: &str = "/v1/jobs";

/// Create body: every field is always serialized, unset fields as null.
/// Field order here is the documented wire order, do not reorder.
#[derive(Debug, Default, Serialize)]
pub struct JobCreate {
    pub function_alias: Option<String>,
    pub function_id: Option<String>,
    pub function_version: i64,
    pub name: Option<String>,
    pub first_execution_time: Option<String>,
    pub pattern: Option<String>,
    pub function_input: Option<String>,
    pub count: Option<i64>,
}

/// Update body: all five updatable fields travel on every update, null
/// when the caller left them out.
#[derive(Debug, Default, Serialize)]
pub struct JobUpdate {
    pub name: Option<String>,
    pub status: Option<String>,
    pub pattern: Option<String>,
    pub next_execution_time: Option<String>,
    pub function_input: Option<String>,
}

pub struct JobManager<'a> {
    pub(crate) core: ManagerCore<'a>,
}

impl JobManager<'_> {
    pub async fn list(&self, filters: &[(String, String)]) -> Result<Vec<Resource>, ApiError> {
        self.core.list(&with_query(COLLECTION, filters), "jobs").await
    }

    pub async fn create(&self, body: &JobCreate) -> Result<Resource, ApiError> {
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

    pub async fn update(&self, id: &str, body: &JobUpdate) -> Result<Resource, ApiError> {
        self.core
            .update(&format!("{COLLECTION}/{id}"), serde_json::to_value(body)?)
            .await
    }
}
