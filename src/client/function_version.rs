use reqwest::Method;
use serde_json::json;

use super::base::{with_query, ManagerCore, Resource};
use super::error::ApiError;

fn versions_url(function_id: &str) -> String {
    format!("/v1/functions/{function_id}/versions")
}

pub struct FunctionVersionManager<'a> {
    pub(crate) core: ManagerCore<'a>,
}

impl FunctionVersionManager<'_> {
    pub async fn list(
        &self,
        function_id: &str,
        filters: &[(String, String)],
    ) -> Result<Vec<Resource>, ApiError> {
        self.core
            .list(
                &with_query(&versions_url(function_id), filters),
                "function_versions",
            )
            .await
    }

    /// Snapshot the function's current code and config. The description
    /// is always part of the body, null when not given.
    pub async fn create(
        &self,
        function_id: &str,
        description: Option<&str>,
    ) -> Result<Resource, ApiError> {
        self.core
            .create(
                &versions_url(function_id),
                json!({ "description": description }),
            )
            .await
    }

    pub async fn delete(&self, function_id: &str, version: u32) -> Result<(), ApiError> {
        self.core
            .delete(&format!("{}/{}", versions_url(function_id), version))
            .await
    }

    pub async fn get(&self, function_id: &str, version: u32) -> Result<Resource, ApiError> {
        self.core
            .get(&format!("{}/{}", versions_url(function_id), version))
            .await
    }

    /// Release the workers assigned to one version.
    pub async fn detach(&self, function_id: &str, version: u32) -> Result<(), ApiError> {
        self.core
            .transport
            .request(
                &format!("{}/{}/detach", versions_url(function_id), version),
                Method::POST,
                None,
                None,
            )
            .await?;
        Ok(())
    }
}
