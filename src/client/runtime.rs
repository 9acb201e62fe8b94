use serde::Serialize;

use super::base::{with_query, ManagerCore, Resource};
use super::error::ApiError;

const COLLECTION: &str = "/v1/runtimes";

/// Create body. `name` and `description` are omitted from the document
/// entirely when unset; the flags are always present.
#[derive(Debug, Serialize)]
pub struct RuntimeCreate {
    pub image: String,
    pub is_public: bool,
    pub trusted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RuntimeCreate {
    /// New public, trusted runtime from an image.
    pub fn new(image: impl Into<String>) -> Self {
        RuntimeCreate {
            image: image.into(),
            is_public: true,
            trusted: true,
            name: None,
            description: None,
        }
    }
}

pub struct RuntimeManager<'a> {
    pub(crate) core: ManagerCore<'a>,
}

impl RuntimeManager<'_> {
    pub async fn list(&self, filters: &[(String, String)]) -> Result<Vec<Resource>, ApiError> {
        self.core
            .list(&with_query(COLLECTION, filters), "runtimes")
            .await
    }

    pub async fn create(&self, body: &RuntimeCreate) -> Result<Resource, ApiError> {
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

    /// Pool status of the runtime's backing workers.
    pub async fn get_pool(&self, id: &str) -> Result<Resource, ApiError> {
        self.core.get(&format!("{COLLECTION}/{id}/pool")).await
    }

    /// Resolve a runtime name to its resource.
    pub async fn find(&self, name: &str) -> Result<Resource, ApiError> {
        self.core
            .find_by_name(COLLECTION, "runtimes", "runtime", name)
            .await
    }
}
