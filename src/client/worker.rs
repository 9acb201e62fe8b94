use super::base::{with_query, ManagerCore, Resource};
use super::error::ApiError;

/// Workers are read-only: the engine assigns and reclaims them, clients
/// can only observe which ones back a function.
pub struct WorkerManager<'a> {
    pub(crate) core: ManagerCore<'a>,
}

impl WorkerManager<'_> {
    pub async fn list(
        &self,
        function_id: &str,
        filters: &[(String, String)],
    ) -> Result<Vec<Resource>, ApiError> {
        let path = format!("/v1/functions/{function_id}/workers");
        self.core.list(&with_query(&path, filters), "workers").await
    }
}
