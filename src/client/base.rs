use bytes::Bytes;
use reqwest::Method;
use serde_json::{Map, Value};

use super::error::ApiError;
use super::transport::Transport;

/// Read-only view over one decoded JSON object returned by the server.
///
/// Field values are exactly what the server sent; nothing is derived or
/// validated on the client side. Instances are built right after a
/// successful decode and never mutated.
#[derive(Debug, Clone)]
pub struct Resource {
    fields: Map<String, Value>,
}

impl Resource {
    pub(crate) fn from_value(value: Value) -> Result<Self, ApiError> {
        match value {
            Value::Object(fields) => Ok(Resource { fields }),
            other => Err(ApiError::InvalidResponse(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    /// Look up a field by name. Unknown fields are an error, never a
    /// silent null.
    pub fn get(&self, name: &str) -> Result<&Value, ApiError> {
        self.fields
            .get(name)
            .ok_or_else(|| ApiError::MissingField(name.to_string()))
    }

    /// Render a field for table output: absent and null fields come out
    /// empty, strings lose their quotes, everything else is compact JSON.
    pub fn display(&self, name: &str) -> String {
        match self.fields.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Copy of the underlying field map.
    pub fn to_map(&self) -> Map<String, Value> {
        self.fields.clone()
    }
}

/// Append ordered `key=value` filter pairs to a collection path. The bare
/// path is returned when there are no filters; pair order is preserved
/// exactly as given (CLI argument order).
pub(crate) fn with_query(path: &str, filters: &[(String, String)]) -> String {
    if filters.is_empty() {
        return path.to_string();
    }
    let pairs: Vec<String> = filters.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{}?{}", path, pairs.join("&"))
}

/// Shared CRUD primitives over the transport. Every per-resource manager
/// is a thin wrapper holding one of these plus its URL templates; the
/// managers themselves stay stateless.
#[derive(Clone, Copy)]
pub(crate) struct ManagerCore<'a> {
    pub(crate) transport: &'a Transport,
}

impl ManagerCore<'_> {
    /// GET a collection; the response object must carry `response_key`
    /// with an array. Element order is preserved exactly as returned.
    pub(crate) async fn list(
        &self,
        path: &str,
        response_key: &str,
    ) -> Result<Vec<Resource>, ApiError> {
        let resp = self.transport.request(path, Method::GET, None, None).await?;
        let body: Value = resp.json().await?;
        let items = body
            .get(response_key)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ApiError::InvalidResponse(format!("response has no '{response_key}' list"))
            })?;
        items.iter().cloned().map(Resource::from_value).collect()
    }

    /// POST a JSON body; decodes one resource from the full response.
    pub(crate) async fn create(&self, path: &str, data: Value) -> Result<Resource, ApiError> {
        let resp = self
            .transport
            .request(path, Method::POST, Some(data), None)
            .await?;
        Resource::from_value(resp.json().await?)
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Resource, ApiError> {
        let resp = self.transport.request(path, Method::GET, None, None).await?;
        Resource::from_value(resp.json().await?)
    }

    /// GET skipping JSON decoding entirely; used for execution logs and
    /// package downloads.
    pub(crate) async fn get_raw(&self, path: &str) -> Result<Bytes, ApiError> {
        let resp = self.transport.request(path, Method::GET, None, None).await?;
        Ok(resp.bytes().await?)
    }

    /// PUT a JSON body; decodes one resource from the full response.
    pub(crate) async fn update(&self, path: &str, data: Value) -> Result<Resource, ApiError> {
        let resp = self
            .transport
            .request(path, Method::PUT, Some(data), None)
            .await?;
        Resource::from_value(resp.json().await?)
    }

    /// DELETE; success is solely the absence of an error, any body is
    /// ignored.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.transport
            .request(path, Method::DELETE, None, None)
            .await?;
        Ok(())
    }

    /// Resolve a human-readable name to exactly one resource. Zero and
    /// multiple matches are distinct errors, both distinct from any
    /// transport failure.
    pub(crate) async fn find_by_name(
        &self,
        path: &str,
        response_key: &str,
        kind: &'static str,
        name: &str,
    ) -> Result<Resource, ApiError> {
        let all = self.list(path, response_key).await?;
        let mut matches: Vec<Resource> = all
            .into_iter()
            .filter(|r| matches!(r.fields.get("name"), Some(Value::String(s)) if s == name))
            .collect();

        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(ApiError::NoMatch {
                kind,
                name: name.to_string(),
            }),
            _ => Err(ApiError::MultipleMatches {
                kind,
                name: name.to_string(),
            }),
        }
    }
}
