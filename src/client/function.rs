use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;
use serde_json::{json, Map, Value};

use super::base::{with_query, ManagerCore, Resource};
use super::error::ApiError;

const COLLECTION: &str = "/v1/functions";

/// Where a function's code comes from.
///
/// The descriptor is JSON-serialized to a *string* before it enters the
/// request body: multipart text parts cannot carry nested objects, and
/// the engine expects the same string form on the pure-JSON path.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum FunctionCode {
    /// Uploaded zip package. The checksum is present on create and
    /// omitted on update, where only the source marker is sent.
    Package {
        #[serde(skip_serializing_if = "Option::is_none")]
        md5sum: Option<String>,
    },
    /// Object-store reference.
    Swift { swift: SwiftObject },
    /// Container image.
    Image { image: String },
}

impl FunctionCode {
    fn to_json_string(&self) -> Result<String, ApiError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SwiftObject {
    pub container: Option<String>,
    pub object: Option<String>,
}

/// Optional function metadata shared by create and update. Unset fields
/// never enter the request body.
#[derive(Debug, Default)]
pub struct FunctionSpec {
    pub name: Option<String>,
    pub description: Option<String>,
    pub entry: Option<String>,
    pub cpu: Option<i64>,
    pub memory_size: Option<i64>,
}

impl FunctionSpec {
    fn fill(&self, data: &mut Map<String, Value>) {
        if let Some(name) = &self.name {
            data.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(description) = &self.description {
            data.insert("description".to_string(), Value::String(description.clone()));
        }
        if let Some(entry) = &self.entry {
            data.insert("entry".to_string(), Value::String(entry.clone()));
        }
        if let Some(cpu) = self.cpu {
            data.insert("cpu".to_string(), cpu.into());
        }
        if let Some(memory_size) = self.memory_size {
            data.insert("memory_size".to_string(), memory_size.into());
        }
    }
}

pub struct FunctionManager<'a> {
    pub(crate) core: ManagerCore<'a>,
}

impl FunctionManager<'_> {
    pub async fn list(&self, filters: &[(String, String)]) -> Result<Vec<Resource>, ApiError> {
        self.core
            .list(&with_query(COLLECTION, filters), "functions")
            .await
    }

    /// Register a function. With a package the request is multipart with
    /// a single `package` file part; without one it is a plain JSON body.
    /// `runtime_id` is part of the document even when absent (image-based
    /// functions carry it as null).
    pub async fn create(
        &self,
        runtime_id: Option<&str>,
        code: &FunctionCode,
        package: Option<Vec<u8>>,
        spec: &FunctionSpec,
    ) -> Result<Resource, ApiError> {
        let mut data = Map::new();
        data.insert(
            "runtime_id".to_string(),
            runtime_id.map_or(Value::Null, |r| Value::String(r.to_string())),
        );
        data.insert("code".to_string(), Value::String(code.to_json_string()?));
        spec.fill(&mut data);

        let files = package.map(|content| vec![("package".to_string(), content)]);
        let resp = self
            .core
            .transport
            .request(COLLECTION, Method::POST, Some(Value::Object(data)), files)
            .await?;
        Resource::from_value(resp.json().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.core.delete(&format!("{COLLECTION}/{id}")).await
    }

    pub async fn get(&self, id: &str) -> Result<Resource, ApiError> {
        self.core.get(&format!("{COLLECTION}/{id}")).await
    }

    /// Fetch the function's code package as raw bytes.
    pub async fn download(&self, id: &str) -> Result<Bytes, ApiError> {
        self.core
            .get_raw(&format!("{COLLECTION}/{id}?download=true"))
            .await
    }

    /// Update metadata and/or code. Unlike create, the code descriptor's
    /// keys are merged into the top level of the body rather than nested
    /// under a `code` field.
    pub async fn update(
        &self,
        id: &str,
        code: Option<&FunctionCode>,
        package: Option<Vec<u8>>,
        spec: &FunctionSpec,
    ) -> Result<Resource, ApiError> {
        let mut data = Map::new();
        if let Some(code) = code {
            if let Value::Object(fields) = serde_json::to_value(code)? {
                data.extend(fields);
            }
        }
        spec.fill(&mut data);

        let files = package.map(|content| vec![("package".to_string(), content)]);
        let resp = self
            .core
            .transport
            .request(
                &format!("{COLLECTION}/{id}"),
                Method::PUT,
                Some(Value::Object(data)),
                files,
            )
            .await?;
        Resource::from_value(resp.json().await?)
    }

    /// Release the workers currently assigned to the function.
    pub async fn detach(&self, id: &str) -> Result<(), ApiError> {
        self.core
            .transport
            .request(&format!("{COLLECTION}/{id}/detach"), Method::POST, None, None)
            .await?;
        Ok(())
    }

    pub async fn scaleup(&self, id: &str, count: u32) -> Result<(), ApiError> {
        self.core
            .transport
            .request(
                &format!("{COLLECTION}/{id}/scale_up"),
                Method::POST,
                Some(json!({ "count": count })),
                None,
            )
            .await?;
        Ok(())
    }

    pub async fn scaledown(&self, id: &str, count: u32) -> Result<(), ApiError> {
        self.core
            .transport
            .request(
                &format!("{COLLECTION}/{id}/scale_down"),
                Method::POST,
                Some(json!({ "count": count })),
                None,
            )
            .await?;
        Ok(())
    }

    /// Resolve a function name to its resource.
    pub async fn find(&self, name: &str) -> Result<Resource, ApiError> {
        self.core
            .find_by_name(COLLECTION, "functions", "function", name)
            .await
    }
}
