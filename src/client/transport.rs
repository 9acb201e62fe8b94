use std::env;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{multipart, Client, Method, Response, StatusCode};
use serde_json::Value;

use crate::config::{AuthConfig, ProfileConfig};

use super::error::ApiError;

/// One authenticated HTTP session against the function engine.
///
/// A request is either pure JSON or multipart, never both: when file
/// parts are present every `data` entry becomes a multipart text part,
/// otherwise `data` is sent as a single JSON document. Each call is a
/// single attempt; there is no retry or backoff anywhere.
pub struct Transport {
    base_url: String,
    http: Client,
}

impl Transport {
    pub fn new(profile: &ProfileConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        match &profile.auth {
            AuthConfig::None => {}
            AuthConfig::Basic {
                username,
                password_env,
            } => {
                let pw = env::var(password_env)?;
                let token = base64::encode_config(format!("{}:{}", username, pw), base64::STANDARD);
                let hv = HeaderValue::from_str(&format!("Basic {}", token))?;
                headers.insert(AUTHORIZATION, hv);
            }
            AuthConfig::Token { token_env } => {
                let tok = env::var(token_env)?;
                headers.insert("X-Auth-Token", HeaderValue::from_str(&tok)?);
            }
            AuthConfig::Bearer { token_env } => {
                let tok = env::var(token_env)?;
                let hv = HeaderValue::from_str(&format!("Bearer {}", tok))?;
                headers.insert(AUTHORIZATION, hv);
            }
        }

        let http = Client::builder().default_headers(headers).build()?;
        Ok(Transport {
            base_url: profile.endpoint.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Perform one call and normalize the outcome: 2xx yields the raw
    /// response for the caller to decode, anything >= 400 becomes a typed
    /// [`ApiError`] carrying the server's `faultstring` when present.
    pub(crate) async fn request(
        &self,
        path: &str,
        method: Method,
        data: Option<Value>,
        files: Option<Vec<(String, Vec<u8>)>>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);

        let mut req = self.http.request(method.clone(), &url);

        if let Some(files) = files {
            let mut form = multipart::Form::new();
            if let Some(Value::Object(fields)) = data {
                for (key, value) in fields {
                    // Strings go in verbatim; anything structured was
                    // already pre-serialized by the caller, the rest is
                    // rendered compactly.
                    let text = match value {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    form = form.text(key, text);
                }
            }
            for (name, content) in files {
                // The field name doubles as the synthetic filename.
                let part = multipart::Part::bytes(content).file_name(name.clone());
                form = form.part(name, part);
            }
            req = req.multipart(form);
        } else if let Some(data) = data {
            req = req.json(&data);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if status.as_u16() >= 400 {
            let body = resp.text().await.unwrap_or_default();
            let message = fault_message(status, &body);
            tracing::error!("{} {} failed: {} - {}", method, url, status, message);
            return Err(ApiError::from_status(status.as_u16(), message));
        }

        Ok(resp)
    }
}

/// Prefer the server's `faultstring`, then the raw body, then the status
/// line's canonical reason.
fn fault_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(fault)) = map.get("faultstring") {
            return fault.clone();
        }
    }
    if !body.is_empty() {
        body.to_string()
    } else {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_message_prefers_faultstring() {
        let body = r#"{"faultstring": "Runtime not found.", "debuginfo": null}"#;
        assert_eq!(
            fault_message(StatusCode::NOT_FOUND, body),
            "Runtime not found."
        );
    }

    #[test]
    fn test_fault_message_falls_back_to_body() {
        assert_eq!(
            fault_message(StatusCode::BAD_GATEWAY, "upstream gone"),
            "upstream gone"
        );
    }

    #[test]
    fn test_fault_message_falls_back_to_reason() {
        assert_eq!(fault_message(StatusCode::NOT_FOUND, ""), "Not Found");
    }
}
