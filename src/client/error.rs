use thiserror::Error;

/// Errors surfaced by the function engine client.
///
/// HTTP failures map to one variant per status code the control plane is
/// known to return, each carrying the server's `faultstring` (or the raw
/// body when there is none). Everything else is a client-side condition:
/// undecodable responses, missing resource fields, or an ambiguous
/// name lookup.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    InternalServerError(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
    #[error("resource has no field '{0}'")]
    MissingField(String),

    #[error("no {kind} with name '{name}'")]
    NoMatch { kind: &'static str, name: String },
    #[error("multiple {kind}s match name '{name}', use the id instead")]
    MultipleMatches { kind: &'static str, name: String },
}

impl ApiError {
    /// Map an HTTP error status to its typed variant.
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => ApiError::BadRequest(message),
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            409 => ApiError::Conflict(message),
            500 => ApiError::InternalServerError(message),
            _ => ApiError::Http { status, message },
        }
    }
}
