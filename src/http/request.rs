//! Request extraction.
//!
//! # Responsibilities
//! - Decode the `title` query parameter for listing
//! - Decode JSON bodies, mapping failures to `ApiError` before any handler runs

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::http::response::ApiError;

/// Query string of `GET /projects`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub title: Option<String>,
}

impl ListQuery {
    /// Title filter to apply; an empty `title` means no filter.
    pub fn title_filter(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

/// JSON request body.
///
/// Requests that do not declare a JSON content type, and JSON requests with
/// an empty body, are read as an empty document (`T::default()`). A declared
/// JSON body that fails to decode is rejected with the extractor's
/// client-error status.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state).await?;
        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}

/// `application/json` or any `+json` media type, parameters ignored.
pub fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
