//! Body intake for JSON and URL-encoded requests.
//!
//! # Rules
//! - `application/json`: must decode to an object or array, else 400
//! - `application/x-www-form-urlencoded`: flat object of strings; a repeated
//!   key collects its values into an array
//! - anything else (or no body): empty object
//!
//! Size limits come from `DefaultBodyLimit` on the route; exceeding it is 413.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
    Form,
};
use serde_json::{Map, Value};

use crate::http::error::AppError;

/// Decoded request body, always a JSON value.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBody(pub Value);

impl ParsedBody {
    /// Body with no fields.
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Look up a top-level field. Arrays and other non-objects have none.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.as_object().and_then(|obj| obj.get(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return BodyKind::Other;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "application/json" => BodyKind::Json,
        "application/x-www-form-urlencoded" => BodyKind::Form,
        _ => BodyKind::Other,
    }
}

fn rejection(status: StatusCode, detail: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::BadRequest(detail)
    }
}

/// Decode a JSON body in strict mode: only objects and arrays at top level.
pub fn decode_json(bytes: &[u8]) -> Result<Value, AppError> {
    if bytes.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| AppError::BadRequest(e.to_string()))?;
    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        other => Err(AppError::BadRequest(format!(
            "top-level JSON must be an object or array, got {other}"
        ))),
    }
}

/// Fold decoded form pairs into an object.
pub fn fold_form(pairs: Vec<(String, String)>) -> Value {
    let mut obj = Map::new();
    for (key, value) in pairs {
        match obj.get_mut(&key) {
            None => {
                obj.insert(key, Value::String(value));
            }
            Some(Value::Array(values)) => values.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
        }
    }
    Value::Object(obj)
}

impl<S> FromRequest<S> for ParsedBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(req.headers()) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|r| rejection(r.status(), r.body_text()))?;
                decode_json(&bytes).map(Self)
            }
            BodyKind::Form => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|r| rejection(r.status(), r.body_text()))?;
                Ok(Self(fold_form(pairs)))
            }
            BodyKind::Other => Ok(Self::empty()),
        }
    }
}
