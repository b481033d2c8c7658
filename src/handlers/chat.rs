//! Echo chat.
//!
//! The message is not validated. Whatever arrived is rendered the way loose
//! string interpolation would render it, so an absent field echoes as
//! `undefined` and an object as `[object Object]`.

use axum::Json;
use serde_json::Value;

use crate::handlers::types::{ChatRequest, ChatResponse};
use crate::intake::ParsedBody;

pub const ECHO_PREFIX: &str = "🤖 Echo: ";

impl From<&ParsedBody> for ChatRequest {
    fn from(body: &ParsedBody) -> Self {
        Self {
            message: body.field("message").cloned(),
        }
    }
}

/// Exponent form with an explicit sign: `1e+21`, `1.5e-7`.
fn render_exponent(f: f64) -> String {
    let text = format!("{f:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

fn render_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.abs() >= 1e21 || f.abs() < 1e-6 => render_exponent(f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => render_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => render(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Render an optional message as interpolated text.
pub fn interpolate(message: Option<&Value>) -> String {
    message.map_or_else(|| "undefined".to_string(), render)
}

/// Build the echo reply for a request.
pub fn echo(request: &ChatRequest) -> ChatResponse {
    ChatResponse {
        response: format!("{ECHO_PREFIX}{}", interpolate(request.message.as_ref())),
    }
}

/// `POST /chat`
pub async fn chat(body: ParsedBody) -> Json<ChatResponse> {
    let request = ChatRequest::from(&body);
    Json(echo(&request))
}
