//! Request and response shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /chat`. The message is kept as whatever JSON arrived;
/// `None` means the field was absent, `Some(Value::Null)` an explicit null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatRequest {
    pub message: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfSearchResult {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub project_count: usize,
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSummary {
    pub version_count: usize,
    pub versions: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub result: String,
}
