//! Request handlers.
//!
//! Every handler is a pure function of its request; the only side effect in
//! the system (writing uploads) happens in the intake stage before
//! `analyze_*` is called.

pub mod analyze;
pub mod chat;
pub mod search;
pub mod types;

pub use analyze::{analyze_image, analyze_pdf};
pub use chat::chat;
pub use search::{search_pdf, search_summary, search_versions};

use crate::http::error::AppError;

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
