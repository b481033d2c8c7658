//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned and echoed)
//!     → intake stages / handlers
//!     → error.rs (failures mapped to status codes)
//!     → Send to client
//! ```

pub mod error;
pub mod request;
pub mod server;

pub use error::AppError;
pub use request::X_REQUEST_ID;
pub use server::{build_router, AppState, HttpServer};
