//! Assistant stub server library.

pub mod config;
pub mod handlers;
pub mod http;
pub mod intake;
pub mod lifecycle;
pub mod observability;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
