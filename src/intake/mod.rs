//! Request preprocessing stages.
//!
//! # Data Flow
//! ```text
//! request
//!     → body.rs    (JSON / form decoding → ParsedBody)        /chat
//!     → upload.rs  (multipart → file on disk → StoredUpload)  /analyze-*
//!     → assets.rs  (static dir + root document)               / and /static
//!     → handler
//! ```
//!
//! Each stage is an extractor or a service on its own, testable without the
//! full router.

pub mod assets;
pub mod body;
pub mod upload;

pub use body::ParsedBody;
pub use upload::{StoredUpload, UploadDir, FILE_FIELD};
