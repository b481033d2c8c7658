//! Upload intake: multipart parsing and disk storage.
//!
//! Exactly one file part named `file` is expected. Parts without a filename
//! are plain text fields and are skipped, as are parts with an empty filename
//! (what a browser sends for a file input left blank). A file part under any other name,
//! or a second `file` part, aborts the request and removes what was already
//! written. Nothing about the content is inspected.

use axum::extract::{multipart::Field, FromRef, FromRequest, Multipart, Request};
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::http::error::AppError;

/// Multipart part carrying the upload.
pub const FILE_FIELD: &str = "file";

/// Directory that receives uploads, extracted from router state.
#[derive(Debug, Clone)]
pub struct UploadDir(pub PathBuf);

/// A file already written to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Filename as sent by the client.
    pub original_name: String,
    /// Where the bytes landed.
    pub stored_path: PathBuf,
    /// Bytes written.
    pub size_bytes: u64,
    /// Content type declared for the part, if any.
    pub content_type: Option<String>,
}

/// Generate a collision-free name: 32 lowercase hex characters, no extension.
pub fn generate_stored_name() -> String {
    Uuid::new_v4().simple().to_string()
}

fn fault(context: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Fault(format!("{context}: {err}"))
}

async fn write_field(field: &mut Field<'_>, path: &Path) -> Result<u64, AppError> {
    let mut file = File::create(path).await?;
    let mut size = 0u64;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| fault("reading upload", e))?
    {
        file.write_all(&chunk).await?;
        size += chunk.len() as u64;
    }
    file.flush().await?;
    Ok(size)
}

/// Stream one file part into `dir` under a generated name.
///
/// A partially written file is removed before the error is returned.
pub async fn store_field(
    field: &mut Field<'_>,
    original_name: String,
    dir: &Path,
) -> Result<StoredUpload, AppError> {
    let stored_path = dir.join(generate_stored_name());
    let content_type = field.content_type().map(str::to_owned);

    match write_field(field, &stored_path).await {
        Ok(size_bytes) => {
            tracing::info!(
                original = %original_name,
                stored = ?stored_path,
                size_bytes,
                "Upload stored"
            );
            Ok(StoredUpload {
                original_name,
                stored_path,
                size_bytes,
                content_type,
            })
        }
        Err(err) => {
            let _ = fs::remove_file(&stored_path).await;
            Err(err)
        }
    }
}

async fn collect_upload(
    multipart: &mut Multipart,
    dir: &Path,
) -> Result<Option<StoredUpload>, (AppError, Option<StoredUpload>)> {
    let mut stored: Option<StoredUpload> = None;

    loop {
        let next = multipart.next_field().await;
        let mut field = match next {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(stored),
            Err(e) => return Err((fault("reading multipart", e), stored)),
        };

        // Text parts carry no filename; an empty one means no file was chosen.
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        if file_name.is_empty() {
            continue;
        }

        let name = field.name().unwrap_or_default().to_owned();
        if name != FILE_FIELD || stored.is_some() {
            return Err((
                AppError::Fault(format!("unexpected file field '{name}'")),
                stored,
            ));
        }

        match store_field(&mut field, file_name, dir).await {
            Ok(upload) => stored = Some(upload),
            Err(err) => return Err((err, stored)),
        }
    }
}

impl<S> FromRequest<S> for StoredUpload
where
    S: Send + Sync,
    UploadDir: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let UploadDir(dir) = UploadDir::from_ref(state);

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|r| fault("not a multipart request", r.body_text()))?;

        match collect_upload(&mut multipart, &dir).await {
            Ok(Some(upload)) => Ok(upload),
            Ok(None) => Err(AppError::Fault(format!(
                "no file received in field '{FILE_FIELD}'"
            ))),
            Err((err, partial)) => {
                if let Some(upload) = partial {
                    let _ = fs::remove_file(&upload.stored_path).await;
                }
                Err(err)
            }
        }
    }
}
