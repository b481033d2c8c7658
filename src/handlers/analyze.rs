//! Upload acknowledgement.
//!
//! The upload has already been written to disk by the intake stage when a
//! handler runs; "analysis" is only a receipt naming the original file.

use axum::Json;

use crate::handlers::types::UploadResult;
use crate::intake::StoredUpload;
use crate::observability::metrics;

/// Which upload route received the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Pdf,
    Image,
}

impl UploadKind {
    pub fn label(self) -> &'static str {
        match self {
            UploadKind::Pdf => "PDF",
            UploadKind::Image => "Image",
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            UploadKind::Pdf => "/analyze-pdf",
            UploadKind::Image => "/analyze-image",
        }
    }
}

/// Receipt text for a stored upload.
pub fn acknowledge(kind: UploadKind, upload: &StoredUpload) -> UploadResult {
    UploadResult {
        result: format!("✅ {} uploaded: {}", kind.label(), upload.original_name),
    }
}

fn receipt(kind: UploadKind, upload: &StoredUpload) -> Json<UploadResult> {
    metrics::record_upload(kind.route(), upload.size_bytes);
    Json(acknowledge(kind, upload))
}

/// `POST /analyze-pdf`
pub async fn analyze_pdf(upload: StoredUpload) -> Json<UploadResult> {
    receipt(UploadKind::Pdf, &upload)
}

/// `POST /analyze-image`
pub async fn analyze_image(upload: StoredUpload) -> Json<UploadResult> {
    receipt(UploadKind::Image, &upload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn upload(name: &str) -> StoredUpload {
        StoredUpload {
            original_name: name.to_string(),
            stored_path: PathBuf::from("uploads/0123456789abcdef0123456789abcdef"),
            size_bytes: 4,
            content_type: None,
        }
    }

    #[test]
    fn test_pdf_receipt() {
        assert_eq!(
            acknowledge(UploadKind::Pdf, &upload("report.pdf")).result,
            "✅ PDF uploaded: report.pdf"
        );
    }

    #[test]
    fn test_image_receipt_ignores_extension() {
        assert_eq!(
            acknowledge(UploadKind::Image, &upload("notes.txt")).result,
            "✅ Image uploaded: notes.txt"
        );
    }
}
