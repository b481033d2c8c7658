//! Canned search endpoints. Query strings are accepted and ignored.

use axum::Json;

use crate::handlers::types::{PdfSearchResult, ProjectSummary, VersionSummary};

pub fn pdf_results() -> Vec<PdfSearchResult> {
    vec![PdfSearchResult {
        name: "Example.pdf".to_string(),
        path: "static/Example.pdf".to_string(),
    }]
}

pub fn project_summary() -> ProjectSummary {
    let projects = vec!["Alpha".to_string(), "Beta".to_string()];
    ProjectSummary {
        project_count: projects.len(),
        projects,
    }
}

pub fn version_summary() -> VersionSummary {
    let versions = vec![1, 2, 3];
    VersionSummary {
        version_count: versions.len(),
        versions,
    }
}

/// `GET /search-pdf`
pub async fn search_pdf() -> Json<Vec<PdfSearchResult>> {
    Json(pdf_results())
}

/// `GET /search-summary`
pub async fn search_summary() -> Json<ProjectSummary> {
    Json(project_summary())
}

/// `GET /search-versions`
pub async fn search_versions() -> Json<VersionSummary> {
    Json(version_summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pdf_results_shape() {
        assert_eq!(
            serde_json::to_value(pdf_results()).unwrap(),
            json!([{"name": "Example.pdf", "path": "static/Example.pdf"}])
        );
    }

    #[test]
    fn test_summary_shapes() {
        assert_eq!(
            serde_json::to_value(project_summary()).unwrap(),
            json!({"project_count": 2, "projects": ["Alpha", "Beta"]})
        );
        assert_eq!(
            serde_json::to_value(version_summary()).unwrap(),
            json!({"version_count": 3, "versions": [1, 2, 3]})
        );
    }

    #[test]
    fn test_field_order_is_stable() {
        assert_eq!(
            serde_json::to_string(&project_summary()).unwrap(),
            r#"{"project_count":2,"projects":["Alpha","Beta"]}"#
        );
        assert_eq!(
            serde_json::to_string(&version_summary()).unwrap(),
            r#"{"version_count":3,"versions":[1,2,3]}"#
        );
    }
}
