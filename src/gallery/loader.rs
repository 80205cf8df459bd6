//! Loads `projects.json`: one uncached fetch, a status check, then JSON parsing.

use thiserror::Error;
use url::Url;

use super::model::ProjectRecord;
use crate::net::fetch::{fetch, FetchError};

/// Why the project list could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load {location}: {source}")]
    Fetch {
        location: String,
        #[source]
        source: FetchError,
    },
    #[error("Failed to load {location}: {status}")]
    Status { location: String, status: u16 },
    #[error("Failed to load {location}: invalid project data ({source})")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// HTTP status for a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            LoadError::Fetch { location, .. }
            | LoadError::Status { location, .. }
            | LoadError::Parse { location, .. } => location,
        }
    }
}

/// Fetch and parse the project list at `location`. Single attempt, no retry.
pub fn load_projects(location: &Url) -> Result<Vec<ProjectRecord>, LoadError> {
    let result = fetch(location).map_err(|source| LoadError::Fetch {
        location: location.to_string(),
        source,
    })?;

    if !result.is_success() {
        return Err(LoadError::Status {
            location: location.to_string(),
            status: result.status,
        });
    }

    let projects = parse_projects(&result.body, location.as_str())?;
    log::info!("loaded {} projects from {}", projects.len(), location);
    Ok(projects)
}

/// Parse a JSON array of project objects.
pub fn parse_projects(body: &[u8], location: &str) -> Result<Vec<ProjectRecord>, LoadError> {
    serde_json::from_slice(body).map_err(|source| LoadError::Parse {
        location: location.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::test_server;

    const SAMPLE: &str = r#"[
        {"title": "Soil Probe", "subtitle": "Moisture sensing", "url": "soil.html", "category": "AgTech"},
        {"title": "Arm Controller", "category": "Robotics", "image": "img/arm.png"},
        {"title": "Misc"}
    ]"#;

    #[test]
    fn parses_array_of_records() {
        let projects = parse_projects(SAMPLE.as_bytes(), "inline").unwrap();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].url.as_deref(), Some("soil.html"));
        assert_eq!(projects[1].image.as_deref(), Some("img/arm.png"));
        assert!(projects[2].category.is_none());
    }

    #[test]
    fn object_body_is_parse_error() {
        let err = parse_projects(br#"{"title": "x"}"#, "inline").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to load inline:"));
    }

    #[test]
    fn loads_over_http() {
        let base = test_server::start(200, "application/json", SAMPLE.as_bytes().to_vec());
        let url = Url::parse(&base).unwrap().join("assets/json/projects.json").unwrap();
        let projects = load_projects(&url).unwrap();
        assert_eq!(projects.len(), 3);
    }

    #[test]
    fn not_found_carries_status() {
        let base = test_server::start(404, "text/plain", b"missing".to_vec());
        let url = Url::parse(&base).unwrap().join("assets/json/projects.json").unwrap();
        let err = load_projects(&url).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            format!("Failed to load {}: 404", url)
        );
    }

    #[test]
    fn missing_file_is_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets/json/projects.json");
        let url = crate::net::fetch::file_url(&path).unwrap();
        let err = load_projects(&url).unwrap_err();
        assert!(matches!(err, LoadError::Fetch { .. }));
        assert_eq!(err.location(), url.as_str());
    }
}
