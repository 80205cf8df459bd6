use std::path::Path;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Result of fetching a location
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub body: Vec<u8>,
    pub url: String,
    pub status: u16,
    pub content_type: String,
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Error during fetch. A non-2xx HTTP status is not a fetch error; callers
/// inspect [`FetchResult::status`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid location {location:?}: {reason}")]
    InvalidLocation { location: String, reason: String },
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),
    #[error("client error: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("failed to read body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve `reference` against an optional base location.
///
/// `reference` may be an absolute URL, a path relative to `base`, or (with no
/// base) a filesystem path relative to the working directory.
pub fn resolve_location(base: Option<&Url>, reference: &str) -> Result<Url, FetchError> {
    if let Ok(abs) = Url::parse(reference) {
        // Single-letter schemes are Windows drive letters, not URLs.
        if abs.scheme().len() > 1 {
            return Ok(abs);
        }
    }

    if let Some(base) = base {
        return base.join(reference).map_err(|e| FetchError::InvalidLocation {
            location: reference.to_string(),
            reason: e.to_string(),
        });
    }

    file_url(Path::new(reference))
}

/// `file://` URL for a filesystem path, made absolute against the working directory.
pub fn file_url(path: &Path) -> Result<Url, FetchError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|source| FetchError::Io {
                path: path.display().to_string(),
                source,
            })?
            .join(path)
    };
    Url::from_file_path(&absolute).map_err(|()| FetchError::InvalidLocation {
        location: absolute.display().to_string(),
        reason: "not an absolute path".into(),
    })
}

/// Fetch a location, bypassing HTTP caches (blocking).
pub fn fetch(url: &Url) -> Result<FetchResult, FetchError> {
    match url.scheme() {
        "http" | "https" => fetch_http(url),
        "file" => fetch_file(url),
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}

fn fetch_http(url: &Url) -> Result<FetchResult, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("project-gallery/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(15))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(FetchError::Client)?;

    let response = client
        .get(url.as_str())
        .header(reqwest::header::CACHE_CONTROL, "no-cache")
        .header(reqwest::header::PRAGMA, "no-cache")
        .header(reqwest::header::ACCEPT, "application/json, */*;q=0.8")
        .send()
        .map_err(FetchError::Request)?;

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let final_url = response.url().to_string();

    let body = response.bytes().map_err(FetchError::Body)?.to_vec();

    log::debug!("GET {} -> {} ({} bytes)", final_url, status, body.len());

    Ok(FetchResult {
        body,
        url: final_url,
        status,
        content_type,
    })
}

fn fetch_file(url: &Url) -> Result<FetchResult, FetchError> {
    let path = url.to_file_path().map_err(|()| FetchError::InvalidLocation {
        location: url.to_string(),
        reason: "not a local file path".into(),
    })?;

    let body = std::fs::read(&path).map_err(|source| FetchError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let content_type = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => "application/json",
        Some("html") | Some("htm") => "text/html",
        _ => "application/octet-stream",
    };

    log::debug!("read {} ({} bytes)", path.display(), body.len());

    Ok(FetchResult {
        body,
        url: url.to_string(),
        status: 200,
        content_type: content_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::test_server;

    #[test]
    fn relative_reference_joins_against_page() {
        let base = Url::parse("https://example.org/research/resources.html").unwrap();
        let url = resolve_location(Some(&base), "assets/json/projects.json").unwrap();
        assert_eq!(url.as_str(), "https://example.org/research/assets/json/projects.json");
    }

    #[test]
    fn absolute_reference_wins_over_base() {
        let base = Url::parse("file:///srv/site/index.html").unwrap();
        let url = resolve_location(Some(&base), "https://cdn.example/p.json").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example/p.json");
    }

    #[test]
    fn bare_path_becomes_file_url() {
        let url = resolve_location(None, "assets/json/projects.json").unwrap();
        assert_eq!(url.scheme(), "file");
        assert!(url.path().ends_with("/assets/json/projects.json"));
    }

    #[test]
    fn reads_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(&path, b"[]").unwrap();
        let result = fetch(&file_url(&path).unwrap()).unwrap();
        assert_eq!(result.status, 200);
        assert_eq!(result.content_type, "application/json");
        assert_eq!(result.text(), "[]");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = fetch(&file_url(&path).unwrap()).unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }

    #[test]
    fn http_status_is_reported_not_raised() {
        let base = test_server::start(404, "text/plain", b"not here".to_vec());
        let url = Url::parse(&base).unwrap().join("projects.json").unwrap();
        let result = fetch(&url).unwrap();
        assert_eq!(result.status, 404);
        assert!(!result.is_success());
    }

    #[test]
    fn unsupported_scheme_rejected() {
        let url = Url::parse("ftp://example.org/projects.json").unwrap();
        assert!(matches!(fetch(&url), Err(FetchError::UnsupportedScheme(s)) if s == "ftp"));
    }
}
