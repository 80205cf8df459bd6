use serde::{Deserialize, Deserializer, Serialize};

/// Label shown for a record without a title.
pub const UNTITLED: &str = "Untitled";

/// One entry of `projects.json`.
///
/// Every field is optional on the wire. Numbers and booleans are accepted
/// and kept in their string form; `null` is the same as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
}

impl ProjectRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Title as displayed, falling back to `untitled` when missing or empty.
    pub fn display_title<'a>(&'a self, untitled: &'a str) -> &'a str {
        non_blank(&self.title).unwrap_or(untitled)
    }

    /// Link target, falling back to `placeholder` when missing or empty.
    pub fn href<'a>(&'a self, placeholder: &'a str) -> &'a str {
        non_blank(&self.url).unwrap_or(placeholder)
    }

    pub fn subtitle(&self) -> Option<&str> {
        non_blank(&self.subtitle)
    }

    pub fn image(&self) -> Option<&str> {
        non_blank(&self.image)
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

/// Accept a string, number, or boolean; anything else (including `null`) is `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_none() {
        let rec: ProjectRecord = serde_json::from_str(r#"{"title": "Soil Probe"}"#).unwrap();
        assert_eq!(rec.title.as_deref(), Some("Soil Probe"));
        assert!(rec.subtitle.is_none());
        assert!(rec.category.is_none());
        assert_eq!(rec.href("project_pending.html"), "project_pending.html");
    }

    #[test]
    fn null_and_numeric_values_are_lenient() {
        let rec: ProjectRecord =
            serde_json::from_str(r#"{"title": null, "category": 2024, "url": ""}"#).unwrap();
        assert!(rec.title.is_none());
        assert_eq!(rec.category.as_deref(), Some("2024"));
        assert_eq!(rec.display_title(UNTITLED), "Untitled");
        assert_eq!(rec.href("#"), "#");
    }

    #[test]
    fn blank_optional_fields_are_absent() {
        let rec = ProjectRecord::new("Drone Survey")
            .with_subtitle("  ")
            .with_image("");
        assert!(rec.subtitle().is_none());
        assert!(rec.image().is_none());
    }
}
