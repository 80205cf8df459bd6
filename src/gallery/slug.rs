use std::collections::HashSet;

/// Fallback id for cards whose title slugs to nothing.
pub const PROJECT_FALLBACK_ID: &str = "project";

/// Fallback id for anything else handed to [`IdRegistry::claim`] empty.
pub const GENERIC_FALLBACK_ID: &str = "item";

/// URL-fragment-safe form of `s`: lower-cased, quotes dropped, every run of
/// other non-alphanumeric characters collapsed to one hyphen, and no
/// leading or trailing hyphens. May be empty.
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_hyphen = false;
    for c in s.trim().to_lowercase().chars() {
        if c == '\'' || c == '"' {
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

/// Display id of a title, with `fallback` standing in for an empty slug.
pub fn display_id(title: Option<&str>, fallback: &str) -> String {
    let slug = slugify(title.unwrap_or_default());
    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}

/// Ids already handed out during one render pass.
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    used: HashSet<String>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `base`, or `base-2`, `base-3`, ... if it is taken.
    pub fn claim(&mut self, base: &str) -> String {
        let base = if base.is_empty() { GENERIC_FALLBACK_ID } else { base };
        let mut id = base.to_string();
        let mut i = 2;
        while self.used.contains(&id) {
            id = format!("{}-{}", base, i);
            i += 1;
        }
        self.used.insert(id.clone());
        id
    }

    /// Mark an id as taken without claiming it (e.g. ids already in the host page).
    pub fn reserve(&mut self, id: &str) {
        self.used.insert(id.to_string());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_symbol_runs() {
        assert_eq!(slugify("AI & Robotics!"), "ai-robotics");
        assert_eq!(slugify("  --Smart   Farming--  "), "smart-farming");
        assert_eq!(slugify("Version 2.0"), "version-2-0");
    }

    #[test]
    fn slug_drops_quotes_without_splitting() {
        assert_eq!(slugify("Farmer's \"Best\" Tool"), "farmers-best-tool");
    }

    #[test]
    fn slug_of_symbols_only_is_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("日本"), "");
    }

    #[test]
    fn empty_or_missing_title_uses_fallback() {
        assert_eq!(display_id(Some(""), PROJECT_FALLBACK_ID), "project");
        assert_eq!(display_id(None, PROJECT_FALLBACK_ID), "project");
        assert_eq!(display_id(Some("Crop Map"), PROJECT_FALLBACK_ID), "crop-map");
    }

    #[test]
    fn duplicates_get_numeric_suffixes() {
        let mut ids = IdRegistry::new();
        assert_eq!(ids.claim("soil-probe"), "soil-probe");
        assert_eq!(ids.claim("soil-probe"), "soil-probe-2");
        assert_eq!(ids.claim("soil-probe"), "soil-probe-3");
        assert_eq!(ids.claim("other"), "other");
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn reserved_ids_are_skipped() {
        let mut ids = IdRegistry::new();
        ids.reserve("projects-panel");
        assert_eq!(ids.claim("projects-panel"), "projects-panel-2");
    }

    #[test]
    fn empty_base_claims_generic_id() {
        let mut ids = IdRegistry::new();
        assert_eq!(ids.claim(""), "item");
        assert_eq!(ids.claim(""), "item-2");
    }
}
