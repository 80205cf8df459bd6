//! Category grouping and the shared category ordering.
//!
//! The same [`CategoryOrder`] drives category buttons, section tabs and the
//! table of contents, so all of them list categories identically.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::model::ProjectRecord;

/// Group key for records without a usable category.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Category that sorts ahead of all others unless configured otherwise.
pub const DEFAULT_PINNED_CATEGORY: &str = "AgTech";

/// Trimmed category of a record, or `fallback` when absent or blank.
pub fn normalize_category<'a>(record: &'a ProjectRecord, fallback: &'a str) -> &'a str {
    match record.category.as_deref().map(str::trim) {
        Some(c) if !c.is_empty() => c,
        _ => fallback,
    }
}

/// Ordered mapping from category name to the records in it.
///
/// Categories keep first-seen order and records keep input order. Use
/// [`CategoryGroups::sorted_categories`] for display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryGroups {
    groups: Vec<(String, Vec<ProjectRecord>)>,
    index: HashMap<String, usize>,
}

impl CategoryGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Partition records by category; every record lands in exactly one group.
    pub fn from_records(records: &[ProjectRecord], fallback: &str) -> Self {
        let mut groups = Self::new();
        for record in records {
            let category = normalize_category(record, fallback).to_string();
            groups.push(category, record.clone());
        }
        groups
    }

    pub fn push(&mut self, category: String, record: ProjectRecord) {
        match self.index.get(&category) {
            Some(&i) => self.groups[i].1.push(record),
            None => {
                self.index.insert(category.clone(), self.groups.len());
                self.groups.push((category, vec![record]));
            }
        }
    }

    /// Register a category with no records (renders the empty placeholder).
    pub fn ensure_category(&mut self, category: &str) {
        if !self.index.contains_key(category) {
            self.index.insert(category.to_string(), self.groups.len());
            self.groups.push((category.to_string(), Vec::new()));
        }
    }

    pub fn get(&self, category: &str) -> Option<&[ProjectRecord]> {
        self.index.get(category).map(|&i| self.groups[i].1.as_slice())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all categories.
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|(_, records)| records.len()).sum()
    }

    /// Groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ProjectRecord])> {
        self.groups.iter().map(|(c, r)| (c.as_str(), r.as_slice()))
    }

    /// Category names in display order.
    pub fn sorted_categories(&self, order: &CategoryOrder) -> Vec<&str> {
        let mut cats: Vec<&str> = self.groups.iter().map(|(c, _)| c.as_str()).collect();
        cats.sort_by(|a, b| order.compare(a, b));
        cats
    }
}

/// Display order for categories: an optional pinned category first, then
/// locale-style ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOrder {
    pub pinned: Option<String>,
}

impl Default for CategoryOrder {
    fn default() -> Self {
        Self {
            pinned: Some(DEFAULT_PINNED_CATEGORY.to_string()),
        }
    }
}

impl CategoryOrder {
    pub fn new(pinned: Option<String>) -> Self {
        Self { pinned }
    }

    pub fn unpinned() -> Self {
        Self { pinned: None }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        if let Some(pinned) = self.pinned.as_deref() {
            match (a == pinned, b == pinned) {
                (true, true) => return Ordering::Equal,
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                (false, false) => {}
            }
        }
        locale_compare(a, b)
    }
}

/// Locale-style comparison for Latin-script names.
///
/// Letters compare by base letter first, so `Água` sorts with `a` and
/// `Énergie` with `e`. Ties break on accents (unaccented first), then on
/// case (lowercase first), then on plain byte order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| accent_order(a, b))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.chars() {
        match base_letters(c) {
            Some(base) => key.push_str(base),
            None => key.extend(c.to_lowercase()),
        }
    }
    key
}

fn accent_order(a: &str, b: &str) -> Ordering {
    let marks = |s: &str| s.chars().map(|c| base_letters(c).is_some()).collect::<Vec<_>>();
    marks(a).cmp(&marks(b))
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            match (ca.is_lowercase(), cb.is_lowercase()) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {}
            }
        }
    }
    Ordering::Equal
}

/// Lowercase base letters of a decorated Latin-1 or Latin Extended-A letter.
fn base_letters(c: char) -> Option<&'static str> {
    let base = match c {
        'À'..='Å' | 'à'..='å' | 'Ā'..='ą' => "a",
        'Æ' | 'æ' => "ae",
        'Ç' | 'ç' | 'Ć'..='č' => "c",
        'Ð' | 'ð' | 'Ď'..='đ' => "d",
        'È'..='Ë' | 'è'..='ë' | 'Ē'..='ě' => "e",
        'Ĝ'..='ģ' => "g",
        'Ĥ'..='ħ' => "h",
        'Ì'..='Ï' | 'ì'..='ï' | 'Ĩ'..='ı' => "i",
        'Ĳ' | 'ĳ' => "ij",
        'Ĵ' | 'ĵ' => "j",
        'Ķ'..='ĸ' => "k",
        'Ĺ'..='ł' => "l",
        'Ñ' | 'ñ' | 'Ń'..='ŋ' => "n",
        'Ò'..='Ö' | 'Ø' | 'ò'..='ö' | 'ø' | 'Ō'..='ő' => "o",
        'Œ' | 'œ' => "oe",
        'Ŕ'..='ř' => "r",
        'ß' => "ss",
        'Ś'..='š' | 'ſ' => "s",
        'Ţ'..='ŧ' => "t",
        'Þ' | 'þ' => "th",
        'Ù'..='Ü' | 'ù'..='ü' | 'Ũ'..='ų' => "u",
        'Ŵ' | 'ŵ' => "w",
        'Ý' | 'ý' | 'ÿ' | 'Ŷ'..='Ÿ' => "y",
        'Ź'..='ž' => "z",
        _ => return None,
    };
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str, category: Option<&str>) -> ProjectRecord {
        ProjectRecord {
            title: Some(title.to_string()),
            category: category.map(str::to_string),
            ..ProjectRecord::default()
        }
    }

    #[test]
    fn every_record_lands_in_exactly_one_group() {
        let input = vec![
            rec("a", Some("Zeta")),
            rec("b", Some("AgTech")),
            rec("c", None),
            rec("d", Some("Zeta")),
            rec("e", Some("  ")),
            rec("f", Some(" Beta ")),
        ];
        let groups = CategoryGroups::from_records(&input, FALLBACK_CATEGORY);
        assert_eq!(groups.record_count(), input.len());

        let mut seen: Vec<&str> = groups
            .iter()
            .flat_map(|(_, records)| records)
            .map(|r| r.title.as_deref().unwrap_or_default())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec!["a", "b", "c", "d", "e", "f"]);

        assert_eq!(groups.get("Beta").map(|r| r.len()), Some(1));
        let zeta: Vec<_> = groups.get("Zeta").unwrap().iter().map(|r| r.title.clone()).collect();
        assert_eq!(zeta, vec![Some("a".to_string()), Some("d".to_string())]);
    }

    #[test]
    fn blank_and_literal_fallback_group_together() {
        let input = vec![rec("a", None), rec("b", Some("")), rec("c", Some("Other"))];
        let groups = CategoryGroups::from_records(&input, FALLBACK_CATEGORY);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get("Other").map(|r| r.len()), Some(3));
    }

    #[test]
    fn fallback_match_is_case_sensitive() {
        let input = vec![rec("a", None), rec("b", Some("other"))];
        let groups = CategoryGroups::from_records(&input, FALLBACK_CATEGORY);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn pinned_category_sorts_first() {
        let input = vec![
            rec("z", Some("Zeta")),
            rec("a", Some("AgTech")),
            rec("b", Some("Beta")),
        ];
        let groups = CategoryGroups::from_records(&input, FALLBACK_CATEGORY);
        assert_eq!(
            groups.sorted_categories(&CategoryOrder::default()),
            vec!["AgTech", "Beta", "Zeta"]
        );
    }

    #[test]
    fn pinning_can_be_changed_or_disabled() {
        let input = vec![rec("z", Some("Zeta")), rec("a", Some("AgTech"))];
        let groups = CategoryGroups::from_records(&input, FALLBACK_CATEGORY);
        let zeta_first = CategoryOrder::new(Some("Zeta".into()));
        assert_eq!(groups.sorted_categories(&zeta_first), vec!["Zeta", "AgTech"]);
        assert_eq!(
            groups.sorted_categories(&CategoryOrder::unpinned()),
            vec!["AgTech", "Zeta"]
        );
    }

    #[test]
    fn locale_order_folds_case() {
        let mut cats = vec!["robotics", "Energy", "AI", "energy", "Biotech"];
        cats.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(cats, vec!["AI", "Biotech", "energy", "Energy", "robotics"]);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let input: Vec<_> = ["Zeta", "Énergie", "AgTech", "beta", "Beta", "Água"]
            .iter()
            .map(|c| rec("x", Some(c)))
            .collect();
        let groups = CategoryGroups::from_records(&input, FALLBACK_CATEGORY);
        assert_eq!(
            groups.sorted_categories(&CategoryOrder::default()),
            vec!["AgTech", "Água", "beta", "Beta", "Énergie", "Zeta"]
        );

        let mut names = vec!["Éco", "Eco", "eco", "Ecology", "Øre", "Oslo"];
        names.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(names, vec!["eco", "Eco", "Éco", "Ecology", "Øre", "Oslo"]);
    }

    #[test]
    fn empty_category_can_be_registered() {
        let mut groups = CategoryGroups::new();
        groups.ensure_category("Water");
        assert_eq!(groups.get("Water").map(|r| r.len()), Some(0));
        assert_eq!(groups.record_count(), 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn category() -> impl Strategy<Value = Option<String>> {
        prop::option::of(prop_oneof![
            Just(String::new()),
            " {1,3}",
            Just(FALLBACK_CATEGORY.to_string()),
            " ?[A-Za-z]{1,6} ?",
        ])
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_grouping_partitions_records(
            input in prop::collection::vec(("[a-z]{1,4}", category()), 0..40)
        ) {
            let records: Vec<ProjectRecord> = input
                .iter()
                .map(|(title, category)| ProjectRecord {
                    title: Some(title.clone()),
                    category: category.clone(),
                    ..ProjectRecord::default()
                })
                .collect();
            let groups = CategoryGroups::from_records(&records, FALLBACK_CATEGORY);

            prop_assert_eq!(groups.record_count(), input.len());

            let mut expected: Vec<&str> = input.iter().map(|(t, _)| t.as_str()).collect();
            let mut grouped: Vec<&str> = groups
                .iter()
                .flat_map(|(_, records)| records)
                .filter_map(|r| r.title.as_deref())
                .collect();
            expected.sort_unstable();
            grouped.sort_unstable();
            prop_assert_eq!(grouped, expected);

            for (name, records) in groups.iter() {
                prop_assert!(!records.is_empty());
                for record in records {
                    let want = match record.category.as_deref().map(str::trim) {
                        Some(c) if !c.is_empty() => c,
                        _ => "Other",
                    };
                    prop_assert_eq!(name, want);
                }
            }
        }
    }
}
