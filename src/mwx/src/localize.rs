//! Localized string table
//!
//! Built once from the raw `localize.json` dump and the placeholder rule
//! file. Values matching a placeholder rule are known untranslated markers
//! and resolve to absent. Everything else has its UI markup stripped before
//! it is cached.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

static COLOR_CODES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\^\d").expect("valid regex"));
static BUTTON_CODES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\{[^}\]]*\}\]").expect("valid regex"));

/// Placeholder rule set (`placeholders.json`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceholderRules {
    #[serde(default)]
    pub whole: Vec<String>,
    #[serde(default)]
    pub begins: Vec<String>,
    #[serde(default)]
    pub ends: Vec<String>,
}

impl PlaceholderRules {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&text).map_err(|e| Error::json(path, e))
    }

    fn lowercased(&self) -> Self {
        let lower = |v: &[String]| v.iter().map(|s| s.to_lowercase()).collect();
        Self {
            whole: lower(&self.whole),
            begins: lower(&self.begins),
            ends: lower(&self.ends),
        }
    }

    /// Whether a lowercased value is a placeholder under any rule kind.
    fn matches(&self, lower: &str) -> bool {
        self.whole.iter().any(|p| lower == p)
            || self.begins.iter().any(|p| lower.starts_with(p.as_str()))
            || self.ends.iter().any(|p| lower.ends_with(p.as_str()))
    }
}

/// Localization key -> display text
#[derive(Debug, Clone, Default)]
pub struct Localization {
    strings: HashMap<String, String>,
}

impl Localization {
    /// Filter and clean a raw string table
    pub fn build(raw: HashMap<String, Option<String>>, rules: &PlaceholderRules) -> Self {
        let rules = rules.lowercased();

        let strings = raw
            .into_iter()
            .filter_map(|(key, value)| {
                let value = value?;
                if rules.matches(&value.to_lowercase()) {
                    return None;
                }
                Some((key, clean(&value)))
            })
            .collect();

        Self { strings }
    }

    /// Load `localize.json` and apply the placeholder rules
    pub fn load<P: AsRef<Path>>(path: P, rules: &PlaceholderRules) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let raw: HashMap<String, Option<String>> =
            serde_json::from_str(&text).map_err(|e| Error::json(path, e))?;
        Ok(Self::build(raw, rules))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Lookup for keys read from optional table cells
    pub fn get_opt(&self, key: Option<&str>) -> Option<&str> {
        key.and_then(|k| self.get(k))
    }

    /// Lookup with a fallback key when the first resolves to nothing
    pub fn get_or(&self, key: Option<&str>, fallback: &str) -> Option<&str> {
        self.get_opt(key).or_else(|| self.get(fallback))
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Strip color codes, then button codes.
pub fn clean(value: &str) -> String {
    let value = COLOR_CODES.replace_all(value, "");
    BUTTON_CODES.replace_all(&value, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> PlaceholderRules {
        PlaceholderRules {
            whole: vec!["TBD".into()],
            begins: vec!["PH_".into()],
            ends: vec!["_placeholder".into()],
        }
    }

    fn build(pairs: &[(&str, Option<&str>)]) -> Localization {
        let raw = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect();
        Localization::build(raw, &rules())
    }

    #[test]
    fn test_whole_rule_is_case_insensitive() {
        let loc = build(&[("A", Some("tbd")), ("B", Some("Tbd"))]);
        assert_eq!(loc.get("A"), None);
        assert_eq!(loc.get("B"), None);
    }

    #[test]
    fn test_whole_rule_ignores_substrings() {
        let loc = build(&[("A", Some("Coming soon: TBD later"))]);
        assert_eq!(loc.get("A"), Some("Coming soon: TBD later"));
    }

    #[test]
    fn test_begins_and_ends_rules() {
        let loc = build(&[
            ("A", Some("ph_Charm Name")),
            ("B", Some("Charm_PLACEHOLDER")),
            ("C", Some("Charm ph_")),
        ]);
        assert_eq!(loc.get("A"), None);
        assert_eq!(loc.get("B"), None);
        assert_eq!(loc.get("C"), Some("Charm ph_"));
    }

    #[test]
    fn test_null_and_missing_keys() {
        let loc = build(&[("A", None)]);
        assert_eq!(loc.get("A"), None);
        assert_eq!(loc.get("MISSING"), None);
        assert_eq!(loc.get_opt(None), None);
    }

    #[test]
    fn test_cleaning_strips_markup() {
        let loc = build(&[
            ("COLOR", Some("^3Gold^7 Camo")),
            ("BUTTON", Some("Press [{+activate}] to use")),
        ]);
        assert_eq!(loc.get("COLOR"), Some("Gold Camo"));
        assert_eq!(loc.get("BUTTON"), Some("Press  to use"));
    }

    #[test]
    fn test_rules_apply_before_cleaning() {
        // "^1TBD" is not a whole match until cleaned, so it survives
        let loc = build(&[("A", Some("^1TBD"))]);
        assert_eq!(loc.get("A"), Some("TBD"));
    }

    #[test]
    fn test_get_or_fallback() {
        let loc = build(&[("FALLBACK", Some("Variety")), ("EMPTY", Some("TBD"))]);
        assert_eq!(loc.get_or(Some("EMPTY"), "FALLBACK"), Some("Variety"));
        assert_eq!(loc.get_or(None, "FALLBACK"), Some("Variety"));
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let loc_path = dir.path().join("localize.json");
        let rules_path = dir.path().join("placeholders.json");
        std::fs::write(&loc_path, r#"{"LOOT_MP/CHARM": "Charm", "X": null, "Y": "TBD"}"#).unwrap();
        std::fs::write(&rules_path, r#"{"whole": ["tbd"], "begins": [], "ends": []}"#).unwrap();

        let rules = PlaceholderRules::load(&rules_path).unwrap();
        let loc = Localization::load(&loc_path, &rules).unwrap();
        assert_eq!(loc.len(), 1);
        assert_eq!(loc.get("LOOT_MP/CHARM"), Some("Charm"));
    }
}
