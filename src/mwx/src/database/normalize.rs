//! Record clean-up shared by the export passes

use super::Record;
use crate::reference::UNRELEASED;
use crate::text::slugify;
use serde_json::Value;
use std::cmp::Ordering;

/// Title flags an `available` object is expected to carry
const TITLES: &[&str] = &["coldWar", "warzone", "modernWarfare"];

/// Whether `key` holds a non-null value
pub fn has(record: &Record, key: &str) -> bool {
    record.get(key).is_some_and(|v| !v.is_null())
}

/// Whether every key holds a non-null value
pub fn has_all(record: &Record, keys: &[&str]) -> bool {
    keys.iter().all(|key| has(record, key))
}

pub fn str_field<'a>(record: &'a Record, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

/// Remove keys regardless of their value
pub fn strip(record: &mut Record, keys: &[&str]) {
    for key in keys {
        record.shift_remove(*key);
    }
}

/// Remove keys whose value is null
pub fn drop_null(record: &mut Record, keys: &[&str]) {
    for key in keys {
        if record.get(*key).is_some_and(Value::is_null) {
            record.shift_remove(*key);
        }
    }
}

/// Drop a `season` that is null or unreleased
pub fn drop_unreleased(record: &mut Record) {
    drop_null(record, &["season"]);
    if str_field(record, "season") == Some(UNRELEASED) {
        record.shift_remove("season");
    }
}

/// Drop `available` when it says nothing beyond the default.
///
/// The default (`warzone` and `modernWarfare` only) and the all-false
/// object are both implied by absence.
pub fn normalize_availability(record: &mut Record) {
    if record.get("available").is_some_and(implied_availability) {
        record.shift_remove("available");
    }
}

fn implied_availability(available: &Value) -> bool {
    let Some(flags) = available.as_object() else {
        return false;
    };
    let flag = |key: &str| flags.get(key).and_then(Value::as_bool).unwrap_or(false);

    let none = flags.values().all(|v| v.as_bool() == Some(false));
    let others_off = flags
        .iter()
        .filter(|(key, _)| !TITLES.contains(&key.as_str()))
        .all(|(_, v)| v.as_bool() == Some(false));

    none || (others_off && !flag("coldWar") && flag("warzone") && flag("modernWarfare"))
}

/// Add `slug` derived from `name`
pub fn add_slug(record: &mut Record) {
    let slug = str_field(record, "name").map(slugify).unwrap_or_default();
    record.insert("slug".to_string(), Value::String(slug));
}

/// Sort records by `key`, then `key2`. Missing values sort first; ties keep
/// their input order.
pub fn sort_records(records: &mut [Record], key: &str, key2: &str) {
    records.sort_by(|a, b| compare(a, b, key).then_with(|| compare(a, b, key2)));
}

fn compare(a: &Record, b: &Record, key: &str) -> Ordering {
    sort_key(a.get(key)).cmp(&sort_key(b.get(key)))
}

fn sort_key(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_drop_null_keeps_values() {
        let mut r = record(json!({"description": null, "flavor": "Hot", "season": null}));
        drop_null(&mut r, &["description", "flavor"]);
        assert_eq!(Value::Object(r), json!({"flavor": "Hot", "season": null}));
    }

    #[test]
    fn test_availability_default_and_none_dropped() {
        let mut default = record(json!({
            "available": {"coldWar": false, "warzone": true, "modernWarfare": true}
        }));
        normalize_availability(&mut default);
        assert!(!default.contains_key("available"));

        let mut none = record(json!({
            "available": {"coldWar": false, "warzone": false, "modernWarfare": false}
        }));
        normalize_availability(&mut none);
        assert!(!none.contains_key("available"));

        let mut cold_war = record(json!({
            "available": {"coldWar": true, "warzone": true, "modernWarfare": true}
        }));
        normalize_availability(&mut cold_war);
        assert!(cold_war.contains_key("available"));
    }

    #[test]
    fn test_availability_extra_title_kept() {
        let mut r = record(json!({
            "available": {
                "vanguard": true,
                "coldWar": false,
                "warzone": true,
                "modernWarfare": true,
            }
        }));
        normalize_availability(&mut r);
        assert!(r.contains_key("available"));
    }

    #[test]
    fn test_unreleased_season_dropped() {
        let mut r = record(json!({"season": "Unreleased"}));
        drop_unreleased(&mut r);
        assert!(r.is_empty());

        let mut r = record(json!({"season": "Season One"}));
        drop_unreleased(&mut r);
        assert_eq!(str_field(&r, "season"), Some("Season One"));
    }

    #[test]
    fn test_sort_missing_first_then_secondary() {
        let mut records = vec![
            record(json!({"name": "B", "rarity": "Rare", "n": 1})),
            record(json!({"rarity": "Rare", "n": 2})),
            record(json!({"name": "A", "rarity": "Rare", "n": 3})),
            record(json!({"name": "B", "rarity": "Epic", "n": 4})),
            record(json!({"name": "B", "rarity": "Epic", "n": 5})),
        ];
        sort_records(&mut records, "name", "rarity");

        let order: Vec<i64> = records.iter().map(|r| r["n"].as_i64().unwrap()).collect();
        assert_eq!(order, vec![2, 3, 4, 5, 1]);
    }

    #[test]
    fn test_slug() {
        let mut r = record(json!({"name": "Ghost's Shadow - Mk.II"}));
        add_slug(&mut r);
        assert_eq!(r["slug"], json!("ghost-s-shadow-mk-ii"));
    }
}
