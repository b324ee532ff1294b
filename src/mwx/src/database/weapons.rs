//! Weapons (`weapons.json`) with variants reduced to ids

use super::normalize::{
    add_slug, drop_null, drop_unreleased, has_all, normalize_availability, sort_records,
    str_field, strip,
};
use super::{read_records, write_records, Database, Record};
use crate::error::Result;
use crate::paths::Paths;
use serde_json::Value;

const INTERNAL: &[&str] = &["maxAttachments", "attachments", "image"];

pub(crate) fn compile(db: &mut Database, paths: &Paths) -> Result<()> {
    let mut out = Vec::new();

    for mut weapon in read_records(paths, "weapons.json")? {
        if !has_all(&weapon, &["id", "name", "type"]) {
            continue;
        }
        let Some(icon) = str_field(&weapon, "icon") else {
            continue;
        };
        db.add_image(icon);

        let variants = variant_ids(&weapon);
        weapon.insert("variants".to_string(), Value::Array(variants));

        strip(&mut weapon, INTERNAL);
        drop_null(&mut weapon, &["description"]);
        drop_unreleased(&mut weapon);
        normalize_availability(&mut weapon);
        add_slug(&mut weapon);

        out.push(weapon);
    }

    sort_records(&mut out, "name", "altName");
    db.add_records(out.len());
    write_records(paths, "weapons", &out)
}

/// Ids of complete variants, in name and rarity order
fn variant_ids(weapon: &Record) -> Vec<Value> {
    let mut variants: Vec<Record> = weapon
        .get("variants")
        .and_then(Value::as_array)
        .map(|v| v.iter().filter_map(Value::as_object).cloned().collect())
        .unwrap_or_default();
    sort_records(&mut variants, "name", "rarity");

    variants
        .iter()
        .filter(|v| has_all(v, &["id", "name", "type", "image"]))
        .filter_map(|v| v.get("id").cloned())
        .collect()
}
