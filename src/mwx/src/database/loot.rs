//! Loot (`loot.json`): every cosmetic export plus weapon variants

use super::images::{self, CALLING_CARD_FRAMES, EMBLEM_FRAMES, VARIANT_FRAMES};
use super::normalize::{
    add_slug, drop_null, drop_unreleased, has_all, normalize_availability, sort_records,
    str_field, strip,
};
use super::{read_records, write_records, Database, Record};
use crate::error::Result;
use crate::paths::Paths;
use serde_json::Value;

/// XAsset exports merged into the loot collection
pub const LOOT_FILES: &[&str] = &[
    "accessories.json",
    "battlePassItems.json",
    "callingCards.json",
    "camos.json",
    "charms.json",
    "consumables.json",
    "dlc.json",
    "emblems.json",
    "executions.json",
    "features.json",
    "gestures.json",
    "missionItems.json",
    "operatorQuips.json",
    "operatorSkins.json",
    "reticles.json",
    "specialItems.json",
    "sprays.json",
    "stickers.json",
    "unlockItemsT9.json",
    "vehicleCamos.json",
    "vehicleHorns.json",
    "vehicleTracks.json",
];

const INTERNAL: &[&str] = &[
    "altId",
    "altType",
    "hidden",
    "category",
    "operatorAltId",
    "pet",
    "unlock",
    "sku",
    "rewards",
    "challengeId",
    "storeIds",
    "items",
];

const OPTIONAL: &[&str] = &["description", "flavor", "attribute", "exclusive"];

const VARIANT_OPTIONAL: &[&str] = &["flavor", "tracers", "dismemberment"];

pub(crate) fn compile(db: &mut Database, paths: &Paths) -> Result<()> {
    let mut loot: Vec<Record> = Vec::new();

    for file in LOOT_FILES {
        let dlc = *file == "dlc.json";
        for item in read_records(paths, file)? {
            let Some(item) = loot_item(db, paths, item, dlc) else {
                continue;
            };
            if !loot.contains(&item) {
                loot.push(item);
            }
        }
    }

    for weapon in read_records(paths, "weapons.json")? {
        let class = weapon.get("class").cloned().unwrap_or(Value::Null);
        let base_id = weapon.get("id").cloned().unwrap_or(Value::Null);
        let Some(Value::Array(variants)) = weapon.get("variants") else {
            continue;
        };

        for variant in variants.iter().filter_map(Value::as_object) {
            if let Some(variant) = weapon_variant(db, paths, variant.clone(), &class, &base_id) {
                loot.push(variant);
            }
        }
    }

    sort_records(&mut loot, "name", "rarity");
    db.add_records(loot.len());
    write_records(paths, "loot", &loot)
}

/// Only consumable DLC is loot; the rest is sold as bundles
fn loot_item(db: &mut Database, paths: &Paths, mut item: Record, dlc: bool) -> Option<Record> {
    if !has_all(&item, &["id", "name", "type", "rarity", "image"]) {
        return None;
    }
    if dlc && str_field(&item, "altType") != Some("consumable") {
        return None;
    }
    let image = str_field(&item, "image")?.to_string();

    db.add_image(&image);
    if !images::exists(paths, &image) {
        return None;
    }

    strip(&mut item, INTERNAL);
    drop_null(&mut item, OPTIONAL);
    drop_unreleased(&mut item);
    normalize_availability(&mut item);

    let frames = match str_field(&item, "type") {
        Some("Calling Card") => Some(CALLING_CARD_FRAMES),
        Some("Emblem") => Some(EMBLEM_FRAMES),
        _ => None,
    };
    if frames.is_some_and(|frames| images::animated(paths, &image, frames)) {
        item.insert("animated".to_string(), Value::Bool(true));
    }
    add_slug(&mut item);

    Some(item)
}

fn weapon_variant(
    db: &mut Database,
    paths: &Paths,
    mut variant: Record,
    class: &Value,
    base_id: &Value,
) -> Option<Record> {
    if !has_all(&variant, &["id", "name", "type", "image"]) {
        return None;
    }
    let image = str_field(&variant, "image")?.to_string();

    db.add_image(&image);
    if !images::exists(paths, &image) {
        return None;
    }

    strip(&mut variant, &["altId"]);
    drop_null(&mut variant, VARIANT_OPTIONAL);
    drop_unreleased(&mut variant);
    normalize_availability(&mut variant);

    variant.insert("class".to_string(), class.clone());
    variant.insert("baseId".to_string(), base_id.clone());
    add_slug(&mut variant);
    if images::animated(paths, &image, VARIANT_FRAMES) {
        variant.insert("animated".to_string(), Value::Bool(true));
    }

    Some(variant)
}
