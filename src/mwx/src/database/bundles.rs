//! Store bundles (`bundles.json`), plus durable DLC sold as bundles

use super::images::{self, BUNDLE_FRAMES};
use super::normalize::{
    add_slug, drop_null, has, has_all, normalize_availability, sort_records, str_field, strip,
};
use super::{read_records, write_records, Database, Record};
use crate::context::Context;
use crate::error::Result;
use crate::paths::Paths;
use serde_json::Value;

/// Bundle fields the database does not carry
const INTERNAL: &[&str] = &[
    "altId",
    "giftable",
    "mission",
    "mastercraft",
    "reactive",
    "ultraSkin",
    "hiddenItems",
];

/// DLC fields replaced by their bundle equivalents
const DLC_INTERNAL: &[&str] = &["altId", "altType", "storeIds", "image"];

const OPTIONAL: &[&str] = &["description", "flavor", "feature", "season", "salePrice"];

pub(crate) fn compile(db: &mut Database, ctx: &Context, paths: &Paths) -> Result<()> {
    let bundles = read_records(paths, "bundles.json")?;
    let dlc = read_records(paths, "dlc.json")?;

    let bundle_ids: Vec<&Value> = bundles.iter().filter_map(|b| b.get("id")).collect();
    let durable: Vec<Record> = dlc
        .into_iter()
        .filter_map(|entry| durable_bundle(db, ctx, paths, entry, &bundle_ids))
        .collect();

    let mut out: Vec<Record> = bundles
        .into_iter()
        .filter_map(|bundle| store_bundle(db, paths, bundle))
        .collect();
    out.extend(durable);

    sort_records(&mut out, "name", "type");
    db.add_records(out.len());
    write_records(paths, "bundles", &out)
}

fn item_ids(record: &Record) -> Vec<Value> {
    record
        .get("items")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(|i| i.get("id").cloned()).collect())
        .unwrap_or_default()
}

fn store_bundle(db: &mut Database, paths: &Paths, mut bundle: Record) -> Option<Record> {
    if !has_all(&bundle, &["id", "name", "type", "billboard", "logo"]) {
        return None;
    }
    let billboard = str_field(&bundle, "billboard")?.to_string();
    let logo = str_field(&bundle, "logo")?.to_string();

    db.add_image(&billboard);
    db.add_image(&logo);
    if !images::exists(paths, &billboard) || !images::exists(paths, &logo) {
        return None;
    }

    let items = item_ids(&bundle);
    bundle.insert("items".to_string(), Value::Array(items));

    strip(&mut bundle, INTERNAL);
    drop_null(&mut bundle, OPTIONAL);
    if has(&bundle, "flavor") && bundle.get("flavor") == bundle.get("name") {
        bundle.shift_remove("flavor");
    }
    normalize_availability(&mut bundle);

    if images::animated(paths, &billboard, BUNDLE_FRAMES) {
        bundle.insert("animated".to_string(), Value::Bool(true));
    }
    add_slug(&mut bundle);

    Some(bundle)
}

/// Durable DLC becomes a bundle without a price. Operator items and items
/// that are bundles of their own are left out.
fn durable_bundle(
    db: &mut Database,
    ctx: &Context,
    paths: &Paths,
    mut entry: Record,
    bundle_ids: &[&Value],
) -> Option<Record> {
    if str_field(&entry, "altType") != Some("durable") || !has_all(&entry, &["id", "name"]) {
        return None;
    }
    let image = str_field(&entry, "image")?.to_string();

    db.add_image(&image);
    if !images::exists(paths, &image) {
        return None;
    }

    let operator = ctx.text("LOOT_MP/OPERATOR");
    let items: Vec<Value> = entry
        .get("items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter(|item| item.get("type").and_then(Value::as_str) != operator.as_deref())
                .filter_map(|item| item.get("id").cloned())
                .filter(|id| !bundle_ids.contains(&id))
                .collect()
        })
        .unwrap_or_default();
    entry.insert("items".to_string(), Value::Array(items));

    strip(&mut entry, DLC_INTERNAL);
    entry.insert("billboard".to_string(), Value::String(image.clone()));
    entry.insert("price".to_string(), Value::Null);

    if !has(&entry, "type") {
        let variety = ctx.text("MENU/BUNDLE_TYPE_VARIETY");
        entry.insert("type".to_string(), variety.map_or(Value::Null, Value::String));
    }
    if images::animated(paths, &image, BUNDLE_FRAMES) {
        entry.insert("animated".to_string(), Value::Bool(true));
    }
    add_slug(&mut entry);

    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::localization;
    use crate::database::tests::{read_output, write_export, write_png};
    use crate::xassets::tests::paths;
    use serde_json::json;

    fn ctx() -> Context {
        Context::new(localization(&[
            ("LOOT_MP/OPERATOR", "Operator"),
            ("MENU/BUNDLE_TYPE_VARIETY", "Variety Bundle"),
        ]))
    }

    fn bundle(id: i64, name: &str, billboard: &str) -> Value {
        json!({
            "id": id,
            "altId": format!("bundle_{}", id),
            "name": name,
            "description": null,
            "flavor": name,
            "feature": null,
            "type": "Operator Bundle",
            "season": "Season One",
            "available": {"coldWar": false, "warzone": true, "modernWarfare": true},
            "billboard": billboard,
            "logo": "ui_logo",
            "price": 2400,
            "salePrice": null,
            "giftable": false,
            "mission": false,
            "mastercraft": false,
            "reactive": false,
            "ultraSkin": false,
            "items": [{"id": 11, "type": "Operator"}, {"id": 12, "type": "Emblem"}],
            "hiddenItems": [],
        })
    }

    #[test]
    fn test_store_bundles() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());
        write_png(&paths, "ui_bb_static", 1920, 580);
        write_png(&paths, "ui_bb_anim", 1920, 580 * 6);
        write_png(&paths, "ui_logo", 256, 256);
        write_export(
            &paths,
            "bundles.json",
            json!([
                bundle(3, "Zulu", "ui_bb_static"),
                bundle(2, "Alpha Pack", "ui_bb_anim"),
                bundle(1, "Missing Art", "ui_bb_missing"),
                {"id": 4, "name": "Broken", "type": null},
            ]),
        );

        let mut db = Database::new();
        compile(&mut db, &ctx(), &paths).unwrap();
        assert_eq!(db.count(), 2);
        assert!(db.images().contains("ui_bb_missing"));

        let out = read_output(&paths, "bundles");
        assert_eq!(
            out[0],
            json!({
                "id": 2,
                "name": "Alpha Pack",
                "type": "Operator Bundle",
                "season": "Season One",
                "billboard": "ui_bb_anim",
                "logo": "ui_logo",
                "price": 2400,
                "items": [11, 12],
                "animated": true,
                "slug": "alpha-pack",
            })
        );
        assert_eq!(out[1]["name"], json!("Zulu"));
        assert!(out[1].get("animated").is_none());
    }

    #[test]
    fn test_durable_dlc_becomes_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());
        write_png(&paths, "ui_dlc", 1920, 580);
        write_png(&paths, "ui_bb", 1920, 580);
        write_png(&paths, "ui_logo", 256, 256);
        write_export(&paths, "bundles.json", json!([bundle(50, "Sold", "ui_bb")]));
        write_export(
            &paths,
            "dlc.json",
            json!([
                {
                    "id": 900,
                    "altId": "dlc_vault",
                    "name": "Vault Edition",
                    "type": null,
                    "altType": "durable",
                    "image": "ui_dlc",
                    "storeIds": {"battlenet": 1, "playstation": null, "xbox": null},
                    "items": [
                        {"id": 11, "type": "Operator"},
                        {"id": 50, "type": "Bundle"},
                        {"id": 60, "type": "Calling Card"},
                    ],
                },
                {
                    "id": 901,
                    "altId": "dlc_cp",
                    "name": "2,400 COD Points",
                    "type": "COD Points",
                    "altType": "consumable",
                    "image": "ui_dlc",
                    "items": [],
                },
            ]),
        );

        let mut db = Database::new();
        compile(&mut db, &ctx(), &paths).unwrap();

        let out = read_output(&paths, "bundles");
        assert_eq!(out.as_array().unwrap().len(), 2);
        assert_eq!(
            out[1],
            json!({
                "id": 900,
                "name": "Vault Edition",
                "type": "Variety Bundle",
                "items": [60],
                "billboard": "ui_dlc",
                "price": null,
                "slug": "vault-edition",
            })
        );
    }

    #[test]
    fn test_durable_dlc_without_operator_label_drops_untyped_items() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());
        write_png(&paths, "ui_dlc", 1920, 580);
        write_export(&paths, "bundles.json", json!([]));
        write_export(
            &paths,
            "dlc.json",
            json!([{
                "id": 900,
                "name": "Vault Edition",
                "type": "Edition",
                "altType": "durable",
                "image": "ui_dlc",
                "items": [
                    {"id": 11, "type": null},
                    {"id": 12},
                    {"id": 60, "type": "Calling Card"},
                ],
            }]),
        );

        let mut db = Database::new();
        compile(&mut db, &Context::default(), &paths).unwrap();

        let out = read_output(&paths, "bundles");
        assert_eq!(out[0]["items"], json!([60]));
    }
}
