//! Black Ops Cold War unlock items (`loot/t9_unlock_items.csv`)

use super::{finish_all, image};
use crate::context::Context;
use crate::error::Result;
use crate::paths::Paths;
use crate::table::Table;
use serde::Serialize;

pub const T9_UNLOCK_ITEMS: &[&str] = &[
    "id",
    "ref",
    "quality",
    "name",
    "description",
    "classname",
    "image",
    "imageLarge",
    "license",
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UnlockItem {
    id: Option<i64>,
    alt_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    rarity: Option<String>,
    season: Option<String>,
    image: Option<String>,
    background: &'static str,
}

pub(crate) fn build(ctx: &Context, table: &Table) -> Vec<UnlockItem> {
    table
        .rows()
        .map(|row| UnlockItem {
            id: row.int("id"),
            alt_id: row.string("ref"),
            name: ctx.localize(row.str("name")),
            description: ctx.localize(row.str("description")),
            kind: ctx.localize(row.str("classname")),
            rarity: ctx.loot_rarity(row.int("quality")),
            season: ctx.loot_season(row.int("license")),
            image: image(row.str("image")),
            background: "ui_loot_bg_generic",
        })
        .collect()
}

pub(crate) fn compile(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table("loot/t9_unlock_items.csv", T9_UNLOCK_ITEMS, 0) else {
        return Ok(Vec::new());
    };
    finish_all("UnlockItemsT9", build(ctx, &table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::localization;
    use serde_json::json;

    #[test]
    fn test_unlock_item() {
        let ctx = Context::new(localization(&[
            ("T9/PERK_FLAK", "Flak Jacket"),
            ("T9/CLASS_PERK", "Perk"),
            ("LOOT_MP/QUALITY_1", "Common"),
            ("SEASONS/SEASON_1", "Season One"),
        ]));
        let table = Table::parse(
            "77,t9_flak,1,T9/PERK_FLAK,,T9/CLASS_PERK,placeholder_x,ui_flak_lg,1001\n",
            T9_UNLOCK_ITEMS,
            0,
        );
        let items = build(&ctx, &table);

        assert_eq!(
            serde_json::to_value(&items[0]).unwrap(),
            json!({
                "id": 77,
                "altId": "t9_flak",
                "name": "Flak Jacket",
                "description": null,
                "type": "Perk",
                "rarity": "Common",
                "season": "Season One",
                "image": null,
                "background": "ui_loot_bg_generic",
            })
        );
    }
}
