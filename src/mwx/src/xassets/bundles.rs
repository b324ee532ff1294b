//! Store bundles (`loot/bundle_ids.csv`)

use super::{finish_all, image};
use crate::context::Context;
use crate::error::Result;
use crate::model::{Availability, Reward};
use crate::paths::Paths;
use crate::reference::{CURRENCY_COD_POINTS, PRICE_NOT_FOR_SALE};
use crate::table::{Row, Table};
use serde::Serialize;

pub const BUNDLE_IDS: &[&str] = &[
    "id",
    "name",
    "description",
    "flavorText",
    "license",
    "bundleType",
    "image",
    "previewImage",
    "titleImage",
    "currencyID",
    "currencyAmount",
    "saleCurrencyAmount",
    "firstPartyProductID",
    "numItems",
    "item1",
    "item2",
    "item3",
    "item4",
    "item5",
    "item6",
    "item7",
    "item8",
    "item9",
    "item10",
    "numHiddenItems",
    "hiddenItem1",
    "hiddenItem2",
    "hiddenItem3",
    "hiddenItem4",
    "hiddenItem5",
    "hiddenItem6",
    "hiddenItem7",
    "hiddenItem8",
    "hiddenItem9",
    "hiddenItem10",
    "smartID",
    "smartCost",
    "isBattlePassBundle",
    "purchaseEnd",
    "dlcRef",
    "oldBundleOwnershipID",
    "isCollection",
    "ref",
    "minTierInclude",
    "maxTierInclude",
    "battlePassID",
    "collectionName",
    "collectionImage",
    "collectionPreviewImage",
    "featureText",
    "unknown1",
    "unknown2",
    "unknown3",
    "unknown4",
    "unknown5",
    "unknown6",
    "unknown7",
    "unknown8",
    "unknown9",
    "unknown10",
    "unknown11",
    "unknown12",
    "unknown13",
    "game",
    "giftable",
    "hasOperatorMissions",
    "mastercraft",
    "reactive",
    "ultraoutfit",
];

const ITEM_COLUMNS: [&str; 10] = [
    "item1", "item2", "item3", "item4", "item5", "item6", "item7", "item8", "item9", "item10",
];

const HIDDEN_ITEM_COLUMNS: [&str; 10] = [
    "hiddenItem1",
    "hiddenItem2",
    "hiddenItem3",
    "hiddenItem4",
    "hiddenItem5",
    "hiddenItem6",
    "hiddenItem7",
    "hiddenItem8",
    "hiddenItem9",
    "hiddenItem10",
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Bundle {
    id: Option<i64>,
    alt_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    flavor: Option<String>,
    feature: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    season: Option<String>,
    available: Availability,
    billboard: Option<String>,
    logo: Option<String>,
    price: Option<i64>,
    sale_price: Option<i64>,
    giftable: bool,
    mission: bool,
    mastercraft: bool,
    reactive: bool,
    ultra_skin: bool,
    items: Vec<Reward>,
    hidden_items: Vec<Reward>,
}

impl Bundle {
    fn from_row(ctx: &Context, row: Row<'_>) -> Self {
        let id = row.int("id");
        let cod_points = row.int("currencyID") == Some(CURRENCY_COD_POINTS);
        let price = |column: &str| {
            row.int(column)
                .filter(|a| cod_points && *a != PRICE_NOT_FOR_SALE)
        };

        Self {
            id,
            alt_id: row.string("ref"),
            name: ctx.localize(row.str("name")),
            description: ctx.localize(row.str("description")),
            flavor: ctx.localize(row.str("flavorText")),
            feature: ctx.localize(row.str("featureText")),
            kind: ctx
                .localization()
                .get_or(row.str("bundleType"), "MENU/BUNDLE_TYPE_VARIETY")
                .map(str::to_owned),
            season: ctx.loot_season(row.int("license")),
            available: ctx.availability(id),
            billboard: image(row.str("image")),
            logo: image(row.str("titleImage")),
            price: price("currencyAmount"),
            sale_price: price("saleCurrencyAmount"),
            giftable: row.flag("giftable"),
            mission: row.flag("hasOperatorMissions"),
            mastercraft: row.flag("mastercraft"),
            reactive: row.flag("reactive"),
            ultra_skin: row.flag("ultraoutfit"),
            items: Vec::new(),
            hidden_items: Vec::new(),
        }
    }

    fn add_items(&mut self, ctx: &Context, row: Row<'_>) {
        let items = rewards(ctx, row, "numItems", &ITEM_COLUMNS);
        let hidden = rewards(ctx, row, "numHiddenItems", &HIDDEN_ITEM_COLUMNS);

        self.items.extend(items);
        self.hidden_items.extend(hidden);
    }
}

/// The first `count` item columns that hold an id
fn rewards<'a>(
    ctx: &'a Context,
    row: Row<'a>,
    count: &str,
    columns: &'static [&'static str],
) -> impl Iterator<Item = Reward> + 'a {
    let count = row.int(count).unwrap_or(0).clamp(0, columns.len() as i64) as usize;
    columns[..count]
        .iter()
        .filter_map(move |column| row.int(column))
        .map(move |id| ctx.reward(id))
}

/// Build bundles.
///
/// Collection rows carry no bundle of their own; their items belong to the
/// bundle on the row before them.
pub(crate) fn build(ctx: &Context, table: &Table) -> Vec<Bundle> {
    let mut bundles: Vec<Bundle> = Vec::new();

    for row in table.rows() {
        if !row.flag("isCollection") {
            bundles.push(Bundle::from_row(ctx, row));
        }

        match bundles.last_mut() {
            Some(bundle) => bundle.add_items(ctx, row),
            None => tracing::warn!(
                "Skipping bundle collection {} with no preceding bundle",
                row.str("ref").unwrap_or_default()
            ),
        }
    }

    bundles
}

pub(crate) fn compile(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table("loot/bundle_ids.csv", BUNDLE_IDS, 0) else {
        return Ok(Vec::new());
    };
    finish_all("Bundles", build(ctx, &table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::localization;
    use serde_json::json;

    fn ctx() -> Context {
        Context::new(localization(&[
            ("BUNDLE/TRACER_PACK", "Tracer Pack"),
            ("MENU/BUNDLE_TYPE_VARIETY", "Variety Bundle"),
            ("MENU/BUNDLE_TYPE_OPERATOR", "Operator Bundle"),
        ]))
    }

    /// A bundle_ids row with the given cells set by column name
    fn row(cells: &[(&str, &str)]) -> String {
        BUNDLE_IDS
            .iter()
            .map(|column| {
                cells
                    .iter()
                    .find(|(c, _)| c == column)
                    .map(|(_, v)| *v)
                    .unwrap_or("")
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    fn table(rows: &[String]) -> Table {
        Table::parse(&rows.join("\n"), BUNDLE_IDS, 0)
    }

    #[test]
    fn test_bundle_fields() {
        let t = table(&[row(&[
            ("id", "100"),
            ("ref", "bundle_tracer"),
            ("name", "BUNDLE/TRACER_PACK"),
            ("bundleType", "MENU/BUNDLE_TYPE_OPERATOR"),
            ("image", "ui_billboard"),
            ("titleImage", "placeholder_x"),
            ("currencyID", "20"),
            ("currencyAmount", "2400"),
            ("saleCurrencyAmount", "9999"),
            ("numItems", "2"),
            ("item1", "11"),
            ("item2", "12"),
            ("item3", "13"),
            ("giftable", "1"),
        ])]);
        let bundles = build(&ctx(), &t);
        let b = serde_json::to_value(&bundles[0]).unwrap();

        assert_eq!(b["altId"], json!("bundle_tracer"));
        assert_eq!(b["name"], json!("Tracer Pack"));
        assert_eq!(b["type"], json!("Operator Bundle"));
        assert_eq!(b["billboard"], json!("ui_billboard"));
        assert_eq!(b["logo"], json!(null));
        assert_eq!(b["price"], json!(2400));
        assert_eq!(b["salePrice"], json!(null));
        assert_eq!(b["giftable"], json!(true));
        assert_eq!(b["ultraSkin"], json!(false));
        // numItems bounds the item columns
        assert_eq!(
            b["items"],
            json!([{"id": 11, "type": null}, {"id": 12, "type": null}])
        );
        assert_eq!(b["hiddenItems"], json!([]));
    }

    #[test]
    fn test_bundle_type_fallback_and_price_currency() {
        let t = table(&[row(&[
            ("id", "101"),
            ("currencyID", "5"),
            ("currencyAmount", "2400"),
        ])]);
        let b = serde_json::to_value(&build(&ctx(), &t)[0]).unwrap();
        assert_eq!(b["type"], json!("Variety Bundle"));
        assert_eq!(b["price"], json!(null));
    }

    #[test]
    fn test_collection_rows_extend_previous_bundle() {
        let t = table(&[
            row(&[("id", "1"), ("numItems", "1"), ("item1", "10")]),
            row(&[
                ("isCollection", "1"),
                ("numItems", "2"),
                ("item1", "20"),
                ("item2", "21"),
                ("numHiddenItems", "1"),
                ("hiddenItem1", "30"),
            ]),
            row(&[("id", "2")]),
        ]);
        let bundles = build(&ctx(), &t);

        assert_eq!(bundles.len(), 2);
        let ids: Vec<i64> = bundles[0].items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 20, 21]);
        assert_eq!(bundles[0].hidden_items.len(), 1);
        assert!(bundles[1].items.is_empty());
    }

    #[test]
    fn test_leading_collection_row_skipped() {
        let t = table(&[
            row(&[("isCollection", "1"), ("numItems", "1"), ("item1", "20")]),
            row(&[("id", "1")]),
        ]);
        let bundles = build(&ctx(), &t);
        assert_eq!(bundles.len(), 1);
        assert!(bundles[0].items.is_empty());
    }

    #[test]
    fn test_zero_rows() {
        assert!(build(&ctx(), &table(&[])).is_empty());
    }
}
