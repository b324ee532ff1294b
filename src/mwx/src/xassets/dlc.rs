//! First-party store products (`loot/dlc_ids.csv`)

use super::finish;
use crate::context::Context;
use crate::error::Result;
use crate::model::Reward;
use crate::paths::Paths;
use crate::table::{Row, Table};
use crate::text::substitute;
use serde::Serialize;

/// `loot/dlc_ids.csv`: product columns followed by `item1..item83`
pub const DLC_IDS: &[&str] = &[
    "id",
    "name",
    "type",
    "CPAmount",
    "PS4ID",
    "XB1ID",
    "battleNetID",
    "wegameID",
    "title",
    "image",
    "isCODPoints",
    "shouldShowPopup",
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
    "item11",
    "item12",
    "item13",
    "item14",
    "item15",
    "item16",
    "item17",
    "item18",
    "item19",
    "item20",
    "item21",
    "item22",
    "item23",
    "item24",
    "item25",
    "item26",
    "item27",
    "item28",
    "item29",
    "item30",
    "item31",
    "item32",
    "item33",
    "item34",
    "item35",
    "item36",
    "item37",
    "item38",
    "item39",
    "item40",
    "item41",
    "item42",
    "item43",
    "item44",
    "item45",
    "item46",
    "item47",
    "item48",
    "item49",
    "item50",
    "item51",
    "item52",
    "item53",
    "item54",
    "item55",
    "item56",
    "item57",
    "item58",
    "item59",
    "item60",
    "item61",
    "item62",
    "item63",
    "item64",
    "item65",
    "item66",
    "item67",
    "item68",
    "item69",
    "item70",
    "item71",
    "item72",
    "item73",
    "item74",
    "item75",
    "item76",
    "item77",
    "item78",
    "item79",
    "item80",
    "item81",
    "item82",
    "item83",
];

const FIRST_ITEM_COLUMN: usize = 12;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct StoreIds {
    battlenet: Option<i64>,
    playstation: Option<String>,
    xbox: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Dlc {
    id: Option<i64>,
    alt_id: Option<String>,
    name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    alt_type: Option<String>,
    image: Option<String>,
    store_ids: StoreIds,
    items: Vec<Reward>,
    /// Only consumables carry a rarity
    #[serde(skip_serializing_if = "Option::is_none")]
    rarity: Option<Option<String>>,
}

fn dlc(ctx: &Context, row: Row<'_>) -> Result<Dlc> {
    let id = row.int("id");
    let alt_id = row.string("name");

    let title = ctx.localize(row.str("title"));
    let name = if row.flag("isCODPoints") {
        let record = alt_id.as_deref().unwrap_or_default();
        Some(substitute(
            title.as_deref(),
            Some(row.int("CPAmount").unwrap_or(0)),
            record,
        )?)
    } else {
        title
    };

    let alt_type = row.string("type");
    let consumable = alt_type.as_deref() == Some("consumable");

    let mut kind = ctx.loot_type(id);
    if consumable && kind.is_none() {
        kind = ctx.text("LOOT_MP/CONSUMABLE");
    }

    Ok(Dlc {
        id,
        alt_id,
        name,
        kind,
        alt_type,
        image: row.string("image"),
        store_ids: StoreIds {
            battlenet: row.int("battleNetID"),
            playstation: row.string("PS4ID"),
            xbox: row.string("XB1ID"),
        },
        items: DLC_IDS[FIRST_ITEM_COLUMN..]
            .iter()
            .filter_map(|column| row.int(column))
            .map(|item| ctx.reward(item))
            .collect(),
        rarity: consumable.then(|| ctx.loot_rarity(Some(0))),
    })
}

pub(crate) fn build(ctx: &Context, table: &Table) -> Vec<Result<Dlc>> {
    table.rows().map(|row| dlc(ctx, row)).collect()
}

pub(crate) fn compile(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table("loot/dlc_ids.csv", DLC_IDS, 0) else {
        return Ok(Vec::new());
    };
    finish("DLC", build(ctx, &table))
}
