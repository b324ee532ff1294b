//! Vehicle horns (`loot/vehicle_horn_ids.csv` + `mp_cp/vehiclehorns.csv`)

use super::cosmetics::LOOT_IDS;
use super::finish_all;
use crate::context::Context;
use crate::error::Result;
use crate::join::join_by_ref;
use crate::model::Availability;
use crate::paths::Paths;
use crate::table::Table;
use serde::Serialize;

pub const VEHICLE_HORNS: &[&str] = &[
    "index",
    "ref",
    "name",
    "mtxAlias",
    "apcAlias",
    "apcAliasUI",
    "atvAlias",
    "atvAliasUI",
    "cargoAlias",
    "cargoAliasUI",
    "jeepAlias",
    "jeepAliasUI",
    "littleBirdAlias",
    "littleBirdAliasUI",
    "tacRoverAlias",
    "tacRoverAliasUI",
    "motorcycleAlias",
    "motorcycleAliasUI",
    "lootImage",
    "hideInUI",
    "unlockText",
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VehicleHorn {
    id: Option<i64>,
    alt_id: Option<String>,
    name: Option<String>,
    /// The horn table has no flavor column; kept for a uniform loot shape
    flavor: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    rarity: Option<String>,
    season: Option<String>,
    available: Availability,
    unlock: Option<String>,
    hidden: Option<bool>,
    image: &'static str,
    background: &'static str,
}

/// Unlock text with the quantity token dropped ("Reach Level &&1 " -> "Reach Level ")
fn unlock_text(text: Option<String>) -> Option<String> {
    text.map(|t| t.replace("&&1 ", ""))
}

pub(crate) fn build(ctx: &Context, ids: &Table, display: Option<&Table>) -> Vec<VehicleHorn> {
    let mut horns: Vec<VehicleHorn> = ids
        .rows()
        .map(|row| {
            let id = row.int("id");
            VehicleHorn {
                id,
                alt_id: row.string("ref"),
                name: None,
                flavor: None,
                kind: ctx.loot_type(id),
                rarity: ctx.loot_rarity(row.int("rarity")),
                season: ctx.loot_season(row.int("license")),
                available: ctx.availability(id),
                unlock: None,
                hidden: None,
                image: "ui_vehicle_horn",
                background: "ui_loot_bg_vehicle_horn",
            }
        })
        .collect();

    if let Some(table) = display {
        join_by_ref(
            &mut horns,
            table,
            "ref",
            |h| h.alt_id.as_deref(),
            |h, row| {
                h.name = ctx.localize(row.str("name"));
                h.unlock = unlock_text(ctx.localize(row.str("unlockText")));
                h.hidden = Some(row.flag("hideInUI"));
            },
        );
    }

    horns
}

pub(crate) fn compile(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(ids) = paths.table("loot/vehicle_horn_ids.csv", LOOT_IDS, 0) else {
        return Ok(Vec::new());
    };
    let display = paths.table("mp_cp/vehiclehorns.csv", VEHICLE_HORNS, 0);
    finish_all("VehicleHorns", build(ctx, &ids, display.as_ref()))
}
