//! Weapon reticles (`loot/reticle_ids.csv` + `mp/reticletable.csv`)

use super::cosmetics::LOOT_IDS;
use super::finish_all;
use crate::context::Context;
use crate::error::Result;
use crate::join::join_by_ref;
use crate::model::Availability;
use crate::paths::Paths;
use crate::table::Table;
use serde::Serialize;

pub const RETICLE_TABLE: &[&str] = &[
    "index",
    "ref",
    "name",
    "desc",
    "image",
    "unknown1",
    "hideInUI",
    "category",
    "unknown2",
    "unlockType",
    "unlockString",
    "availableOffline",
    "altImage",
    "flipHybridAltImage",
    "battlepassImage",
    "unlockChallengeRef",
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Reticle {
    id: Option<i64>,
    alt_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    rarity: Option<String>,
    season: Option<String>,
    available: Availability,
    hidden: Option<bool>,
    image: Option<String>,
    background: &'static str,
}

pub(crate) fn build(ctx: &Context, ids: &Table, display: Option<&Table>) -> Vec<Reticle> {
    let mut reticles: Vec<Reticle> = ids
        .rows()
        .map(|row| {
            let id = row.int("id");
            Reticle {
                id,
                alt_id: row.string("ref"),
                name: None,
                description: None,
                kind: ctx.loot_type(id),
                rarity: ctx.loot_rarity(row.int("rarity")),
                season: ctx.loot_season(row.int("license")),
                available: ctx.availability(id),
                hidden: None,
                image: None,
                background: "ui_loot_bg_generic",
            }
        })
        .collect();

    if let Some(table) = display {
        join_by_ref(
            &mut reticles,
            table,
            "ref",
            |r| r.alt_id.as_deref(),
            |r, row| {
                r.name = ctx.localize(row.str("name"));
                r.description = ctx.localize(row.str("desc"));
                r.hidden = Some(row.flag("hideInUI"));
                r.image = row.string("image");
            },
        );
    }

    reticles
}

pub(crate) fn compile(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(ids) = paths.table("loot/reticle_ids.csv", LOOT_IDS, 0) else {
        return Ok(Vec::new());
    };
    let display = paths.table("mp/reticletable.csv", RETICLE_TABLE, 0);
    finish_all("Reticles", build(ctx, &ids, display.as_ref()))
}
