//! Item source table export
//!
//! Re-exports the shared item source table as-is so consumers can look up
//! the title and kind of any marketplace id.

use super::finish_all;
use crate::context::Context;
use crate::error::Result;
use crate::loot::{ItemSource, ITEM_SOURCE_TABLE};
use crate::paths::Paths;
use crate::table::{Row, Table};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemSourceRecord {
    id: i64,
    alt_id: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    source: Option<String>,
    equippable: Equippable,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Equippable {
    modern_warfare: bool,
    warzone: bool,
    cold_war: bool,
    vanguard: bool,
}

impl ItemSourceRecord {
    fn from_row(row: Row<'_>) -> Option<Self> {
        let source = ItemSource::from_row(row)?;

        Some(Self {
            id: source.id,
            alt_id: source.name,
            kind: source.kind,
            source: row.string("gameSourceID"),
            equippable: Equippable {
                modern_warfare: source.modern_warfare,
                warzone: source.warzone,
                cold_war: source.cold_war,
                vanguard: source.vanguard,
            },
        })
    }
}

pub(crate) fn build(table: &Table) -> Vec<ItemSourceRecord> {
    table.rows().filter_map(ItemSourceRecord::from_row).collect()
}

pub(crate) fn compile(_ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table("mp/itemsourcetable.csv", ITEM_SOURCE_TABLE, 0) else {
        return Ok(Vec::new());
    };
    finish_all("ItemSources", build(&table))
}
