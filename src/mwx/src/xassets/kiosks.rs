//! Battle Royale buy station purchases

use super::finish;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::paths::Paths;
use crate::table::{Row, Table};
use serde::Serialize;

/// Layout of both `mp/brkioskpurchases*.csv` tables
pub const BR_KIOSK_PURCHASES: &[&str] = &[
    "index",
    "type",
    "ref",
    "cost",
    "title",
    "desc",
    "icon",
    "tabNum",
    "slotLabel",
    "fireSaleDiscount",
    "perkDiscount",
    "overrideFileOnly",
];

/// Kiosk costs are stored in hundreds of cash
const COST_SCALE: i64 = 100;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct KioskItem {
    alt_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    label: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    price: i64,
    image: Option<String>,
}

fn kiosk_item(ctx: &Context, row: Row<'_>) -> Result<KioskItem> {
    let alt_id = row.string("ref");
    let record = || alt_id.clone().unwrap_or_default();
    let cost = row.int("cost").ok_or_else(|| Error::MissingField {
        record: record(),
        column: "cost",
    })?;
    let price = cost.checked_mul(COST_SCALE).ok_or_else(|| Error::OutOfRange {
        record: record(),
        column: "cost",
    })?;

    Ok(KioskItem {
        name: ctx.localize(row.str("title")),
        description: ctx.localize(row.str("desc")),
        label: ctx.localize(row.str("slotLabel")),
        kind: row.string("type"),
        price,
        image: row.string("icon"),
        alt_id,
    })
}

pub(crate) fn build(ctx: &Context, table: &Table) -> Vec<Result<KioskItem>> {
    table.rows().map(|row| kiosk_item(ctx, row)).collect()
}

fn compile_table(
    name: &str,
    relative: &str,
    ctx: &Context,
    paths: &Paths,
) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table(relative, BR_KIOSK_PURCHASES, 0) else {
        return Ok(Vec::new());
    };
    finish(name, build(ctx, &table))
}

pub(crate) fn compile_br(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    compile_table("KioskBR", "mp/brkioskpurchases.csv", ctx, paths)
}

pub(crate) fn compile_br_truck(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    compile_table(
        "KioskBRTruck",
        "mp/brkioskpurchases_truckwar.csv",
        ctx,
        paths,
    )
}
