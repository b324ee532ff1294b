//! XAsset compilers
//!
//! Each compiler reads its tables through [`Paths::table`], builds one
//! record per row with the shared resolvers in [`Context`], and writes a
//! single JSON array. A missing table yields an empty array.

mod bundles;
mod challenges;
mod cosmetics;
mod dlc;
mod events;
mod item_sources;
mod kiosks;
mod missions;
mod reticles;
mod unlock_items;
mod vehicle_horns;

pub use cosmetics::{Cosmetic, COSMETICS};

use crate::context::Context;
use crate::error::{Error, Result};
use crate::paths::{write_json, Paths};
use crate::text::format_thousands;
use serde::Serialize;

/// A registered compiler
#[derive(Debug, Clone, Copy)]
pub struct XAsset {
    /// Name used to select the compiler from the command line
    pub name: &'static str,
    /// Label used in the completion log line
    pub label: &'static str,
    /// Output file under the XAsset export directory
    pub output: &'static str,
    source: Source,
}

#[derive(Clone, Copy)]
enum Source {
    Tables(fn(&Context, &Paths) -> Result<Vec<serde_json::Value>>),
    Cosmetic(&'static Cosmetic),
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Tables(_) => f.write_str("Tables"),
            Source::Cosmetic(c) => write!(f, "Cosmetic({})", c.ids),
        }
    }
}

impl XAsset {
    /// Build the records without writing them
    pub fn build(&self, ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
        match self.source {
            Source::Tables(compile) => compile(ctx, paths),
            Source::Cosmetic(cosmetic) => cosmetics::compile(cosmetic, ctx, paths),
        }
    }

    /// Build, write and log one XAsset. Returns the record count.
    pub fn compile(&self, ctx: &Context, paths: &Paths) -> Result<usize> {
        let records = self.build(ctx, paths)?;
        write_json(&paths.xasset_output(self.output), &records)?;
        tracing::info!(
            "Compiled {} {}",
            format_thousands(records.len() as i64),
            self.label
        );
        Ok(records.len())
    }
}

const fn tables(
    name: &'static str,
    label: &'static str,
    output: &'static str,
    compile: fn(&Context, &Paths) -> Result<Vec<serde_json::Value>>,
) -> XAsset {
    XAsset {
        name,
        label,
        output,
        source: Source::Tables(compile),
    }
}

const fn cosmetic(cosmetic: &'static Cosmetic) -> XAsset {
    XAsset {
        name: cosmetic.name,
        label: cosmetic.label,
        output: cosmetic.output,
        source: Source::Cosmetic(cosmetic),
    }
}

/// Every compiler, in run order
pub const XASSETS: &[XAsset] = &[
    cosmetic(&cosmetics::ACCESSORIES),
    tables("Bundles", "Bundles", "bundles.json", bundles::compile),
    cosmetic(&cosmetics::CALLING_CARDS),
    cosmetic(&cosmetics::CAMOS),
    cosmetic(&cosmetics::CHARMS),
    cosmetic(&cosmetics::CONSUMABLES),
    tables("DLC", "DLC", "dlc.json", dlc::compile),
    cosmetic(&cosmetics::EMBLEMS),
    cosmetic(&cosmetics::EXECUTIONS),
    cosmetic(&cosmetics::FEATURES),
    cosmetic(&cosmetics::GESTURES),
    tables(
        "ItemSources",
        "Item Sources",
        "itemSources.json",
        item_sources::compile,
    ),
    tables("KioskBR", "Kiosk Items (BR)", "kioskBR.json", kiosks::compile_br),
    tables(
        "KioskBRTruck",
        "Kiosk Items (BR Truck War)",
        "kioskBRTruck.json",
        kiosks::compile_br_truck,
    ),
    tables("Missions", "Missions", "missions.json", missions::compile),
    tables(
        "MissionItems",
        "Mission Items",
        "missionItems.json",
        missions::compile_items,
    ),
    tables("BRMissions", "BR Missions", "brMissions.json", missions::compile_br),
    cosmetic(&cosmetics::OPERATOR_QUIPS),
    cosmetic(&cosmetics::OPERATOR_SKINS),
    tables("Reticles", "Reticles", "reticles.json", reticles::compile),
    tables(
        "SeasonalEvents",
        "Seasonal Events",
        "seasonalEvents.json",
        events::compile,
    ),
    cosmetic(&cosmetics::SPECIAL_ITEMS),
    cosmetic(&cosmetics::SPRAYS),
    cosmetic(&cosmetics::STICKERS),
    tables(
        "UnlockItemsT9",
        "T9 Unlock Items",
        "unlockItemsT9.json",
        unlock_items::compile,
    ),
    cosmetic(&cosmetics::VEHICLE_CAMOS),
    tables(
        "VehicleHorns",
        "Vehicle Horns",
        "vehicleHorns.json",
        vehicle_horns::compile,
    ),
    cosmetic(&cosmetics::VEHICLE_TRACKS),
    tables(
        "OfficerChallenges",
        "Officer Challenges",
        "officerChallenges.json",
        challenges::compile_officer,
    ),
    tables(
        "WeaponUnlockChallenges",
        "Weapon Unlock Challenges",
        "weaponUnlockChallenges.json",
        challenges::compile_weapon_unlock,
    ),
    tables(
        "WeeklyChallengesBR",
        "Weekly Battle Royale Challenges",
        "weeklyChallengesBR.json",
        challenges::compile_weekly_br,
    ),
    tables(
        "WeeklyChallengesMP",
        "Weekly Multiplayer Challenges",
        "weeklyChallengesMP.json",
        challenges::compile_weekly_mp,
    ),
    tables(
        "MasteryChallenges",
        "Mastery Challenges",
        "masteryChallenges.json",
        challenges::compile_mastery,
    ),
    tables(
        "TurboChallenges",
        "Tomogunchi Turbo Challenges",
        "turboChallenges.json",
        challenges::compile_turbo,
    ),
    tables(
        "MiscellaneousChallenges",
        "Miscellaneous Challenges",
        "miscChallenges.json",
        challenges::compile_misc,
    ),
    tables(
        "SeasonalChallenges",
        "Seasonal Challenges",
        "seasonalChallenges.json",
        challenges::compile_seasonal,
    ),
    tables(
        "ProgressionRewards",
        "Progression Rewards",
        "progressionRewards.json",
        challenges::compile_progression_rewards,
    ),
];

/// Find a compiler by name (case-insensitive)
pub fn xasset_by_name(name: &str) -> Option<&'static XAsset> {
    XASSETS.iter().find(|x| x.name.eq_ignore_ascii_case(name))
}

/// Run every compiler, or only the named ones, in registry order.
///
/// Unknown names are reported and ignored. Write failures abort the run.
pub fn compile_all(ctx: &Context, paths: &Paths, only: &[String]) -> Result<usize> {
    for name in only {
        if xasset_by_name(name).is_none() {
            tracing::warn!("Unknown XAsset: {}", name);
        }
    }

    let mut total = 0;
    for xasset in XASSETS {
        if !only.is_empty() && !only.iter().any(|n| n.eq_ignore_ascii_case(xasset.name)) {
            continue;
        }
        total += xasset.compile(ctx, paths)?;
    }

    Ok(total)
}

// ============================================================================
// Record helpers
// ============================================================================

/// Serialize built records, dropping the ones that failed.
///
/// Record-level errors are logged with the compiler name; anything else is
/// returned.
pub(crate) fn finish<T: Serialize>(
    name: &str,
    records: impl IntoIterator<Item = Result<T>>,
) -> Result<Vec<serde_json::Value>> {
    let mut out = Vec::new();

    for record in records {
        match record {
            Ok(record) => out.push(
                serde_json::to_value(record).map_err(|e| Error::Serialize(name.to_string(), e))?,
            ),
            Err(e) if e.is_record_error() => {
                tracing::warn!("Skipping {} record: {}", name, e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(out)
}

/// Serialize records that cannot fail individually
pub(crate) fn finish_all<T: Serialize>(
    name: &str,
    records: impl IntoIterator<Item = T>,
) -> Result<Vec<serde_json::Value>> {
    finish(name, records.into_iter().map(Ok))
}

/// `None` for the game's missing-artwork image
pub(crate) fn image(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| *v != crate::reference::PLACEHOLDER_IMAGE)
        .map(str::to_owned)
}
