//! Operator missions, mission items and Battle Royale contracts

use super::finish_all;
use crate::context::Context;
use crate::error::Result;
use crate::join::{group_adjacent, join_by_ref};
use crate::model::LootReward;
use crate::paths::Paths;
use crate::table::{Row, Table};
use crate::text::{substitute_lenient, title_case};
use serde::Serialize;

pub const QUEST_CHALLENGES: &[&str] = &[
    "id",
    "ref",
    "name",
    "desc",
    "image",
    "category",
    "amount",
    "challenges",
    "xp",
    "loot",
    "keys",
    "salvage",
    "codPoints",
    "detailDesc",
    "totalStageValue",
    "isFinalStage",
    "activationType",
    "season",
    "unknown1",
];

pub const INTEL_CHALLENGES: &[&str] = &[
    "ref",
    "masterRef",
    "seasonWeek",
    "inGame",
    "event",
    "modelPartName",
    "originX",
    "originY",
    "originZ",
    "anglesX",
    "anglesY",
    "anglesZ",
    "image",
    "collectAll",
];

pub const MISSION_IDS: &[&str] = &[
    "index",
    "ref",
    "quality",
    "cost",
    "salvage",
    "license",
    "isPremium",
    "operatorSkinID",
    "missionImage",
    "missionName",
    "missionRef",
    "operatorRef",
    "operatorMissionItemID",
];

pub const BR_MISSIONS: &[&str] = &[
    "index",
    "ref",
    "title",
    "description",
    "descriptionParam",
    "paramText",
    "icon",
    "reward",
    "hasTimer",
    "paramKey",
    "useDescParamInParamText",
    "lootRef",
    "extraRewardText",
    "mapKeyIcon",
    "mapKeyTitle",
    "aarIcon",
    "overrideColor",
    "altTrackerText",
];

// ============================================================================
// Missions
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Mission {
    id: Option<i64>,
    name: Option<String>,
    description: Option<String>,
    category: Option<String>,
    season: Option<String>,
    image: Option<String>,
    objectives: Vec<Objective>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Objective {
    alt_id: Option<String>,
    description: Option<String>,
    xp: Option<i64>,
    rewards: Vec<LootReward>,
    /// Set when an intel challenge shares the objective's reference
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<Option<String>>,
}

impl Objective {
    fn from_row(ctx: &Context, row: Row<'_>) -> Self {
        let rewards = row
            .int("loot")
            .map(|loot| vec![ctx.loot_reward(Some(loot))])
            .unwrap_or_default();

        Self {
            alt_id: row.string("ref"),
            description: substitute_lenient(ctx.localize(row.str("desc")), row.int("amount")),
            xp: row.int("xp"),
            rewards,
            image: None,
        }
    }
}

/// Build missions from quest challenge rows.
///
/// Consecutive rows with the same `name` key are the objectives of one
/// mission; the first row of each run carries the mission fields.
pub(crate) fn build(ctx: &Context, quests: &Table, intel: Option<&Table>) -> Vec<Mission> {
    let mut missions: Vec<Mission> = group_adjacent(quests, "name")
        .into_iter()
        .filter_map(|group| {
            let first = *group.first()?;
            Some(Mission {
                id: first.int("id"),
                name: ctx.localize(first.str("name")),
                description: ctx.localize(first.str("detailDesc")),
                category: first.string("category"),
                season: ctx.loot_season(first.int("season").and_then(|s| s.checked_mul(1000))),
                image: first.string("image"),
                objectives: group
                    .into_iter()
                    .map(|row| Objective::from_row(ctx, row))
                    .collect(),
            })
        })
        .collect();

    if let Some(intel) = intel {
        for mission in &mut missions {
            join_by_ref(
                &mut mission.objectives,
                intel,
                "ref",
                |objective| objective.alt_id.as_deref(),
                |objective, row| objective.image = Some(row.string("image")),
            );
        }
    }

    missions
}

pub(crate) fn compile(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(quests) = paths.table("quest_challenges.csv", QUEST_CHALLENGES, 0) else {
        return Ok(Vec::new());
    };
    let intel = paths.table("mp/intel_challenges.csv", INTEL_CHALLENGES, 0);
    finish_all("Missions", build(ctx, &quests, intel.as_ref()))
}

// ============================================================================
// Mission items
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MissionItem {
    id: Option<i64>,
    alt_id: Option<String>,
    name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    rarity: Option<String>,
    season: Option<String>,
    challenge_id: Option<i64>,
    image: Option<String>,
    background: &'static str,
    rewards: Vec<LootReward>,
}

pub(crate) fn build_items(ctx: &Context, table: &Table) -> Vec<MissionItem> {
    table
        .rows()
        .map(|row| {
            let id = row.int("operatorMissionItemID");
            MissionItem {
                id,
                alt_id: row.string("missionRef"),
                name: ctx.localize(row.str("missionName")),
                kind: ctx.loot_type(id),
                rarity: ctx.loot_rarity(row.int("quality")),
                season: ctx.loot_season(row.int("license")),
                challenge_id: row.int("ref"),
                image: row.string("missionImage"),
                background: "ui_loot_bg_feature",
                rewards: vec![ctx.loot_reward(row.int("operatorSkinID"))],
            }
        })
        .collect()
}

pub(crate) fn compile_items(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table("loot/mission_ids.csv", MISSION_IDS, 0) else {
        return Ok(Vec::new());
    };
    finish_all("MissionItems", build_items(ctx, &table))
}

// ============================================================================
// Battle Royale missions
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BrMission {
    alt_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    image: Option<String>,
    timed: bool,
}

pub(crate) fn build_br(ctx: &Context, table: &Table) -> Vec<BrMission> {
    table
        .rows()
        .map(|row| {
            let title = ctx
                .localize(row.str("title"))
                .or_else(|| ctx.localize(row.str("mapKeyTitle")));

            BrMission {
                alt_id: row.string("ref"),
                name: title.as_deref().map(title_case),
                description: ctx.localize(row.str("description")),
                image: row.string("icon"),
                timed: row.flag("hasTimer"),
            }
        })
        .collect()
}

pub(crate) fn compile_br(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table("mp/brmissions.csv", BR_MISSIONS, 0) else {
        return Ok(Vec::new());
    };
    finish_all("BRMissions", build_br(ctx, &table))
}
