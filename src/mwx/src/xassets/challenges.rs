//! Challenge tables
//!
//! Officer, weapon unlock, weekly, mastery, turbo, miscellaneous and
//! seasonal challenges, plus seasonal progression rewards. Most challenge
//! descriptions are `&&1` templates filled with the challenge quantity.

use super::{finish, finish_all};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::model::LootReward;
use crate::paths::Paths;
use crate::table::{Row, Table};
use crate::text::{pretty_time, substitute, substitute_lenient};
use serde::Serialize;

// ============================================================================
// Column layouts
// ============================================================================

pub const ELDER_CHALLENGES: &[&str] = &["id", "ref", "name", "desc", "amount", "loot", "xp"];

pub const GUN_UNLOCK_CHALLENGES: &[&str] = &["id", "ref", "name", "desc", "amount", "xp", "loot"];

/// `weekly_challenges.csv`; the Battle Royale table adds a trailing column
pub const WEEKLY_CHALLENGES: &[&str] = &[
    "id", "ref", "name", "desc", "amount", "xp", "loot", "start", "length", "season", "unknown1",
];

pub const STICKER_BOOK_CHALLENGES: &[&str] = &[
    "id",
    "ref",
    "name",
    "desc",
    "amount",
    "loot",
    "XPReward",
    "categoryType",
    "icon",
    "detailDesc",
];

pub const PET_WATCH_TURBO_TABLE: &[&str] = &[
    "ref",
    "phaseNum",
    "phaseTime",
    "bonusTimeMax",
    "gameType",
    "charmID",
    "challengeDesc",
];

pub const MISC_CHALLENGES: &[&str] = &[
    "id",
    "ref",
    "name",
    "desc",
    "amount",
    "xp",
    "loot",
    "categoryType",
    "icon",
    "detailDesc",
    "conversionType",
    "hideSplash",
    "hideAARLoot",
    "showAARPopup",
    "sound",
];

pub const T9_SEASONAL_CHALLENGES: &[&str] = &[
    "challengeID",
    "challengeRef",
    "seasonNum",
    "seasonChallengeIndex",
    "title",
    "description",
    "levelGate",
    "isMastery",
    "isT9Exclusive",
    "tier1Quantity",
    "tier1XP",
    "tier2Quantity",
    "tier2XP",
    "tier3Quantity",
    "tier3XP",
    "tier4Quantity",
    "tier4XP",
    "tier5Quantity",
    "tier5XP",
    "callingCard",
];

pub const T9_SEASONAL_PROGRESSION_BLUEPRINT_REWARDS: &[&str] =
    &["seasonDispNum", "seasonRank", "blueprintID"];

const TIERS: [(&str, &str); 5] = [
    ("tier1Quantity", "tier1XP"),
    ("tier2Quantity", "tier2XP"),
    ("tier3Quantity", "tier3XP"),
    ("tier4Quantity", "tier4XP"),
    ("tier5Quantity", "tier5XP"),
];

/// Number following `marker` in a challenge reference, up to the next `_`.
///
/// `ref_number("ch_elder_s3_kills", "ch_elder_s")` is `Some(3)`.
pub fn ref_number(reference: &str, marker: &str) -> Option<i64> {
    let (_, rest) = reference.split_once(marker)?;
    rest.split('_').next()?.parse().ok()
}

fn record_name(row: Row<'_>) -> String {
    row.string("ref")
        .or_else(|| row.int("id").map(|id| id.to_string()))
        .unwrap_or_default()
}

// ============================================================================
// Officer challenges
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OfficerChallenge {
    alt_id: Option<String>,
    name: Option<String>,
    description: String,
    season: Option<i64>,
    xp: Option<i64>,
}

fn officer(ctx: &Context, row: Row<'_>) -> Result<OfficerChallenge> {
    let alt_id = row.string("ref");
    let season = alt_id
        .as_deref()
        .filter(|r| r.starts_with("ch_elder_s"))
        .map(|r| {
            ref_number(r, "ch_elder_s").ok_or_else(|| Error::MalformedRef {
                reference: r.to_string(),
                expected: "season number after ch_elder_s",
            })
        })
        .transpose()?;

    Ok(OfficerChallenge {
        name: ctx.localize(row.str("name")),
        description: substitute(
            ctx.localize(row.str("desc")).as_deref(),
            row.int("amount"),
            &record_name(row),
        )?,
        season,
        xp: row.int("xp"),
        alt_id,
    })
}

pub(crate) fn build_officer(ctx: &Context, table: &Table) -> Vec<Result<OfficerChallenge>> {
    table.rows().map(|row| officer(ctx, row)).collect()
}

pub(crate) fn compile_officer(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table("elder_challenges.csv", ELDER_CHALLENGES, 0) else {
        return Ok(Vec::new());
    };
    finish("OfficerChallenges", build_officer(ctx, &table))
}

// ============================================================================
// Weapon unlock challenges
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub(crate) enum UnlockReward {
    Loot(LootReward),
    Xp { xp: Option<i64> },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WeaponUnlockChallenge {
    id: Option<i64>,
    alt_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    rewards: Vec<UnlockReward>,
}

fn weapon_unlock(ctx: &Context, row: Row<'_>) -> Result<WeaponUnlockChallenge> {
    let description = match ctx.localize(row.str("desc")) {
        Some(template) => Some(substitute(
            Some(&template),
            row.int("amount"),
            &record_name(row),
        )?),
        None => None,
    };

    Ok(WeaponUnlockChallenge {
        id: row.int("id"),
        alt_id: row.string("ref"),
        name: ctx.localize(row.str("name")),
        description,
        rewards: vec![
            UnlockReward::Loot(ctx.loot_reward(row.int("loot"))),
            UnlockReward::Xp { xp: row.int("xp") },
        ],
    })
}

pub(crate) fn build_weapon_unlock(
    ctx: &Context,
    table: &Table,
) -> Vec<Result<WeaponUnlockChallenge>> {
    table.rows().map(|row| weapon_unlock(ctx, row)).collect()
}

pub(crate) fn compile_weapon_unlock(
    ctx: &Context,
    paths: &Paths,
) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table("gun_unlock_challenges.csv", GUN_UNLOCK_CHALLENGES, 0) else {
        return Ok(Vec::new());
    };
    finish("WeaponUnlockChallenges", build_weapon_unlock(ctx, &table))
}

// ============================================================================
// Weekly challenges
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WeeklyChallenge {
    id: Option<i64>,
    alt_id: String,
    name: Option<String>,
    description: String,
    start: Option<String>,
    season: i64,
    week: i64,
    xp: Option<i64>,
    rewards: Vec<LootReward>,
}

fn weekly(ctx: &Context, row: Row<'_>) -> Result<WeeklyChallenge> {
    let alt_id = row.string("ref").ok_or_else(|| Error::MissingField {
        record: record_name(row),
        column: "ref",
    })?;
    let malformed = |expected| Error::MalformedRef {
        reference: alt_id.clone(),
        expected,
    };
    let season = ref_number(&alt_id, "season_").ok_or_else(|| malformed("season_<n>"))?;
    let week = ref_number(&alt_id, "week_").ok_or_else(|| malformed("week_<n>"))?;

    let description = substitute(
        ctx.localize(row.str("desc")).as_deref(),
        row.int("amount"),
        &alt_id,
    )?;

    Ok(WeeklyChallenge {
        id: row.int("id"),
        name: ctx.localize(row.str("name")),
        description,
        start: row.int("start").and_then(pretty_time),
        season,
        week,
        xp: row.int("xp"),
        rewards: row
            .int("loot")
            .map(|loot| vec![ctx.loot_reward(Some(loot))])
            .unwrap_or_default(),
        alt_id,
    })
}

pub(crate) fn build_weekly(ctx: &Context, table: &Table) -> Vec<Result<WeeklyChallenge>> {
    table.rows().map(|row| weekly(ctx, row)).collect()
}

pub(crate) fn compile_weekly_br(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table("br_weekly_challenges.csv", WEEKLY_CHALLENGES, 0) else {
        return Ok(Vec::new());
    };
    finish("WeeklyChallengesBR", build_weekly(ctx, &table))
}

pub(crate) fn compile_weekly_mp(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table("weekly_challenges.csv", WEEKLY_CHALLENGES, 0) else {
        return Ok(Vec::new());
    };
    finish("WeeklyChallengesMP", build_weekly(ctx, &table))
}

// ============================================================================
// Mastery challenges
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MasteryChallenge {
    alt_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    category: Option<String>,
    rewards: Vec<MasteryReward>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct MasteryReward {
    amount: i64,
    xp: i64,
    id: i64,
    #[serde(rename = "type")]
    kind: Option<String>,
}

fn mastery(ctx: &Context, row: Row<'_>) -> Result<MasteryChallenge> {
    let amounts = row.ints("amount");
    let loot = row.ints("loot");
    let xp = row.ints("XPReward");

    let rewards = amounts
        .iter()
        .zip(&loot)
        .zip(&xp)
        .map(|((&amount, &id), &xp)| MasteryReward {
            amount,
            xp,
            id,
            kind: ctx.loot_type(Some(id)),
        })
        .collect();

    // The final stage quantity fills the template
    let description = match ctx.localize(row.str("desc")) {
        Some(template) => Some(substitute(
            Some(&template),
            amounts.last().copied(),
            &record_name(row),
        )?),
        None => None,
    };

    Ok(MasteryChallenge {
        alt_id: row.string("ref"),
        name: ctx.localize(row.str("name")),
        description,
        category: row.string("categoryType"),
        rewards,
    })
}

pub(crate) fn build_mastery(ctx: &Context, table: &Table) -> Vec<Result<MasteryChallenge>> {
    table.rows().map(|row| mastery(ctx, row)).collect()
}

pub(crate) fn compile_mastery(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table("sticker_book_challenges.csv", STICKER_BOOK_CHALLENGES, 0)
    else {
        return Ok(Vec::new());
    };
    finish("MasteryChallenges", build_mastery(ctx, &table))
}

// ============================================================================
// Tomogunchi turbo challenges
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TurboChallenge {
    alt_id: Option<String>,
    phase: Option<i64>,
    description: Option<String>,
    phase_time: Option<i64>,
    max_bonus_time: Option<i64>,
    charm_alt_id: Option<String>,
}

pub(crate) fn build_turbo(ctx: &Context, table: &Table) -> Vec<TurboChallenge> {
    table
        .rows()
        .map(|row| TurboChallenge {
            alt_id: row.string("ref"),
            phase: row.int("phaseNum"),
            description: ctx.localize(row.str("challengeDesc")),
            phase_time: row.int("phaseTime"),
            max_bonus_time: row.int("bonusTimeMax"),
            charm_alt_id: row.int("charmID").map(|id| format!("cos_{}", id)),
        })
        .collect()
}

pub(crate) fn compile_turbo(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table("mp/petwatchturbotable.csv", PET_WATCH_TURBO_TABLE, 0) else {
        return Ok(Vec::new());
    };
    finish_all("TurboChallenges", build_turbo(ctx, &table))
}

// ============================================================================
// Miscellaneous challenges
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MiscChallenge {
    alt_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    rewards: Vec<LootReward>,
}

pub(crate) fn build_misc(ctx: &Context, table: &Table) -> Vec<MiscChallenge> {
    table
        .rows()
        .map(|row| {
            let description = ctx
                .localize(row.str("desc"))
                .or_else(|| ctx.localize(row.str("detailDesc")));

            MiscChallenge {
                alt_id: row.string("ref"),
                name: ctx.localize(row.str("name")),
                description: substitute_lenient(description, row.int("amount")),
                rewards: vec![ctx.loot_reward(row.int("loot"))],
            }
        })
        .collect()
}

pub(crate) fn compile_misc(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table("misc_challenges.csv", MISC_CHALLENGES, 0) else {
        return Ok(Vec::new());
    };
    finish_all("MiscellaneousChallenges", build_misc(ctx, &table))
}

// ============================================================================
// Seasonal challenges
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SeasonalChallenge {
    id: Option<i64>,
    alt_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    season: Option<i64>,
    image: Option<String>,
    level_gate: Option<i64>,
    t9_exclusive: bool,
    mastery: bool,
    tiers: Vec<Tier>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Tier {
    amount: i64,
    xp: Option<i64>,
}

fn seasonal(ctx: &Context, row: Row<'_>) -> Result<SeasonalChallenge> {
    let tiers: Vec<Tier> = TIERS
        .iter()
        .filter_map(|(quantity, xp)| {
            Some(Tier {
                amount: row.int(quantity)?,
                xp: row.int(xp),
            })
        })
        .collect();

    let template = ctx.localize(row.str("description"));
    let description = match tiers.last() {
        // The highest present tier fills the template
        Some(last) => Some(substitute(
            template.as_deref(),
            Some(last.amount),
            &record_name(row),
        )?),
        None => template,
    };

    Ok(SeasonalChallenge {
        id: row.int("challengeID"),
        alt_id: row.string("challengeRef"),
        name: ctx.localize(row.str("title")),
        description,
        season: row.int("seasonNum"),
        image: row.string("callingCard"),
        level_gate: row.int("levelGate"),
        t9_exclusive: row.flag("isT9Exclusive"),
        mastery: row.flag("isMastery"),
        tiers,
    })
}

pub(crate) fn build_seasonal(ctx: &Context, table: &Table) -> Vec<Result<SeasonalChallenge>> {
    table.rows().map(|row| seasonal(ctx, row)).collect()
}

pub(crate) fn compile_seasonal(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table("mp/t9_seasonal_challenges.csv", T9_SEASONAL_CHALLENGES, 0)
    else {
        return Ok(Vec::new());
    };
    finish("SeasonalChallenges", build_seasonal(ctx, &table))
}

// ============================================================================
// Progression rewards
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ProgressionReward {
    season: Option<i64>,
    rank: Option<i64>,
    rewards: Vec<LootReward>,
}

pub(crate) fn build_progression_rewards(ctx: &Context, table: &Table) -> Vec<ProgressionReward> {
    table
        .rows()
        .map(|row| ProgressionReward {
            season: row.int("seasonDispNum"),
            rank: row.int("seasonRank"),
            rewards: vec![ctx.loot_reward(row.int("blueprintID"))],
        })
        .collect()
}

pub(crate) fn compile_progression_rewards(
    ctx: &Context,
    paths: &Paths,
) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table(
        "mp/progression/t9_seasonal_progression_blueprint_rewards.csv",
        T9_SEASONAL_PROGRESSION_BLUEPRINT_REWARDS,
        0,
    ) else {
        return Ok(Vec::new());
    };
    finish_all("ProgressionRewards", build_progression_rewards(ctx, &table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::localization;
    use crate::loot::LootRange;
    use serde_json::json;

    fn ctx() -> Context {
        Context::new(localization(&[
            ("CHALLENGE/KILLS", "Get &&1 kills"),
            ("CHALLENGE/WINS", "Win &&1 matches"),
            ("CHALLENGE/NAME", "Challenger"),
            ("CHALLENGE/DETAIL", "Play &&1 games"),
            ("CHALLENGE/PLAIN", "Just play"),
            ("LOOT_MP/CHARM", "Charm"),
        ]))
        .with_loot_ranges(vec![LootRange {
            start: 100,
            end: 199,
            label_key: Some("LOOT_MP/CHARM".into()),
        }])
    }

    #[test]
    fn test_ref_number() {
        assert_eq!(ref_number("ch_elder_s3_kills", "ch_elder_s"), Some(3));
        assert_eq!(ref_number("br_season_4_week_2_wins", "season_"), Some(4));
        assert_eq!(ref_number("br_season_4_week_12_wins", "week_"), Some(12));
        assert_eq!(ref_number("br_daily_wins", "week_"), None);
        assert_eq!(ref_number("ch_elder_sx_kills", "ch_elder_s"), None);
    }

    #[test]
    fn test_officer_challenges() {
        let table = Table::parse(
            "1,ch_elder_s2_kills,CHALLENGE/NAME,CHALLENGE/KILLS,25000,,500\n\
             2,ch_prestige_kills,CHALLENGE/NAME,CHALLENGE/KILLS,10,,100\n\
             3,ch_elder_s1_missing,CHALLENGE/NAME,CHALLENGE/KILLS,,,100\n\
             4,ch_elder_sx_bad,CHALLENGE/NAME,CHALLENGE/KILLS,10,,100\n",
            ELDER_CHALLENGES,
            0,
        );
        let records = build_officer(&ctx(), &table);

        let first = serde_json::to_value(records[0].as_ref().unwrap()).unwrap();
        assert_eq!(
            first,
            json!({
                "altId": "ch_elder_s2_kills",
                "name": "Challenger",
                "description": "Get 25,000 kills",
                "season": 2,
                "xp": 500,
            })
        );
        assert_eq!(records[1].as_ref().unwrap().season, None);
        assert!(matches!(records[2], Err(Error::Template { .. })));
        assert!(matches!(records[3], Err(Error::MalformedRef { .. })));
    }

    #[test]
    fn test_weapon_unlock_rewards() {
        let table = Table::parse(
            "9,ch_gun_ar,CHALLENGE/NAME,CHALLENGE/KILLS,1000,250,150\n\
             10,ch_gun_smg,CHALLENGE/NAME,,,,\n",
            GUN_UNLOCK_CHALLENGES,
            0,
        );
        let records = build_weapon_unlock(&ctx(), &table);
        let first = serde_json::to_value(records[0].as_ref().unwrap()).unwrap();

        assert_eq!(first["description"], json!("Get 1,000 kills"));
        assert_eq!(
            first["rewards"],
            json!([{"id": 150, "type": "Charm"}, {"xp": 250}])
        );

        let second = serde_json::to_value(records[1].as_ref().unwrap()).unwrap();
        assert_eq!(second["description"], json!(null));
        assert_eq!(
            second["rewards"],
            json!([{"id": null, "type": null}, {"xp": null}])
        );
    }

    #[test]
    fn test_weekly_challenges() {
        let table = Table::parse(
            concat!(
                "5,br_season_3_week_2_wins,CHALLENGE/NAME,CHALLENGE/WINS,3,1000,120,1586275200,",
                "604800,3,\n",
                "6,br_daily_wins,CHALLENGE/NAME,CHALLENGE/WINS,3,1000,,,,3,\n",
                "7,mp_season_3_week_4_kills,CHALLENGE/NAME,,3,1000,,,,3,\n",
            ),
            WEEKLY_CHALLENGES,
            0,
        );
        let records = build_weekly(&ctx(), &table);
        let first = serde_json::to_value(records[0].as_ref().unwrap()).unwrap();

        assert_eq!(
            first,
            json!({
                "id": 5,
                "altId": "br_season_3_week_2_wins",
                "name": "Challenger",
                "description": "Win 3 matches",
                "start": "Tuesday, April 7, 2020",
                "season": 3,
                "week": 2,
                "xp": 1000,
                "rewards": [{"id": 120, "type": "Charm"}],
            })
        );
        assert!(matches!(records[1], Err(Error::MalformedRef { .. })));
        assert!(matches!(records[2], Err(Error::Template { .. })));
    }

    #[test]
    fn test_mastery_rewards_zip_and_last_amount() {
        let table = Table::parse(
            concat!(
                "1,sb_ar,CHALLENGE/NAME,CHALLENGE/KILLS,",
                "\"100,500,1000\",\"101,102,103\",\"10,20\",weapon,,\n",
                "2,sb_empty,CHALLENGE/NAME,CHALLENGE/KILLS,,,,weapon,,\n",
            ),
            STICKER_BOOK_CHALLENGES,
            0,
        );
        let records = build_mastery(&ctx(), &table);
        let first = serde_json::to_value(records[0].as_ref().unwrap()).unwrap();

        assert_eq!(first["description"], json!("Get 1,000 kills"));
        assert_eq!(
            first["rewards"],
            json!([
                {"amount": 100, "xp": 10, "id": 101, "type": "Charm"},
                {"amount": 500, "xp": 20, "id": 102, "type": "Charm"},
            ])
        );
        assert!(records[1].is_err());
    }

    #[test]
    fn test_turbo_charm_alt_id() {
        let table = Table::parse(
            "turbo_1,1,60,30,dom,42,CHALLENGE/PLAIN\nturbo_2,2,60,30,dom,,\n",
            PET_WATCH_TURBO_TABLE,
            0,
        );
        let records = build_turbo(&ctx(), &table);
        assert_eq!(records[0].charm_alt_id.as_deref(), Some("cos_42"));
        assert_eq!(records[0].description.as_deref(), Some("Just play"));
        assert_eq!(records[1].charm_alt_id, None);
    }

    #[test]
    fn test_misc_description_fallback() {
        let table = Table::parse(
            "1,misc_a,CHALLENGE/NAME,,5000,,150,,,CHALLENGE/DETAIL,,,,,\n\
             2,misc_b,CHALLENGE/NAME,CHALLENGE/WINS,,,,,,,,,,,\n\
             3,misc_c,CHALLENGE/NAME,,,,,,,,,,,,\n",
            MISC_CHALLENGES,
            0,
        );
        let records = build_misc(&ctx(), &table);

        assert_eq!(records[0].description.as_deref(), Some("Play 5,000 games"));
        assert_eq!(records[1].description.as_deref(), Some("Win &&1 matches"));
        assert_eq!(records[2].description, None);
        assert_eq!(
            serde_json::to_value(&records[2].rewards).unwrap(),
            json!([{"id": null, "type": null}])
        );
    }

    #[test]
    fn test_seasonal_tiers() {
        let table = Table::parse(
            "1,t9_s1_kills,1,0,CHALLENGE/NAME,CHALLENGE/KILLS,10,1,0,50,100,250,200,,,,,,,cc_s1\n\
             2,t9_s1_none,1,1,CHALLENGE/NAME,CHALLENGE/PLAIN,0,0,1,,,,,,,,,,,\n\
             3,t9_s1_bad,1,2,CHALLENGE/NAME,CHALLENGE/MISSING,0,0,1,5,,,,,,,,,,\n",
            T9_SEASONAL_CHALLENGES,
            0,
        );
        let records = build_seasonal(&ctx(), &table);
        let first = serde_json::to_value(records[0].as_ref().unwrap()).unwrap();

        assert_eq!(first["description"], json!("Get 250 kills"));
        assert_eq!(
            first["tiers"],
            json!([{"amount": 50, "xp": 100}, {"amount": 250, "xp": 200}])
        );
        assert_eq!(first["mastery"], json!(true));
        assert_eq!(first["image"], json!("cc_s1"));

        let second = records[1].as_ref().unwrap();
        assert_eq!(second.description.as_deref(), Some("Just play"));
        assert!(second.t9_exclusive);
        assert!(records[2].is_err());
    }

    #[test]
    fn test_progression_rewards() {
        let table = Table::parse(
            "1,50,130\n",
            T9_SEASONAL_PROGRESSION_BLUEPRINT_REWARDS,
            0,
        );
        let records = build_progression_rewards(&ctx(), &table);
        assert_eq!(
            serde_json::to_value(&records[0]).unwrap(),
            json!({"season": 1, "rank": 50, "rewards": [{"id": 130, "type": "Charm"}]})
        );
    }
}
