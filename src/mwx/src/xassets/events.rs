//! Seasonal event rewards (`mp/seasonal_event.csv`)

use super::finish_all;
use crate::context::Context;
use crate::error::Result;
use crate::model::LootReward;
use crate::paths::Paths;
use crate::table::Table;
use serde::Serialize;

pub const SEASONAL_EVENT: &[&str] = &[
    "id",
    "eventID",
    "lootID",
    "challengeRef",
    "order",
    "isFinalReward",
    "location",
    "locationString",
    "isIntroGift",
    "isEarlyAccessGift",
    "backendChallengeRef",
    "targetProgress",
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SeasonalEvent {
    id: Option<i64>,
    alt_id: Option<String>,
    description: Option<String>,
    event_id: Option<i64>,
    final_reward: bool,
    intro_gift: bool,
    early_access_gift: bool,
    rewards: Vec<LootReward>,
}

pub(crate) fn build(ctx: &Context, table: &Table) -> Vec<SeasonalEvent> {
    table
        .rows()
        .map(|row| SeasonalEvent {
            id: row.int("id"),
            alt_id: row.string("challengeRef"),
            description: ctx.localize(row.str("locationString")),
            event_id: row.int("eventID"),
            final_reward: row.flag("isFinalReward"),
            intro_gift: row.flag("isIntroGift"),
            early_access_gift: row.flag("isEarlyAccessGift"),
            rewards: vec![ctx.loot_reward(row.int("lootID"))],
        })
        .collect()
}

pub(crate) fn compile(ctx: &Context, paths: &Paths) -> Result<Vec<serde_json::Value>> {
    let Some(table) = paths.table("mp/seasonal_event.csv", SEASONAL_EVENT, 0) else {
        return Ok(Vec::new());
    };
    finish_all("SeasonalEvents", build(ctx, &table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::localization;
    use crate::loot::LootRange;
    use serde_json::json;

    #[test]
    fn test_seasonal_event() {
        let ctx = Context::new(localization(&[
            ("EVENT/HAUNTING_LOC", "Verdansk"),
            ("LOOT_MP/SPRAY", "Spray"),
        ]))
        .with_loot_ranges(vec![LootRange {
            start: 900,
            end: 999,
            label_key: Some("LOOT_MP/SPRAY".into()),
        }]);
        let table = Table::parse(
            "3,7,950,ch_haunting_3,3,1,verdansk,EVENT/HAUNTING_LOC,0,1,,10\n",
            SEASONAL_EVENT,
            0,
        );
        let events = build(&ctx, &table);

        assert_eq!(
            serde_json::to_value(&events[0]).unwrap(),
            json!({
                "id": 3,
                "altId": "ch_haunting_3",
                "description": "Verdansk",
                "eventId": 7,
                "finalReward": true,
                "introGift": false,
                "earlyAccessGift": true,
                "rewards": [{"id": 950, "type": "Spray"}],
            })
        );
    }

    #[test]
    fn test_missing_loot_id() {
        let ctx = Context::default();
        let table = Table::parse("4,7,,ch_x,,0,,,0,0,,\n", SEASONAL_EVENT, 0);
        let event = serde_json::to_value(&build(&ctx, &table)[0]).unwrap();
        assert_eq!(event["rewards"], json!([{"id": null, "type": null}]));
    }
}
