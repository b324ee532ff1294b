//! Item source kind definitions

/// Item source kind (`refType` column of the item source table)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceKind {
    pub kind: &'static str,
    /// Localization key of the loot type label; `None` for placeholder rows
    pub label_key: Option<&'static str>,
}

const fn kind(kind: &'static str, label_key: &'static str) -> SourceKind {
    SourceKind {
        kind,
        label_key: Some(label_key),
    }
}

/// All known item source kinds, partially mirrored from the game's loot UI scripts
pub const SOURCE_KINDS: &[SourceKind] = &[
    kind("weapon", "LOOT_MP/ITEM_TYPE_WEAPON"),
    kind("operator", "LOOT_MP/OPERATOR"),
    kind("operator_skin", "LOOT_MP/OPERATOR_SKIN"),
    kind("executions", "LOOT_MP/OPERATOR_EXECUTION"),
    kind("equipment", "LOOT_MP/EQUIPMENT"),
    kind("accessory", "LOOT_MP/WATCH"),
    kind("playercards", "LOOT_MP/CALLING_CARD"),
    kind("weapon_charm", "LOOT_MP/CHARM"),
    kind("quip", "LOOT_MP/OPERATOR_QUIP"),
    kind("camo", "LOOT_MP/CAMO"),
    kind("emblems", "LOOT_MP/EMBLEM"),
    kind("attachment", "LOOT_MP/ATTACHMENT"),
    kind("sticker", "LOOT_MP/STICKER"),
    kind("xp_token", "LOOT_MP/CONSUMABLE"),
    kind("markeritem", "LOOT_MP/CONSUMABLE"),
    kind("reticle", "LOOT_MP/RETICLE"),
    kind("blueprint", "LOOT_MP/ITEM_TYPE_WEAPON"),
    kind("battlepass", "LOOT_MP/BATTLE_PASS"),
    kind("vehicle_track", "LOOT_MP/VEHICLE_TRACK"),
    kind("vehicle_horn", "LOOT_MP/VEHICLE_HORN"),
    kind("feature", "LOOT_MP/FEATURE"),
    kind("weapon_attachment", "LOOT_MP/ATTACHMENT"),
    kind("perk", "LOOT_MP/PERK"),
    kind("t9_equipment", "LOOT_MP/EQUIPMENT"),
    kind("killstreak", "LOOT_MP/STREAK"),
    kind("class", "LOOT_MP/FEATURE"),
    kind("zm_unlockable", "LOOT_MP/FEATURE"),
    kind("weapon_skill", "LOOT_MP/FEATURE"),
    kind("bonuscard", "LOOT_MP/FEATURE"),
    kind("vehicleskin", "LOOT_MP/VEHICLE_SKIN"),
    kind("bundle", "MENU/BUNDLE_TYPE_VARIETY"),
    SourceKind {
        kind: "placeholder",
        label_key: None,
    },
];

/// Get a source kind by its `refType` string
pub fn source_kind(kind: &str) -> Option<&'static SourceKind> {
    SOURCE_KINDS.iter().find(|k| k.kind == kind)
}
