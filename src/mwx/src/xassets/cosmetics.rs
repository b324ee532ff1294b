//! Cosmetic item compilers
//!
//! Every cosmetic kind is the same two-pass shape: a `loot/<kind>_ids.csv`
//! table carrying id, reference, rarity and license, then a display table
//! joined by reference string for name, text and artwork. The kinds differ
//! only in file names, column layouts and a few extra resolved fields, so
//! they are described here as data.

use super::finish_all;
use crate::context::Context;
use crate::error::Result;
use crate::join::join_by_ref;
use crate::model::Availability;
use crate::paths::Paths;
use crate::reference::platform_exclusivity;
use crate::table::{Row, Table};
use serde::Serialize;

/// Column layout shared by every `loot/*_ids.csv` table
pub const LOOT_IDS: &[&str] = &[
    "id", "ref", "rarity", "price", "salvage", "license", "premium",
];

/// A cosmetic kind
#[derive(Debug)]
pub struct Cosmetic {
    pub name: &'static str,
    pub label: &'static str,
    pub output: &'static str,
    /// Id table under the import root
    pub ids: &'static str,
    pub display: Display,
    /// Fixed image for kinds without per-item artwork
    pub image: Option<&'static str>,
    pub background: Option<&'static str>,
}

/// Secondary display table and the columns it feeds
#[derive(Debug)]
pub struct Display {
    pub path: &'static str,
    pub columns: &'static [&'static str],
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub flavor: Option<&'static str>,
    pub image: Option<&'static str>,
    pub hidden: Option<&'static str>,
    pub extras: &'static [Extra],
}

/// Kind-specific fields resolved from a display table column
#[derive(Debug, Clone, Copy)]
pub enum Extra {
    /// Operator reference -> `operatorId`
    Operator(&'static str),
    /// Camo category reference -> `category`
    CamoCategory(&'static str),
    /// Tracer, dismemberment or vehicle attribute -> `attribute`
    Attribute(&'static str),
    /// Platform code -> `exclusive`
    Exclusive(&'static str),
    /// Localized unlock text -> `unlock`
    Unlock(&'static str),
}

// ============================================================================
// Kinds
// ============================================================================

pub const ACCESSORIES: Cosmetic = Cosmetic {
    name: "Accessories",
    label: "Accessories",
    output: "accessories.json",
    ids: "loot/accessory_ids.csv",
    display: Display {
        path: "mp/accessorytable.csv",
        columns: &["index", "ref", "name", "desc", "flavorText", "image", "hideInUI"],
        name: "name",
        description: Some("desc"),
        flavor: Some("flavorText"),
        image: Some("image"),
        hidden: Some("hideInUI"),
        extras: &[],
    },
    image: None,
    background: Some("ui_loot_bg_generic"),
};

pub const CALLING_CARDS: Cosmetic = Cosmetic {
    name: "CallingCards",
    label: "Calling Cards",
    output: "callingCards.json",
    ids: "loot/playercard_ids.csv",
    display: Display {
        path: "mp/callingcards.csv",
        columns: &[
            "index",
            "ref",
            "name",
            "image",
            "flavorText",
            "hideInUI",
            "unlockString",
            "platformExclusive",
        ],
        name: "name",
        description: None,
        flavor: Some("flavorText"),
        image: Some("image"),
        hidden: Some("hideInUI"),
        extras: &[
            Extra::Unlock("unlockString"),
            Extra::Exclusive("platformExclusive"),
        ],
    },
    image: None,
    background: None,
};

pub const CAMOS: Cosmetic = Cosmetic {
    name: "Camos",
    label: "Camos",
    output: "camos.json",
    ids: "loot/camo_ids.csv",
    display: Display {
        path: "mp/camotable.csv",
        columns: &[
            "index",
            "ref",
            "name",
            "image",
            "category",
            "hideInUI",
            "unlockString",
        ],
        name: "name",
        description: None,
        flavor: None,
        image: Some("image"),
        hidden: Some("hideInUI"),
        extras: &[
            Extra::CamoCategory("category"),
            Extra::Unlock("unlockString"),
        ],
    },
    image: None,
    background: Some("ui_loot_bg_camo"),
};

pub const CHARMS: Cosmetic = Cosmetic {
    name: "Charms",
    label: "Charms",
    output: "charms.json",
    ids: "loot/weapon_charm_ids.csv",
    display: Display {
        path: "mp/weaponcharmtable.csv",
        columns: &["index", "ref", "name", "flavorText", "image", "hideInUI"],
        name: "name",
        description: None,
        flavor: Some("flavorText"),
        image: Some("image"),
        hidden: Some("hideInUI"),
        extras: &[],
    },
    image: None,
    background: Some("ui_loot_bg_charm"),
};

pub const CONSUMABLES: Cosmetic = Cosmetic {
    name: "Consumables",
    label: "Consumables",
    output: "consumables.json",
    ids: "loot/consumable_ids.csv",
    display: Display {
        path: "mp/consumabletable.csv",
        columns: &["index", "ref", "name", "desc", "image", "hideInUI"],
        name: "name",
        description: Some("desc"),
        flavor: None,
        image: Some("image"),
        hidden: Some("hideInUI"),
        extras: &[],
    },
    image: None,
    background: Some("ui_loot_bg_generic"),
};

pub const EMBLEMS: Cosmetic = Cosmetic {
    name: "Emblems",
    label: "Emblems",
    output: "emblems.json",
    ids: "loot/emblem_ids.csv",
    display: Display {
        path: "mp/emblemtable.csv",
        columns: &[
            "index",
            "ref",
            "name",
            "image",
            "hideInUI",
            "unlockString",
            "platformExclusive",
        ],
        name: "name",
        description: None,
        flavor: None,
        image: Some("image"),
        hidden: Some("hideInUI"),
        extras: &[
            Extra::Unlock("unlockString"),
            Extra::Exclusive("platformExclusive"),
        ],
    },
    image: None,
    background: Some("ui_loot_bg_emblem"),
};

pub const EXECUTIONS: Cosmetic = Cosmetic {
    name: "Executions",
    label: "Executions",
    output: "executions.json",
    ids: "loot/executions_ids.csv",
    display: Display {
        path: "mp/executiontable.csv",
        columns: &[
            "index",
            "ref",
            "name",
            "desc",
            "image",
            "operatorRef",
            "hideInUI",
        ],
        name: "name",
        description: Some("desc"),
        flavor: None,
        image: Some("image"),
        hidden: Some("hideInUI"),
        extras: &[Extra::Operator("operatorRef")],
    },
    image: None,
    background: Some("ui_loot_bg_execution"),
};

pub const FEATURES: Cosmetic = Cosmetic {
    name: "Features",
    label: "Features",
    output: "features.json",
    ids: "loot/feature_ids.csv",
    display: Display {
        path: "mp/featuretable.csv",
        columns: &["index", "ref", "name", "desc", "image", "hideInUI"],
        name: "name",
        description: Some("desc"),
        flavor: None,
        image: Some("image"),
        hidden: Some("hideInUI"),
        extras: &[],
    },
    image: None,
    background: Some("ui_loot_bg_feature"),
};

pub const GESTURES: Cosmetic = Cosmetic {
    name: "Gestures",
    label: "Gestures",
    output: "gestures.json",
    ids: "loot/gesture_ids.csv",
    display: Display {
        path: "mp/gesturetable.csv",
        columns: &["index", "ref", "name", "image", "hideInUI"],
        name: "name",
        description: None,
        flavor: None,
        image: Some("image"),
        hidden: Some("hideInUI"),
        extras: &[],
    },
    image: None,
    background: Some("ui_loot_bg_gesture"),
};

pub const OPERATOR_QUIPS: Cosmetic = Cosmetic {
    name: "OperatorQuips",
    label: "Operator Quips",
    output: "operatorQuips.json",
    ids: "loot/operator_quip_ids.csv",
    display: Display {
        path: "mp/operatorquips.csv",
        columns: &["index", "ref", "name", "operatorRef", "hideInUI"],
        name: "name",
        description: None,
        flavor: None,
        image: None,
        hidden: Some("hideInUI"),
        extras: &[Extra::Operator("operatorRef")],
    },
    image: Some("ui_operator_quip"),
    background: Some("ui_loot_bg_operator"),
};

pub const OPERATOR_SKINS: Cosmetic = Cosmetic {
    name: "OperatorSkins",
    label: "Operator Skins",
    output: "operatorSkins.json",
    ids: "loot/operator_skin_ids.csv",
    display: Display {
        path: "mp/operatorskins.csv",
        columns: &[
            "index",
            "ref",
            "name",
            "desc",
            "flavorText",
            "image",
            "operatorRef",
            "hideInUI",
            "unlockString",
            "platformExclusive",
        ],
        name: "name",
        description: Some("desc"),
        flavor: Some("flavorText"),
        image: Some("image"),
        hidden: Some("hideInUI"),
        extras: &[
            Extra::Operator("operatorRef"),
            Extra::Unlock("unlockString"),
            Extra::Exclusive("platformExclusive"),
        ],
    },
    image: None,
    background: Some("ui_loot_bg_operator"),
};

pub const SPECIAL_ITEMS: Cosmetic = Cosmetic {
    name: "SpecialItems",
    label: "Special Items",
    output: "specialItems.json",
    ids: "loot/special_ids.csv",
    display: Display {
        path: "mp/specialitemtable.csv",
        columns: &["index", "ref", "name", "desc", "image", "hideInUI"],
        name: "name",
        description: Some("desc"),
        flavor: None,
        image: Some("image"),
        hidden: Some("hideInUI"),
        extras: &[],
    },
    image: None,
    background: Some("ui_loot_bg_generic"),
};

pub const SPRAYS: Cosmetic = Cosmetic {
    name: "Sprays",
    label: "Sprays",
    output: "sprays.json",
    ids: "loot/spray_ids.csv",
    display: Display {
        path: "mp/spraytable.csv",
        columns: &["index", "ref", "name", "image", "hideInUI", "unlockString"],
        name: "name",
        description: None,
        flavor: None,
        image: Some("image"),
        hidden: Some("hideInUI"),
        extras: &[Extra::Unlock("unlockString")],
    },
    image: None,
    background: Some("ui_loot_bg_spray"),
};

pub const STICKERS: Cosmetic = Cosmetic {
    name: "Stickers",
    label: "Stickers",
    output: "stickers.json",
    ids: "loot/sticker_ids.csv",
    display: Display {
        path: "mp/stickertable.csv",
        columns: &["index", "ref", "name", "image", "hideInUI", "unlockString"],
        name: "name",
        description: None,
        flavor: None,
        image: Some("image"),
        hidden: Some("hideInUI"),
        extras: &[Extra::Unlock("unlockString")],
    },
    image: None,
    background: Some("ui_loot_bg_sticker"),
};

pub const VEHICLE_CAMOS: Cosmetic = Cosmetic {
    name: "VehicleCamos",
    label: "Vehicle Camos",
    output: "vehicleCamos.json",
    ids: "loot/vehicle_camo_ids.csv",
    display: Display {
        path: "mp/vehiclecamos.csv",
        columns: &["index", "ref", "name", "image", "hideInUI", "attribute"],
        name: "name",
        description: None,
        flavor: None,
        image: Some("image"),
        hidden: Some("hideInUI"),
        extras: &[Extra::Attribute("attribute")],
    },
    image: None,
    background: Some("ui_loot_bg_vehicle"),
};

pub const VEHICLE_TRACKS: Cosmetic = Cosmetic {
    name: "VehicleTracks",
    label: "Vehicle Tracks",
    output: "vehicleTracks.json",
    ids: "loot/vehicle_track_ids.csv",
    display: Display {
        path: "mp_cp/vehicletracks.csv",
        columns: &["index", "ref", "name", "desc", "image", "hideInUI"],
        name: "name",
        description: Some("desc"),
        flavor: None,
        image: Some("image"),
        hidden: Some("hideInUI"),
        extras: &[],
    },
    image: Some("ui_vehicle_battle_track"),
    background: Some("ui_loot_bg_vehicle_track"),
};

/// All cosmetic kinds
pub const COSMETICS: &[&Cosmetic] = &[
    &ACCESSORIES,
    &CALLING_CARDS,
    &CAMOS,
    &CHARMS,
    &CONSUMABLES,
    &EMBLEMS,
    &EXECUTIONS,
    &FEATURES,
    &GESTURES,
    &OPERATOR_QUIPS,
    &OPERATOR_SKINS,
    &SPECIAL_ITEMS,
    &SPRAYS,
    &STICKERS,
    &VEHICLE_CAMOS,
    &VEHICLE_TRACKS,
];

// ============================================================================
// Records
// ============================================================================

// Fields typed `Option<Option<_>>` only exist for kinds that configure them;
// the inner `None` is written as `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CosmeticItem {
    id: Option<i64>,
    alt_id: Option<String>,
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flavor: Option<Option<String>>,
    #[serde(rename = "type")]
    kind: Option<String>,
    rarity: Option<String>,
    season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operator_alt_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operator_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclusive: Option<Option<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unlock: Option<Option<String>>,
    available: Availability,
    hidden: Option<bool>,
    image: Option<String>,
    background: Option<&'static str>,
}

impl CosmeticItem {
    fn new(kind: &Cosmetic, ctx: &Context, row: Row<'_>) -> Self {
        let display = &kind.display;
        let id = row.int("id");
        let has = |f: fn(&Extra) -> bool| display.extras.iter().any(f);

        Self {
            id,
            alt_id: row.string("ref"),
            name: None,
            description: display.description.map(|_| None),
            flavor: display.flavor.map(|_| None),
            kind: ctx.loot_type(id),
            rarity: ctx.loot_rarity(row.int("rarity")),
            season: ctx.loot_season(row.int("license")),
            category: has(|e| matches!(e, Extra::CamoCategory(_))).then_some(None),
            attribute: has(|e| matches!(e, Extra::Attribute(_))).then_some(None),
            operator_alt_id: has(|e| matches!(e, Extra::Operator(_))).then_some(None),
            operator_id: has(|e| matches!(e, Extra::Operator(_))).then_some(None),
            exclusive: has(|e| matches!(e, Extra::Exclusive(_))).then_some(None),
            unlock: has(|e| matches!(e, Extra::Unlock(_))).then_some(None),
            available: ctx.availability(id),
            hidden: None,
            image: kind.image.map(str::to_owned),
            background: kind.background,
        }
    }

    fn apply(&mut self, display: &Display, ctx: &Context, row: Row<'_>) {
        self.name = ctx.localize(row.str(display.name));
        if let Some(column) = display.description {
            self.description = Some(ctx.localize(row.str(column)));
        }
        if let Some(column) = display.flavor {
            self.flavor = Some(ctx.localize(row.str(column)));
        }
        if let Some(column) = display.image {
            self.image = super::image(row.str(column));
        }
        if let Some(column) = display.hidden {
            self.hidden = Some(row.flag(column));
        }

        for extra in display.extras {
            match *extra {
                Extra::Operator(column) => {
                    let reference = row.str(column);
                    self.operator_alt_id = Some(reference.map(str::to_owned));
                    self.operator_id = Some(ctx.operator_id(reference));
                }
                Extra::CamoCategory(column) => {
                    self.category = Some(ctx.camo_category(row.str(column)));
                }
                Extra::Attribute(column) => {
                    self.attribute = Some(ctx.attribute(row.str(column)));
                }
                Extra::Exclusive(column) => {
                    self.exclusive = Some(platform_exclusivity(row.str(column)));
                }
                Extra::Unlock(column) => {
                    self.unlock = Some(ctx.localize(row.str(column)));
                }
            }
        }
    }
}

/// Build the records of one kind from its two tables
pub(crate) fn build(
    kind: &Cosmetic,
    ctx: &Context,
    ids: &Table,
    display: Option<&Table>,
) -> Vec<CosmeticItem> {
    let mut items: Vec<CosmeticItem> = ids
        .rows()
        .map(|row| CosmeticItem::new(kind, ctx, row))
        .collect();

    if let Some(table) = display {
        join_by_ref(
            &mut items,
            table,
            "ref",
            |item| item.alt_id.as_deref(),
            |item, row| item.apply(&kind.display, ctx, row),
        );
    }

    items
}

pub(crate) fn compile(
    kind: &Cosmetic,
    ctx: &Context,
    paths: &Paths,
) -> Result<Vec<serde_json::Value>> {
    let Some(ids) = paths.table(kind.ids, LOOT_IDS, 0) else {
        return Ok(Vec::new());
    };
    let display = paths.table(kind.display.path, kind.display.columns, 0);

    finish_all(kind.name, build(kind, ctx, &ids, display.as_ref()))
}
