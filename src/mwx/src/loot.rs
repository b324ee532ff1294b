//! Shared lookup tables
//!
//! Tables read once per run and consulted by every compiler: the loot id
//! range table, the item source table and the small reference tables keyed
//! by reference string.

use crate::table::{Row, Table};

// ============================================================================
// Column layouts
// ============================================================================

/// `loot/loot_master.csv` (one header row)
pub const LOOT_MASTER: &[&str] = &[
    "rangeStart",
    "rangeEnd",
    "typeName",
    "typeValue",
    "hidden",
    "typeNameLoc",
    "typeDesc",
    "typeImg",
    "breadcrumb",
    "baseWeaponRef",
];

/// `mp/itemsourcetable.csv`
pub const ITEM_SOURCE_TABLE: &[&str] = &[
    "marketPlaceID",
    "refType",
    "refName",
    "gameSourceID",
    "equippableIW8MP",
    "equippableWZ",
    "equippableT9",
    "equippableS4",
    "lookupType",
];

/// `loot/operator_ids.csv`
pub const OPERATOR_IDS: &[&str] = &[
    "id", "ref", "rarity", "price", "salvage", "license", "premium",
];

/// `mp/weaponClassTable.csv`
pub const WEAPON_CLASS_TABLE: &[&str] = &[
    "index",
    "ref",
    "slot",
    "name",
    "pluralName",
    "showInMenus",
    "unlockTablePrefix",
    "showInCP",
    "image",
    "showInArmory",
    "previewScene",
    "attachScenePrefix",
    "unknown1",
    "unknown2",
    "classImage",
    "canBeGunsmithed",
    "attachCategoryWhitelist",
    "hasVariants",
    "isWZOnly",
];

/// `mp/attachmentcategorytable.csv`
pub const ATTACHMENT_CATEGORY_TABLE: &[&str] = &[
    "index",
    "ref",
    "name",
    "buttonIndex",
    "displayOrder",
    "categoryScene",
    "smallCategoryScene",
    "largeCategoryScene",
    "bone",
    "defaultLineOffsetX",
    "defaultLineOffsetY",
    "defaultLineOffsetZ",
    "enableBigGunPreviewCamera",
    "enableSmallGunPreviewCamera",
    "enableBigShotgunPreviewCamera",
];

/// `mp/camocategorytable.csv`
pub const CAMO_CATEGORY_TABLE: &[&str] = &["index", "ref", "name"];

// ============================================================================
// Records
// ============================================================================

/// One id range of the loot master table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LootRange {
    pub start: i64,
    pub end: i64,
    pub label_key: Option<String>,
}

impl LootRange {
    pub fn contains(&self, id: i64) -> bool {
        self.start <= id && id <= self.end
    }

    pub fn from_table(table: &Table) -> Vec<Self> {
        table
            .rows()
            .filter_map(|row| {
                Some(Self {
                    start: row.int("rangeStart")?,
                    end: row.int("rangeEnd")?,
                    label_key: row.string("typeNameLoc"),
                })
            })
            .collect()
    }
}

/// One row of the item source table
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSource {
    pub id: i64,
    pub kind: Option<String>,
    pub name: Option<String>,
    pub modern_warfare: bool,
    pub warzone: bool,
    pub cold_war: bool,
    pub vanguard: bool,
}

impl ItemSource {
    /// `None` for rows without a marketplace id
    pub fn from_row(row: Row<'_>) -> Option<Self> {
        Some(Self {
            id: row.int("marketPlaceID")?,
            kind: row.string("refType"),
            name: row.string("refName"),
            modern_warfare: row.flag("equippableIW8MP"),
            warzone: row.flag("equippableWZ"),
            cold_war: row.flag("equippableT9"),
            vanguard: row.flag("equippableS4"),
        })
    }

    pub fn from_table(table: &Table) -> Vec<Self> {
        table.rows().filter_map(Self::from_row).collect()
    }
}

/// Reference string -> display name key (weapon classes, categories)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRef {
    pub reference: String,
    pub name_key: Option<String>,
}

impl NamedRef {
    pub fn from_table(table: &Table) -> Vec<Self> {
        table
            .rows()
            .filter_map(|row| {
                Some(Self {
                    reference: row.string("ref")?,
                    name_key: row.string("name"),
                })
            })
            .collect()
    }
}

/// Reference string -> operator id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorRef {
    pub reference: String,
    pub id: Option<i64>,
}

impl OperatorRef {
    pub fn from_table(table: &Table) -> Vec<Self> {
        table
            .rows()
            .filter_map(|row| {
                Some(Self {
                    reference: row.string("ref")?,
                    id: row.int("id"),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loot_ranges_skip_incomplete_rows() {
        let table = Table::parse(
            "header\n1,100,charm,,0,LOOT_MP/CHARM\n,200,bad,,0,X\n",
            LOOT_MASTER,
            1,
        );
        let ranges = LootRange::from_table(&table);
        assert_eq!(ranges.len(), 1);
        assert!(ranges[0].contains(1));
        assert!(ranges[0].contains(100));
        assert!(!ranges[0].contains(101));
        assert_eq!(ranges[0].label_key.as_deref(), Some("LOOT_MP/CHARM"));
    }

    #[test]
    fn test_item_sources() {
        let table = Table::parse("50,weapon,iw8_ar,,1,0,1,0,\n", ITEM_SOURCE_TABLE, 0);
        let sources = ItemSource::from_table(&table);
        assert_eq!(sources[0].id, 50);
        assert_eq!(sources[0].kind.as_deref(), Some("weapon"));
        assert!(sources[0].modern_warfare);
        assert!(!sources[0].warzone);
        assert!(sources[0].cold_war);
        assert!(!sources[0].vanguard);
    }
}
