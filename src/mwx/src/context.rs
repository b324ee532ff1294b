//! Resolution context
//!
//! The localization table and the shared lookup tables, loaded once per run
//! and passed by reference into every compiler. All resolvers are pure reads.

use crate::error::Result;
use crate::localize::{Localization, PlaceholderRules};
use crate::loot::{
    ItemSource, LootRange, NamedRef, OperatorRef, ATTACHMENT_CATEGORY_TABLE,
    CAMO_CATEGORY_TABLE, ITEM_SOURCE_TABLE, LOOT_MASTER, OPERATOR_IDS, WEAPON_CLASS_TABLE,
};
use crate::model::{Availability, LootReward, Reward};
use crate::paths::Paths;
use crate::reference::{
    self, attribute_key, game_type_category_key, rarity_key, season_key, source_kind,
    LICENSE_UNRELEASED, PLACEHOLDER_LABEL_KEY, UNRELEASED,
};
use std::path::Path;

/// Decoded license (season) code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum License {
    /// Not tied to a season
    None,
    Unreleased,
    Season(i64),
}

impl License {
    /// Decode a license code.
    ///
    /// Seasonal licenses are multiples of 1000. Mid-season updates (Reloaded)
    /// and season extensions add 1 and 2 to their season's code.
    pub fn decode(code: i64) -> Self {
        if code == 0 {
            return License::None;
        }
        if code == LICENSE_UNRELEASED {
            return License::Unreleased;
        }

        let code = match code.rem_euclid(1000) {
            0 => code,
            offset @ (1 | 2) => code - offset,
            _ => return License::None,
        };

        License::Season(code / 1000)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Context {
    localize: Localization,
    loot_ranges: Vec<LootRange>,
    item_sources: Vec<ItemSource>,
    operators: Vec<OperatorRef>,
    weapon_classes: Vec<NamedRef>,
    attachment_categories: Vec<NamedRef>,
    camo_categories: Vec<NamedRef>,
}

impl Context {
    pub fn new(localize: Localization) -> Self {
        Self {
            localize,
            ..Self::default()
        }
    }

    /// Load the localization table and every shared table for a run.
    ///
    /// The localization and placeholder files are required; shared tables
    /// that are missing are logged and left empty.
    pub fn load(paths: &Paths, placeholders: &Path) -> Result<Self> {
        let rules = PlaceholderRules::load(placeholders)?;
        let localize = Localization::load(paths.localize(), &rules)?;
        tracing::info!("Loaded {} localized strings", localize.len());

        let mut ctx = Self::new(localize);

        if let Some(t) = paths.table("loot/loot_master.csv", LOOT_MASTER, 1) {
            ctx.loot_ranges = LootRange::from_table(&t);
        }
        if let Some(t) = paths.table("mp/itemsourcetable.csv", ITEM_SOURCE_TABLE, 0) {
            ctx.item_sources = ItemSource::from_table(&t);
        }
        if let Some(t) = paths.table("loot/operator_ids.csv", OPERATOR_IDS, 0) {
            ctx.operators = OperatorRef::from_table(&t);
        }
        if let Some(t) = paths.table("mp/weaponClassTable.csv", WEAPON_CLASS_TABLE, 0) {
            ctx.weapon_classes = NamedRef::from_table(&t);
        }
        if let Some(t) = paths.table(
            "mp/attachmentcategorytable.csv",
            ATTACHMENT_CATEGORY_TABLE,
            0,
        ) {
            ctx.attachment_categories = NamedRef::from_table(&t);
        }
        if let Some(t) = paths.table("mp/camocategorytable.csv", CAMO_CATEGORY_TABLE, 0) {
            ctx.camo_categories = NamedRef::from_table(&t);
        }

        Ok(ctx)
    }

    pub fn with_loot_ranges(mut self, ranges: Vec<LootRange>) -> Self {
        self.loot_ranges = ranges;
        self
    }

    pub fn with_item_sources(mut self, sources: Vec<ItemSource>) -> Self {
        self.item_sources = sources;
        self
    }

    pub fn with_operators(mut self, operators: Vec<OperatorRef>) -> Self {
        self.operators = operators;
        self
    }

    pub fn with_weapon_classes(mut self, classes: Vec<NamedRef>) -> Self {
        self.weapon_classes = classes;
        self
    }

    pub fn with_attachment_categories(mut self, categories: Vec<NamedRef>) -> Self {
        self.attachment_categories = categories;
        self
    }

    pub fn with_camo_categories(mut self, categories: Vec<NamedRef>) -> Self {
        self.camo_categories = categories;
        self
    }

    pub fn localization(&self) -> &Localization {
        &self.localize
    }

    // ========================================================================
    // Localization
    // ========================================================================

    /// Localize a key read from a table cell
    pub fn localize(&self, key: Option<&str>) -> Option<String> {
        self.localize.get_opt(key).map(str::to_owned)
    }

    /// Localize a fixed key
    pub fn text(&self, key: &str) -> Option<String> {
        self.localize.get(key).map(str::to_owned)
    }

    // ========================================================================
    // Loot
    // ========================================================================

    /// Human readable loot type of an item id.
    ///
    /// Dense id ranges from the loot master table take precedence; items
    /// outside every range (blueprints, bundles, ...) fall back to the item
    /// source table. A range labelled as placeholder stops the search.
    pub fn loot_type(&self, id: Option<i64>) -> Option<String> {
        let id = id?;

        if let Some(range) = self.loot_ranges.iter().find(|r| r.contains(id)) {
            let key = range.label_key.as_deref();
            if key == Some(PLACEHOLDER_LABEL_KEY) {
                return None;
            }
            return self.localize(key);
        }

        let source = self.item_sources.iter().find(|s| s.id == id)?;
        let kind = source.kind.as_deref().unwrap_or_default();

        match source_kind(kind) {
            Some(known) => known.label_key.and_then(|key| self.text(key)),
            None => {
                tracing::warn!("Found unknown Loot Type; ID: {}, refType: {}", id, kind);
                None
            }
        }
    }

    /// Rarity label of a quality code
    pub fn loot_rarity(&self, code: Option<i64>) -> Option<String> {
        self.text(&rarity_key(code?))
    }

    /// Season label of a license code
    pub fn loot_season(&self, license: Option<i64>) -> Option<String> {
        match License::decode(license?) {
            License::None => None,
            License::Unreleased => Some(UNRELEASED.to_string()),
            License::Season(index) => self.text(&season_key(index)),
        }
    }

    /// Title availability of an item id
    pub fn availability(&self, id: Option<i64>) -> Availability {
        id.and_then(|id| self.item_sources.iter().find(|s| s.id == id))
            .map(|s| Availability {
                cold_war: s.cold_war,
                warzone: s.warzone,
                modern_warfare: s.modern_warfare,
            })
            .unwrap_or(Availability::DEFAULT)
    }

    /// Reward entry for a loot id
    pub fn reward(&self, id: i64) -> Reward {
        Reward {
            id,
            kind: self.loot_type(Some(id)),
        }
    }

    /// Reward entry for a loot id cell that may be empty
    pub fn loot_reward(&self, id: Option<i64>) -> LootReward {
        LootReward {
            id,
            kind: self.loot_type(id),
        }
    }

    // ========================================================================
    // References
    // ========================================================================

    /// Operator id of an operator reference
    pub fn operator_id(&self, reference: Option<&str>) -> Option<i64> {
        let reference = reference?;
        if let Some(id) = reference::universal_operator_id(reference) {
            return Some(id);
        }
        self.operators
            .iter()
            .find(|o| o.reference == reference)
            .and_then(|o| o.id)
    }

    pub fn weapon_class(&self, reference: Option<&str>) -> Option<String> {
        self.named(&self.weapon_classes, reference)
    }

    pub fn attachment_category(&self, reference: Option<&str>) -> Option<String> {
        self.named(&self.attachment_categories, reference)
    }

    pub fn camo_category(&self, reference: Option<&str>) -> Option<String> {
        self.named(&self.camo_categories, reference)
    }

    pub fn attribute(&self, reference: Option<&str>) -> Option<String> {
        self.localize(reference.and_then(attribute_key))
    }

    pub fn game_type_category(&self, reference: Option<&str>) -> Option<String> {
        self.localize(reference.and_then(game_type_category_key))
    }

    fn named(&self, table: &[NamedRef], reference: Option<&str>) -> Option<String> {
        let reference = reference?;
        let entry = table.iter().find(|r| r.reference == reference)?;
        self.localize(entry.name_key.as_deref())
    }
}
