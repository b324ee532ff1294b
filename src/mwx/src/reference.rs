//! Reference data for Modern Warfare loot
//!
//! Hardcoded mappings the game keeps in its UI scripts rather than in data
//! tables: item source kinds, weapon/vehicle attributes, game type
//! categories, platform codes and the synthetic operator ids used for
//! items shared between operators.

mod attribute;
mod game_type;
mod source_kind;

pub use attribute::{attribute_key, ATTRIBUTES};
pub use game_type::{game_type_category_key, GAME_TYPE_CATEGORIES};
pub use source_kind::{source_kind, SourceKind, SOURCE_KINDS};

/// Range table label that marks an unassigned id range
pub const PLACEHOLDER_LABEL_KEY: &str = "LOOT_MP/PLACEHOLDER";

/// Literal season label for license code 99
pub const UNRELEASED: &str = "Unreleased";

/// License code for unreleased content
pub const LICENSE_UNRELEASED: i64 = 99;

/// Image name the game uses for missing artwork
pub const PLACEHOLDER_IMAGE: &str = "placeholder_x";

/// Currency id of COD Points
pub const CURRENCY_COD_POINTS: i64 = 20;

/// Price the store uses for "not for sale"
pub const PRICE_NOT_FOR_SALE: i64 = 9999;

// ============================================================================
// Operators
// ============================================================================

/// Items usable by every Modern Warfare operator
pub const OPERATOR_UNIVERSAL: i64 = 29999;

/// Items usable by every launch operator
pub const OPERATOR_UNIVERSAL_BASE: i64 = 29998;

/// Items usable by every Black Ops Cold War operator
pub const OPERATOR_T9_EXCLUSIVE: i64 = 29997;

/// Synthetic operator id for shared operator references
pub fn universal_operator_id(reference: &str) -> Option<i64> {
    match reference {
        "universal_ref" => Some(OPERATOR_UNIVERSAL),
        "universal_base_ref" => Some(OPERATOR_UNIVERSAL_BASE),
        "t9_exclusive_ref" => Some(OPERATOR_T9_EXCLUSIVE),
        _ => None,
    }
}

// ============================================================================
// Platforms
// ============================================================================

/// Platform code -> storefront name
pub const PLATFORMS: &[(&str, &str)] = &[
    ("pc", "battlenet"),
    ("sy", "playstation"),
    ("ms", "xbox"),
];

/// Get the storefront an exclusive item belongs to
pub fn platform_exclusivity(reference: Option<&str>) -> Option<&'static str> {
    let reference = reference?;
    PLATFORMS
        .iter()
        .find(|(code, _)| *code == reference)
        .map(|(_, name)| *name)
}

// ============================================================================
// Localization keys
// ============================================================================

/// Localization key of a rarity (quality) code
pub fn rarity_key(code: i64) -> String {
    format!("LOOT_MP/QUALITY_{}", code)
}

/// Localization key of a season index
pub fn season_key(index: i64) -> String {
    format!("SEASONS/SEASON_{}", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_operator_ids() {
        assert_eq!(universal_operator_id("universal_ref"), Some(29999));
        assert_eq!(universal_operator_id("universal_base_ref"), Some(29998));
        assert_eq!(universal_operator_id("t9_exclusive_ref"), Some(29997));
        assert_eq!(universal_operator_id("ghost_western"), None);
    }

    #[test]
    fn test_platform_exclusivity() {
        assert_eq!(platform_exclusivity(Some("sy")), Some("playstation"));
        assert_eq!(platform_exclusivity(Some("pc")), Some("battlenet"));
        assert_eq!(platform_exclusivity(Some("ms")), Some("xbox"));
        assert_eq!(platform_exclusivity(Some("switch")), None);
        assert_eq!(platform_exclusivity(None), None);
    }

    #[test]
    fn test_keys() {
        assert_eq!(rarity_key(3), "LOOT_MP/QUALITY_3");
        assert_eq!(season_key(6), "SEASONS/SEASON_6");
    }
}
