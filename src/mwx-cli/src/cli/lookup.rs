//! Lookup command CLI definitions

/// Resolver used by `mwx lookup`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LookupKind {
    /// Loot type of an item id
    Type,
    /// Rarity label of a quality code
    Rarity,
    /// Season label of a license code
    Season,
    /// Title availability of an item id
    Availability,
    /// Operator id of an operator reference
    Operator,
    WeaponClass,
    AttachmentCategory,
    CamoCategory,
    Attribute,
    GameTypeCategory,
    /// Store of a platform-exclusive reference
    Platform,
}

impl LookupKind {
    /// Whether the looked up value is a number
    pub fn numeric(self) -> bool {
        matches!(
            self,
            Self::Type | Self::Rarity | Self::Season | Self::Availability
        )
    }
}
