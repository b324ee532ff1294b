//! # mwx
//!
//! Modern Warfare XAsset compiler library - loot resolution and
//! table-to-JSON compilers.
//!
//! This library provides functionality to:
//! - Load the game's localization with placeholder strings filtered out
//! - Resolve loot ids to their type, rarity, season and title availability
//! - Compile the game's delimited data tables into one JSON file per XAsset
//! - Export the compiled XAssets into the public item database layout
//!
//! ## Example
//!
//! ```no_run
//! use mwx::{Context, Paths};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let paths = Paths {
//!     import_xassets: "import/xassets".into(),
//!     import_images: "import/images".into(),
//!     export_xassets: "export/xassets".into(),
//!     export_database: "export/database".into(),
//! };
//!
//! let ctx = Context::load(&paths, std::path::Path::new("ModernWarfare/placeholders.json"))?;
//! println!("Rarity 4: {:?}", ctx.loot_rarity(Some(4)));
//!
//! mwx::compile_all(&ctx, &paths, &[])?;
//! mwx::database::compile(&ctx, &paths)?;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod database;
pub mod error;
pub mod join;
pub mod localize;
pub mod loot;
pub mod model;
pub mod paths;
pub mod reference;
pub mod table;
pub mod text;
pub mod xassets;

#[doc(inline)]
pub use context::{Context, License};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use localize::{Localization, PlaceholderRules};
#[doc(inline)]
pub use model::{Availability, LootReward, Reward};
#[doc(inline)]
pub use paths::Paths;
#[doc(inline)]
pub use table::{Row, Table};
#[doc(inline)]
pub use xassets::{compile_all, xasset_by_name, XAsset, XASSETS};

// Reference data (source kinds, attributes, game types, platforms)
#[doc(inline)]
pub use reference::{
    attribute_key, game_type_category_key, platform_exclusivity, source_kind,
    universal_operator_id, SourceKind, ATTRIBUTES, GAME_TYPE_CATEGORIES, PLATFORMS, SOURCE_KINDS,
};
