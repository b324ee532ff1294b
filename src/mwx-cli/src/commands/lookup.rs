//! Lookup command handler
//!
//! Resolves one value through the same resolvers the compilers use, which
//! is handy when checking why an item came out with an unexpected label.

use crate::cli::LookupKind;
use crate::config::Config;
use anyhow::{Context as _, Result};
use mwx::Context;
use std::path::Path;

/// Handle the lookup command
pub fn handle(config_path: Option<&Path>, kind: LookupKind, value: &str) -> Result<()> {
    let config = Config::load(config_path)?;
    let paths = config.paths();
    let ctx = super::load_context(&config, &paths)?;

    match resolve(&ctx, kind, value)? {
        Some(resolved) => println!("{}", resolved),
        None => println!("(none)"),
    }

    Ok(())
}

/// Resolve `value` as `kind`; `None` when the resolver has no answer
pub fn resolve(ctx: &Context, kind: LookupKind, value: &str) -> Result<Option<String>> {
    let value = value.trim();

    if kind.numeric() {
        let number: i64 = value
            .parse()
            .with_context(|| format!("Expected a number for {:?} lookup, got '{}'", kind, value))?;

        return Ok(match kind {
            LookupKind::Type => ctx.loot_type(Some(number)),
            LookupKind::Rarity => ctx.loot_rarity(Some(number)),
            LookupKind::Season => ctx.loot_season(Some(number)),
            LookupKind::Availability => Some(
                serde_json::to_string(&ctx.availability(Some(number)))
                    .context("Failed to serialize availability")?,
            ),
            _ => None,
        });
    }

    let reference = Some(value);
    Ok(match kind {
        LookupKind::Operator => ctx.operator_id(reference).map(|id| id.to_string()),
        LookupKind::WeaponClass => ctx.weapon_class(reference),
        LookupKind::AttachmentCategory => ctx.attachment_category(reference),
        LookupKind::CamoCategory => ctx.camo_category(reference),
        LookupKind::Attribute => ctx.attribute(reference),
        LookupKind::GameTypeCategory => ctx.game_type_category(reference),
        LookupKind::Platform => mwx::platform_exclusivity(reference).map(str::to_owned),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mwx::loot::{ItemSource, LootRange, NamedRef};
    use mwx::{Localization, PlaceholderRules};
    use std::collections::HashMap;

    fn ctx() -> Context {
        let raw: HashMap<String, Option<String>> = [
            ("LOOT_MP/CAMO", "Camo"),
            ("LOOT_MP/QUALITY_2", "Rare"),
            ("SEASONS/SEASON_4", "Season Four"),
            ("WEAPON/CLASS_AR", "Assault Rifles"),
            ("WEAPON/TRACER_RED", "Tracer Rounds: Red"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), Some(v.to_string())))
        .collect();

        Context::new(Localization::build(raw, &PlaceholderRules::default()))
            .with_loot_ranges(vec![LootRange {
                start: 1000,
                end: 1999,
                label_key: Some("LOOT_MP/CAMO".to_string()),
            }])
            .with_item_sources(vec![ItemSource {
                id: 1500,
                kind: Some("camo".to_string()),
                name: Some("camo_red".to_string()),
                modern_warfare: true,
                warzone: true,
                cold_war: true,
                vanguard: false,
            }])
            .with_weapon_classes(vec![NamedRef {
                reference: "weapon_assault".to_string(),
                name_key: Some("WEAPON/CLASS_AR".to_string()),
            }])
    }

    #[test]
    fn test_numeric_lookups() {
        let ctx = ctx();
        assert_eq!(
            resolve(&ctx, LookupKind::Type, "1500").unwrap().as_deref(),
            Some("Camo")
        );
        assert_eq!(
            resolve(&ctx, LookupKind::Rarity, "2").unwrap().as_deref(),
            Some("Rare")
        );
        assert_eq!(
            resolve(&ctx, LookupKind::Season, "4002").unwrap().as_deref(),
            Some("Season Four")
        );
        assert_eq!(
            resolve(&ctx, LookupKind::Availability, " 1500 ").unwrap().as_deref(),
            Some(r#"{"coldWar":true,"warzone":true,"modernWarfare":true}"#)
        );
        assert_eq!(resolve(&ctx, LookupKind::Type, "5").unwrap(), None);
    }

    #[test]
    fn test_numeric_lookup_rejects_text() {
        let err = resolve(&ctx(), LookupKind::Season, "four").unwrap_err();
        assert!(err.to_string().contains("four"));
    }

    #[test]
    fn test_reference_lookups() {
        let ctx = ctx();
        assert_eq!(
            resolve(&ctx, LookupKind::WeaponClass, "weapon_assault")
                .unwrap()
                .as_deref(),
            Some("Assault Rifles")
        );
        assert_eq!(
            resolve(&ctx, LookupKind::Attribute, "red").unwrap().as_deref(),
            Some("Tracer Rounds: Red")
        );
        assert_eq!(
            resolve(&ctx, LookupKind::Platform, "pc").unwrap().as_deref(),
            Some("battlenet")
        );
        assert_eq!(resolve(&ctx, LookupKind::CamoCategory, "none").unwrap(), None);
    }
}
