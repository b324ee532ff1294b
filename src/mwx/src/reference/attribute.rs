//! Weapon and vehicle attribute definitions
//!
//! Tracer, dismemberment and vehicle trail attributes referenced by cosmetic
//! tables. Mirrors the weapon and vehicle UI scripts.

/// Attribute reference -> localization key
pub const ATTRIBUTES: &[(&str, &str)] = &[
    ("red", "WEAPON/TRACER_RED"),
    ("blue", "WEAPON/TRACER_BLUE"),
    ("pink", "WEAPON/TRACER_PINK"),
    ("green", "WEAPON/TRACER_GREEN"),
    ("purple", "WEAPON/TRACER_PURPLE"),
    ("freedom", "WEAPON/TRACER_FREEDOM"),
    ("shadow", "WEAPON/TRACER_SHADOW"),
    ("gold", "WEAPON/TRACER_GOLD"),
    ("morte", "WEAPON/TRACER_MORTE"),
    ("tesla", "WEAPON/TRACER_TESLA"),
    ("sixteenBit", "WEAPON/TRACER_16BIT"),
    ("dark", "WEAPON/TRACER_DARK"),
    ("light", "WEAPON/TRACER_LIGHT"),
    ("orange", "WEAPON/TRACER_ORANGE"),
    ("yellow", "WEAPON/TRACER_YELLOW"),
    ("soul", "WEAPON/TRACER_SOUL"),
    ("purpleGreen", "WEAPON/TRACER_PURPLE_GREEN"),
    ("standardDis", "WEAPON/DISMEMBERMENT"),
    ("cryoDis", "WEAPON/CRYO_DISMEMBERMENT"),
    ("goldDis", "WEAPON/DISMEMBERMENT_GOLD"),
    ("electricDis", "WEAPON/DISMEMBERMENT_ELECTRIC"),
    ("tailLightTracerRed", "VEHICLES/ATTRIBUTE_TAIL_LIGHT_TRACER_RED"),
    ("flightTrailStandard", "VEHICLES/ATTRIBUTE_FLIGHT_TRAIL_STANDARD"),
    ("flightTrailShadow", "VEHICLES/ATTRIBUTE_FLIGHT_TRAIL_SHADOW"),
    ("tireTrailFlame", "VEHICLES/ATTRIBUTE_TIRE_TRAIL_FLAME"),
    ("smoke", "VEHICLES/ATTRIBUTE_SMOKE"),
    ("tireTrailTesla", "VEHICLES/ATTRIBUTE_TIRE_TRAIL_TESLA"),
    ("crimsonGold", "WEAPON/TRACER_CRIMSON_GOLD"),
    ("emerald", "WEAPON/TRACER_EMERALD"),
    ("amethyst", "WEAPON/TRACER_AMETHYST"),
    ("cherryBlossom", "WEAPON/TRACER_CHERRY_BLOSSOM"),
    ("ice", "WEAPON/TRACER_ICE"),
    ("rainbow", "WEAPON/TRACER_RAINBOW"),
    ("black", "WEAPON/TRACER_BLACK"),
    ("crimsonRonin", "WEAPON/TRACER_CRIMSON_RONIN"),
    ("acid", "WEAPON/TRACER_ACID"),
    ("tailLightTracerAkira", "VEHICLES/ATTRIBUTE_TAIL_LIGHT_TRACER_AKIRA"),
    ("flightTrailRainbow", "VEHICLES/ATTRIBUTE_FLIGHT_TRAIL_RAINBOW"),
];

/// Get the localization key for an attribute reference
pub fn attribute_key(reference: &str) -> Option<&'static str> {
    ATTRIBUTES
        .iter()
        .find(|(r, _)| *r == reference)
        .map(|(_, key)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_lookup() {
        assert_eq!(attribute_key("sixteenBit"), Some("WEAPON/TRACER_16BIT"));
        assert_eq!(
            attribute_key("tireTrailFlame"),
            Some("VEHICLES/ATTRIBUTE_TIRE_TRAIL_FLAME")
        );
        assert_eq!(attribute_key("Red"), None);
    }
}
