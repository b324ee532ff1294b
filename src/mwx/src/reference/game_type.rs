//! Game type category definitions (lobby and game mode menus)

/// Game type category -> localization key
pub const GAME_TYPE_CATEGORIES: &[(&str, &str)] = &[
    ("PrivateTournament", "LUA_MENU/TOURNAMENT"),
    ("Plunder", "LUA_MENU/GAMEMODE_PLUNDER"),
    ("BattleRoyale", "LUA_MENU/GAMEMODE_BATTLE_ROYALE"),
    ("WarzoneAlternate", "LUA_MENU/GAMEMODE_WARZONE_ALTERNATE"),
    ("MyModes", "LUA_MENU/MY_MODES"),
    ("Cwl", "LUA_MENU/CWL_MODES"),
    ("Standard", "LUA_MENU/STANDARD_MODES"),
    ("Alternate", "LUA_MENU/ALTERNATE_MODES"),
];

/// Get the localization key for a game type category
pub fn game_type_category_key(reference: &str) -> Option<&'static str> {
    GAME_TYPE_CATEGORIES
        .iter()
        .find(|(r, _)| *r == reference)
        .map(|(_, key)| *key)
}
