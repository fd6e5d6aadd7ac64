//! Wiki name overrides.
//!
//! Some objects share an in-game name but need separate wiki pages. The
//! override table maps their lua ids to the names used on the wiki.

const WIKI_NAME_OVERRIDES: &[(&str, &str)] = &[
    ("c_mission_human_aicenter", "AI Research Center (Mission)"),
    ("f_bot_2m_as", "Command Center (Bot)"),
    ("c_internal_crane2", "Item Transporter (Large Beacon)"),
    ("c_internal_crane1", "Item Transporter (Beacon)"),
    ("c_internal_transporter", "Item Transporter (Human Warehouse)"),
    ("f_building2x1d", "Building 2x1 (1M) (Stockpile)"),
    ("f_building2x1c", "Building 2x1 (2M) (Advanced Materials)"),
    ("f_building2x2c", "Building 2x2 (2M1L) (Epic Structures) (A)"),
    ("f_building2x2d", "Building 2x2 (2M1L) (Epic Structures) (B)"),
    ("c_trilobyte_attack1", "Trilobyte Attack (1)"),
    ("c_trilobyte_attack2", "Trilobyte Attack (2)"),
    ("c_trilobyte_attack3", "Trilobyte Attack (3)"),
    ("c_trilobyte_attack4", "Trilobyte Attack (4)"),
    ("c_trilobyte_attack_t2", "Trilobyte Attack (T2)"),
    ("c_trilobyte_attack_t3", "Trilobyte Attack (T3)"),
    ("f_bug_home", "Bug Hole (Giant)"),
];

/// Wiki name override for `lua_id`, if any.
pub fn name_override(lua_id: &str) -> Option<&'static str> {
    WIKI_NAME_OVERRIDES
        .iter()
        .find(|(id, _)| *id == lua_id)
        .map(|(_, name)| *name)
}

/// Name an object is published under: the override, else its in-game name.
pub fn wiki_name(lua_id: &str, game_name: Option<&str>) -> Option<String> {
    name_override(lua_id)
        .or(game_name.filter(|n| !n.trim().is_empty()))
        .map(str::to_string)
}
