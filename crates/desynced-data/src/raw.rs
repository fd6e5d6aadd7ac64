//! Serde shapes of the exported `data` table.
//!
//! The export is a JSON dump of the runtime's global `data` table. Lua has a
//! single table type, so an empty table may come out as `[]` and a sequence
//! may come out as an object keyed `"1"`, `"2"`, ... Every table here is read
//! through [`lua_table`], which accepts both.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

#[derive(Deserialize)]
#[serde(untagged)]
enum LuaTable<T> {
    Map(BTreeMap<String, T>),
    List(Vec<T>),
}

/// Read a Lua table as a map keyed by string.
///
/// Arrays are keyed by their 1-based index, zero-padded so that map order
/// matches sequence order.
pub fn lua_table<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<LuaTable<T>>::deserialize(deserializer)? {
        None => BTreeMap::new(),
        Some(LuaTable::Map(map)) => map,
        Some(LuaTable::List(list)) => list
            .into_iter()
            .enumerate()
            .map(|(idx, v)| (format!("{:06}", idx + 1), v))
            .collect(),
    })
}

/// Read a Lua sequence, in order.
///
/// An object whose keys are all integers is ordered by key value, so
/// `"10"` follows `"9"`. Other objects keep key order.
pub fn lua_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<LuaTable<T>>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(LuaTable::List(list)) => list,
        Some(LuaTable::Map(map)) => {
            let indices: Option<Vec<i64>> = map.keys().map(|key| key.trim().parse().ok()).collect();
            match indices {
                Some(indices) => {
                    let mut entries: Vec<(i64, T)> = indices.into_iter().zip(map.into_values()).collect();
                    entries.sort_by_key(|(idx, _)| *idx);
                    entries.into_iter().map(|(_, v)| v).collect()
                }
                None => map.into_values().collect(),
            }
        }
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GameDump {
    #[serde(deserialize_with = "lua_table")]
    pub frames: BTreeMap<String, RawFrame>,
    #[serde(deserialize_with = "lua_table")]
    pub components: BTreeMap<String, RawComponent>,
    #[serde(deserialize_with = "lua_table")]
    pub items: BTreeMap<String, RawItem>,
    #[serde(deserialize_with = "lua_table")]
    pub instructions: BTreeMap<String, RawInstruction>,
    #[serde(deserialize_with = "lua_table")]
    pub techs: BTreeMap<String, RawTech>,
    #[serde(deserialize_with = "lua_table")]
    pub tech_categories: BTreeMap<String, RawTechCategory>,
    #[serde(deserialize_with = "lua_table")]
    pub categories: BTreeMap<String, RawCategory>,
    #[serde(deserialize_with = "lua_table")]
    pub visuals: BTreeMap<String, RawVisual>,
}

/// Fields shared by everything that can carry a recipe.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RecipeSource {
    pub construction_recipe: Option<RawRecipe>,
    pub production_recipe: Option<RawRecipe>,
    pub base_id: Option<String>,
    pub race: Option<String>,
    pub shoot_fx: Option<String>,
}

/// `CreateConstructionRecipe`, `CreateProductionRecipe` or `CreateUplinkRecipe` output.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawRecipe {
    #[serde(deserialize_with = "lua_table")]
    pub items: BTreeMap<String, i32>,
    pub ticks: Option<f64>,
    #[serde(deserialize_with = "lua_table")]
    pub producers: BTreeMap<String, f64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawFrame {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub health_points: Option<i32>,
    pub power: Option<f64>,
    pub movement_speed: Option<f64>,
    pub visibility_range: Option<i32>,
    #[serde(deserialize_with = "lua_table")]
    pub slots: BTreeMap<String, i32>,
    pub size: Option<String>,
    pub visual: Option<String>,
    pub slot_type: Option<String>,
    pub trigger_channels: Option<String>,
    #[serde(flatten)]
    pub recipe: RecipeSource,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawComponent {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub attachment_size: Option<String>,
    pub power: Option<f64>,
    pub power_storage: Option<i32>,
    pub drain_rate: Option<f64>,
    pub charge_rate: Option<f64>,
    pub bandwidth: Option<i32>,
    pub transfer_radius: Option<i32>,
    pub trigger_radius: Option<i32>,
    pub trigger_channels: Option<String>,
    #[serde(flatten)]
    pub recipe: RecipeSource,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawItem {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub stack_size: Option<i32>,
    pub tag: Option<String>,
    /// `CreateMiningRecipe` output: miner component id to mining ticks.
    #[serde(deserialize_with = "lua_table")]
    pub mining_recipe: BTreeMap<String, f64>,
    #[serde(flatten)]
    pub recipe: RecipeSource,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawInstruction {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    /// `{ kind, name, description, data_type }` tuples.
    #[serde(deserialize_with = "lua_list")]
    pub args: Vec<Vec<JsonValue>>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawTech {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub category: Option<String>,
    pub texture: Option<String>,
    #[serde(deserialize_with = "lua_list")]
    pub require_tech: Vec<String>,
    pub progress_count: Option<i32>,
    pub uplink_recipe: Option<RawRecipe>,
    #[serde(deserialize_with = "lua_list")]
    pub unlocks: Vec<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawTechCategory {
    pub name: Option<String>,
    pub discovery_tech: Option<String>,
    pub initial_tech: Option<String>,
    #[serde(deserialize_with = "lua_list")]
    pub sub_categories: Vec<String>,
    pub texture: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawCategory {
    pub name: Option<String>,
    pub tab: Option<String>,
    pub filter_field: Option<String>,
    pub filter_val: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawVisual {
    /// `{ socket_name, size }` pairs.
    #[serde(deserialize_with = "lua_list")]
    pub sockets: Vec<Vec<JsonValue>>,
}

impl RawVisual {
    /// Sizes of every socket, in order.
    pub fn socket_sizes(&self) -> impl Iterator<Item = &str> {
        self.sockets.iter().filter_map(|s| s.get(1).and_then(JsonValue::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tables_as_arrays() {
        let dump: GameDump = serde_json::from_str(r#"{"frames": [], "items": {}}"#).unwrap();
        assert!(dump.frames.is_empty());
        assert!(dump.items.is_empty());
        assert!(dump.techs.is_empty());
    }

    #[test]
    fn test_sequence_order_is_kept() {
        let dump: GameDump = serde_json::from_str(
            r#"{"categories": [{"name": "A"}, {"name": "B"}, {"name": "C"}, {"name": "D"},
                {"name": "E"}, {"name": "F"}, {"name": "G"}, {"name": "H"}, {"name": "I"},
                {"name": "J"}]}"#,
        )
        .unwrap();
        let names: Vec<_> = dump.categories.values().filter_map(|c| c.name.as_deref()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);
    }

    #[test]
    fn test_keyed_sequence_sorts_numerically() {
        let tech: RawTech = serde_json::from_str(
            r#"{"require_tech": {"1": "a", "2": "b", "3": "c", "4": "d", "5": "e",
                "6": "f", "7": "g", "8": "h", "9": "i", "10": "j", "11": "k"}}"#,
        )
        .unwrap();
        assert_eq!(tech.require_tech, vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"]);

        let instruction: RawInstruction = serde_json::from_str(
            r#"{"args": {"2": ["out", "B"], "10": ["exec", "J"], "1": ["in", "A"]}}"#,
        )
        .unwrap();
        let names: Vec<_> = instruction.args.iter().filter_map(|a| a.get(1)?.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "J"]);
    }

    #[test]
    fn test_named_keys_keep_key_order() {
        let category: RawTechCategory =
            serde_json::from_str(r#"{"sub_categories": {"b": "Second", "a": "First"}}"#).unwrap();
        assert_eq!(category.sub_categories, vec!["First", "Second"]);
    }

    #[test]
    fn test_visual_socket_sizes() {
        let visual: RawVisual =
            serde_json::from_str(r#"{"sockets": [["a", "Small"], ["b", "Medium"], ["c"]]}"#).unwrap();
        assert_eq!(visual.socket_sizes().collect::<Vec<_>>(), vec!["Small", "Medium"]);
    }

    #[test]
    fn test_recipe_fields_flatten() {
        let frame: RawFrame = serde_json::from_str(
            r#"{"name": "Worker", "base_id": "f_base",
                "construction_recipe": {"items": {"metalplate": 5}, "ticks": 10}}"#,
        )
        .unwrap();
        assert_eq!(frame.recipe.base_id.as_deref(), Some("f_base"));
        let recipe = frame.recipe.construction_recipe.unwrap();
        assert_eq!(recipe.items.get("metalplate"), Some(&5));
        assert_eq!(recipe.ticks, Some(10.0));
    }
}
