//! Domain records built from the exported `data` table.

use std::collections::BTreeSet;
use std::path::Path;
use std::str::FromStr;

use desynced_models::{
    ArgType, CategoryFilter, Component, ComponentSize, Entity, EntityType, Instruction, InstructionArg, Item,
    ItemType, MiningRecipe, Race, Recipe, RecipeItem, RecipeProducer, RecipeType, SlotType, Sockets, Technology,
    TechnologyCategory, TechnologyUnlock,
};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::names::wiki_name;
use crate::raw::{GameDump, RawFrame, RawItem, RawRecipe, RecipeSource};
use crate::ticks::{per_tick_to_per_second, ticks_to_seconds};

/// Producer name of construction recipes.
pub const CONSTRUCTION_PRODUCER: &str = "Construction";

/// Exported game data with lookups between its tables.
#[derive(Debug, Default)]
pub struct GameData {
    dump: GameDump,
}

impl GameData {
    /// Parse a JSON export.
    pub fn from_json(json: &str) -> Result<Self> {
        let dump: GameDump = serde_json::from_str(json)?;
        debug!(
            frames = dump.frames.len(),
            components = dump.components.len(),
            items = dump.items.len(),
            techs = dump.techs.len(),
            "loaded game data"
        );
        Ok(Self { dump })
    }

    /// Read and parse a JSON export from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::NotFound(path.display().to_string()));
        }
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn dump(&self) -> &GameDump {
        &self.dump
    }

    /// Readable name of an item, falling back to its id.
    pub fn item_name(&self, item_id: &str) -> String {
        self.dump
            .items
            .get(item_id)
            .and_then(|i| wiki_name(item_id, i.name.as_deref()))
            .unwrap_or_else(|| item_id.to_string())
    }

    /// Readable name of a component, falling back to its id.
    pub fn component_name(&self, component_id: &str) -> String {
        self.dump
            .components
            .get(component_id)
            .and_then(|c| wiki_name(component_id, c.name.as_deref()))
            .unwrap_or_else(|| component_id.to_string())
    }

    /// Readable name of anything a technology can unlock.
    pub fn unlock_name(&self, lua_id: &str) -> String {
        let game_name = self
            .dump
            .frames
            .get(lua_id)
            .and_then(|f| f.name.as_deref())
            .or_else(|| self.dump.components.get(lua_id).and_then(|c| c.name.as_deref()))
            .or_else(|| self.dump.items.get(lua_id).and_then(|i| i.name.as_deref()))
            .or_else(|| self.dump.instructions.get(lua_id).and_then(|i| i.name.as_deref()));

        wiki_name(lua_id, game_name).unwrap_or_else(|| lua_id.to_string())
    }

    fn tech_name(&self, tech_id: &str) -> String {
        self.dump
            .techs
            .get(tech_id)
            .and_then(|t| wiki_name(tech_id, t.name.as_deref()))
            .unwrap_or_else(|| tech_id.to_string())
    }

    /// Recipe of a frame, component or item, if it has one.
    ///
    /// Construction recipes take precedence over production recipes.
    pub fn recipe(&self, name: &str, source: &RecipeSource) -> Option<Recipe> {
        let is_derived = source.base_id.is_some();

        let (recipe_type, raw, producers) = if let Some(raw) = &source.construction_recipe {
            (RecipeType::Construction, raw, self.construction_producers(raw))
        } else if let Some(raw) = &source.production_recipe {
            (RecipeType::Production, raw, self.production_producers(raw))
        } else {
            return None;
        };

        Some(Recipe::new(recipe_type, name, self.recipe_items(raw), producers, is_derived))
    }

    fn recipe_items(&self, raw: &RawRecipe) -> Vec<RecipeItem> {
        raw.items
            .iter()
            .map(|(id, amount)| RecipeItem {
                name: self.item_name(id),
                amount: *amount,
            })
            .collect()
    }

    fn construction_producers(&self, raw: &RawRecipe) -> Vec<RecipeProducer> {
        vec![RecipeProducer {
            name: CONSTRUCTION_PRODUCER.to_string(),
            time: raw.ticks.and_then(ticks_to_seconds).unwrap_or_default(),
        }]
    }

    fn production_producers(&self, raw: &RawRecipe) -> Vec<RecipeProducer> {
        raw.producers
            .iter()
            .map(|(id, ticks)| RecipeProducer {
                name: self.component_name(id),
                time: ticks_to_seconds(*ticks).unwrap_or_default(),
            })
            .collect()
    }

    /// Every recipe of frames, components and items.
    pub fn recipes(&self) -> Vec<Recipe> {
        let frames = self.dump.frames.iter().map(|(id, f)| (id, f.name.as_deref(), &f.recipe));
        let components = self.dump.components.iter().map(|(id, c)| (id, c.name.as_deref(), &c.recipe));
        let items = self.dump.items.iter().map(|(id, i)| (id, i.name.as_deref(), &i.recipe));

        frames
            .chain(components)
            .chain(items)
            .filter_map(|(id, name, source)| {
                let name = wiki_name(id, name)?;
                self.recipe(&name, source)
            })
            .collect()
    }

    /// Miners harvesting an item, `None` for items that cannot be mined.
    pub fn mining_recipe(&self, name: &str, item: &RawItem) -> Option<MiningRecipe> {
        if item.mining_recipe.is_empty() {
            return None;
        }

        let producers = item
            .mining_recipe
            .iter()
            .map(|(id, ticks)| RecipeProducer {
                name: self.component_name(id),
                time: ticks_to_seconds(*ticks).unwrap_or_default(),
            })
            .collect();
        Some(MiningRecipe::new(name, producers))
    }

    /// Every mining recipe of items.
    pub fn mining_recipes(&self) -> Vec<MiningRecipe> {
        self.dump
            .items
            .iter()
            .filter_map(|(id, item)| {
                let name = wiki_name(id, item.name.as_deref())?;
                self.mining_recipe(&name, item)
            })
            .collect()
    }

    fn sockets(&self, frame: &RawFrame) -> Sockets {
        let mut sockets = Sockets::default();
        let Some(visual) = frame.visual.as_deref().and_then(|v| self.dump.visuals.get(v)) else {
            return sockets;
        };

        for size in visual.socket_sizes() {
            if !sockets.increment(size) {
                warn!(visual = ?frame.visual, size, "unknown socket size");
            }
        }
        sockets
    }

    /// Entities from `data.frames`.
    pub fn entities(&self) -> Vec<Entity> {
        self.dump
            .frames
            .iter()
            .filter_map(|(id, frame)| {
                let name = named("frame", id, frame.name.as_deref())?;
                let types = frame
                    .trigger_channels
                    .as_deref()
                    .map(|channels| {
                        channels
                            .split('|')
                            .filter_map(|c| parse_or_warn::<EntityType>(id, Some(c)))
                            .collect()
                    })
                    .unwrap_or_default();

                Some(Entity {
                    recipe: self.recipe(&name, &frame.recipe),
                    lua_id: id.clone(),
                    description: frame.desc.clone().unwrap_or_default(),
                    health: frame.health_points.unwrap_or_default(),
                    power_usage_per_second: frame.power.and_then(per_tick_to_per_second),
                    movement_speed: frame.movement_speed,
                    visibility: frame.visibility_range,
                    storage: frame.slots.get("storage").copied().unwrap_or_default(),
                    size: frame.size.clone().unwrap_or_default(),
                    race: race(id, &frame.recipe),
                    types,
                    sockets: self.sockets(frame),
                    slot_type: parse_or_warn::<SlotType>(id, frame.slot_type.as_deref()),
                    name,
                })
            })
            .collect()
    }

    /// Components from `data.components`.
    pub fn components(&self) -> Vec<Component> {
        self.dump
            .components
            .iter()
            .filter_map(|(id, component)| {
                let name = named("component", id, component.name.as_deref())?;
                Some(Component {
                    recipe: self.recipe(&name, &component.recipe),
                    lua_id: id.clone(),
                    description: component.desc.clone().unwrap_or_default(),
                    race: race(id, &component.recipe),
                    attachment_size: parse_or_warn::<ComponentSize>(id, component.attachment_size.as_deref()),
                    power_usage_per_second: component.power.and_then(per_tick_to_per_second),
                    power_storage: component.power_storage,
                    drain_rate: component.drain_rate.and_then(per_tick_to_per_second),
                    charge_rate: component.charge_rate.and_then(per_tick_to_per_second),
                    bandwidth: component.bandwidth,
                    transfer_radius: component.transfer_radius,
                    trigger_radius: component.trigger_radius,
                    trigger_channels: component.trigger_channels.clone().unwrap_or_default(),
                    name,
                })
            })
            .collect()
    }

    /// Items from `data.items`.
    pub fn items(&self) -> Vec<Item> {
        self.dump
            .items
            .iter()
            .filter_map(|(id, item)| {
                let name = named("item", id, item.name.as_deref())?;
                let item_type = item.tag.as_deref().and_then(|tag| {
                    let parsed = ItemType::from_tag(tag);
                    if parsed.is_none() {
                        warn!(lua_id = %id, tag, "unknown item tag");
                    }
                    parsed
                });

                Some(Item {
                    recipe: self.recipe(&name, &item.recipe),
                    mining_recipe: self.mining_recipe(&name, item),
                    lua_id: id.clone(),
                    description: item.desc.clone().unwrap_or_default(),
                    stack_size: item.stack_size.unwrap_or_default(),
                    item_type,
                    name,
                })
            })
            .collect()
    }

    /// Instructions from `data.instructions`.
    pub fn instructions(&self) -> Vec<Instruction> {
        self.dump
            .instructions
            .iter()
            .filter_map(|(id, instruction)| {
                let name = named("instruction", id, instruction.name.as_deref())?;
                let args = instruction.args.iter().filter_map(|arg| instruction_arg(id, arg)).collect();

                Some(Instruction {
                    name,
                    lua_id: id.clone(),
                    description: instruction.desc.clone().unwrap_or_default(),
                    category: instruction.category.clone().unwrap_or_default(),
                    icon: instruction
                        .icon
                        .as_deref()
                        .map(|icon| icon.rsplit('/').next().unwrap_or(icon).to_string())
                        .unwrap_or_default(),
                    args,
                })
            })
            .collect()
    }

    /// Technologies from `data.techs`.
    pub fn technologies(&self) -> Vec<Technology> {
        self.dump
            .techs
            .iter()
            .filter_map(|(id, tech)| {
                let name = named("tech", id, tech.name.as_deref())?;
                let recipe = tech.uplink_recipe.as_ref().map(|raw| {
                    Recipe::new(
                        RecipeType::Construction,
                        name.clone(),
                        self.recipe_items(raw),
                        self.construction_producers(raw),
                        false,
                    )
                });

                Some(Technology {
                    lua_id: id.clone(),
                    description: tech.desc.clone().unwrap_or_default(),
                    category: tech.category.clone().unwrap_or_default(),
                    texture: tech.texture.clone().unwrap_or_default(),
                    required_tech: tech.require_tech.iter().map(|t| self.tech_name(t)).collect(),
                    progress_count: tech.progress_count.unwrap_or_default(),
                    recipe,
                    name,
                })
            })
            .collect()
    }

    /// One unlock per entry of every technology's `unlocks`.
    pub fn tech_unlocks(&self) -> Vec<TechnologyUnlock> {
        self.dump
            .techs
            .iter()
            .filter_map(|(id, tech)| Some((named("tech", id, tech.name.as_deref())?, tech)))
            .flat_map(|(tech_name, tech)| {
                tech.unlocks
                    .iter()
                    .map(move |unlock| (tech_name.clone(), unlock))
                    .collect::<Vec<_>>()
            })
            .map(|(tech_name, unlock)| TechnologyUnlock::new(tech_name, self.unlock_name(unlock)))
            .collect()
    }

    /// Technology categories from `data.tech_categories`.
    pub fn technology_categories(&self) -> Vec<TechnologyCategory> {
        self.dump
            .tech_categories
            .iter()
            .filter_map(|(id, category)| {
                Some(TechnologyCategory {
                    name: named("tech category", id, category.name.as_deref())?,
                    lua_id: id.clone(),
                    discovery_tech: category.discovery_tech.as_deref().map(|t| self.tech_name(t)).unwrap_or_default(),
                    initial_tech: category.initial_tech.as_deref().map(|t| self.tech_name(t)).unwrap_or_default(),
                    sub_categories: category.sub_categories.clone(),
                    texture: category.texture.clone().unwrap_or_default(),
                })
            })
            .collect()
    }

    /// Build menu filters from `data.categories`, in game order.
    pub fn category_filters(&self) -> Vec<CategoryFilter> {
        self.dump
            .categories
            .iter()
            .enumerate()
            .filter_map(|(ordering, (id, category))| {
                Some(CategoryFilter {
                    name: named("category", id, category.name.as_deref())?,
                    tab: category.tab.clone().unwrap_or_default(),
                    filter_field: category.filter_field.clone().unwrap_or_default(),
                    filter_val: category.filter_val.clone().unwrap_or_default(),
                    ordering: ordering as i32,
                })
            })
            .collect()
    }

    /// Names of everything some technology unlocks.
    pub fn unlockable_names(&self) -> BTreeSet<String> {
        self.dump
            .techs
            .values()
            .flat_map(|tech| tech.unlocks.iter())
            .map(|id| self.unlock_name(id))
            .collect()
    }
}

/// Wiki name of an object, or `None` (with a warning) when it has none.
fn named(kind: &str, lua_id: &str, game_name: Option<&str>) -> Option<String> {
    let name = wiki_name(lua_id, game_name);
    if name.is_none() {
        warn!(kind, lua_id, "skipping object without a name");
    }
    name
}

fn parse_or_warn<T>(lua_id: &str, value: Option<&str>) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match desynced_models::parse_optional::<T>(value) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(lua_id, "{}", err);
            None
        }
    }
}

/// Race of an object.
///
/// Derived definitions that shoot bug effects are bugs whatever their base
/// says.
fn race(lua_id: &str, source: &RecipeSource) -> Option<Race> {
    if source.base_id.is_some() && source.shoot_fx.as_deref().is_some_and(|fx| fx.contains("bug")) {
        return Some(Race::Bug);
    }
    parse_or_warn(lua_id, source.race.as_deref())
}

fn instruction_arg(lua_id: &str, raw: &[JsonValue]) -> Option<InstructionArg> {
    let text = |idx: usize| raw.get(idx).and_then(JsonValue::as_str).unwrap_or_default().to_string();

    let arg_type = match raw.first().and_then(JsonValue::as_str) {
        Some("in") => ArgType::In,
        Some("out") => ArgType::Out,
        Some("exec") => ArgType::Exec,
        other => {
            warn!(lua_id, kind = ?other, "skipping instruction argument of unknown kind");
            return None;
        }
    };

    Some(InstructionArg {
        arg_type,
        name: text(1),
        description: text(2),
        data_type: text(3),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"{
        "frames": {
            "f_bot_1s_a": {
                "name": "Worker",
                "desc": "Basic unit",
                "health_points": 100,
                "power": -1,
                "movement_speed": 3.5,
                "visibility_range": 5,
                "slots": {"storage": 1},
                "size": "Small",
                "race": "robot",
                "trigger_channels": "bot",
                "visual": "v_bot_1s_a",
                "construction_recipe": {"items": {"metalplate": 5, "circuit_board": 1}, "ticks": 10}
            },
            "f_bot_2m_as": {"name": "Command Center", "trigger_channels": "bot|building"},
            "f_nameless": {"health_points": 1}
        },
        "visuals": {
            "v_bot_1s_a": {"sockets": [["s1", "Small"], ["s2", "Internal"], ["s3", "Small"]]}
        },
        "components": {
            "c_fabricator": {
                "name": "Fabricator",
                "attachment_size": "Medium",
                "power": -2.5,
                "production_recipe": {"items": {"metalbar": 1}, "producers": {"c_assembler": 40, "c_fabricator": 20}}
            },
            "c_assembler": {"name": "Assembler", "attachment_size": "Colossal"},
            "c_miner": {"name": "Miner", "attachment_size": "Small"},
            "c_adv_miner": {"name": "Advanced Miner", "attachment_size": "Medium"}
        },
        "items": {
            "metalplate": {
                "name": "Metal Plate",
                "stack_size": 20,
                "tag": "simple_material",
                "base_id": "metalbar",
                "production_recipe": {"items": {"metalbar": 1}, "producers": {"c_fabricator": 10}}
            },
            "metalbar": {"name": "Metal Bar", "tag": "resource"},
            "metalore": {"name": "Metal Ore", "tag": "resource", "mining_recipe": {"c_miner": 10, "c_adv_miner": 5}}
        },
        "instructions": {
            "move_to": {
                "name": "Move To",
                "category": "Unit",
                "icon": "Main/skin/Icons/move.png",
                "args": [["exec", "Next"], ["in", "Target", "Where to go", "entity"], ["weird"]]
            }
        },
        "techs": {
            "t_robotics": {
                "name": "Robotics",
                "require_tech": ["t_basics"],
                "progress_count": 10,
                "uplink_recipe": {"items": {"metalplate": 2}, "ticks": 50},
                "unlocks": ["f_bot_1s_a", "c_fabricator"]
            },
            "t_basics": {"name": "Basics", "unlocks": []}
        },
        "tech_categories": {
            "robots": {"name": "Robots", "initial_tech": "t_robotics", "sub_categories": ["Bots"]}
        },
        "categories": [
            {"name": "Bots", "tab": "frame", "filter_field": "type", "filter_val": "Bot"},
            {"name": "Buildings", "tab": "frame", "filter_field": "type", "filter_val": "Building"}
        ]
    }"#;

    fn game() -> GameData {
        GameData::from_json(DUMP).unwrap()
    }

    #[test]
    fn test_entities() {
        let entities = game().entities();
        assert_eq!(entities.len(), 2);

        let worker = entities.iter().find(|e| e.lua_id == "f_bot_1s_a").unwrap();
        assert_eq!(worker.name, "Worker");
        assert_eq!(worker.health, 100);
        assert_eq!(worker.power_usage_per_second, Some(-5.0));
        assert_eq!(worker.storage, 1);
        assert_eq!(worker.race, Some(Race::Robot));
        assert_eq!(worker.types, vec![EntityType::Bot]);
        assert_eq!(worker.sockets.small_sockets, 2);
        assert_eq!(worker.sockets.internal_sockets, 1);

        let command = entities.iter().find(|e| e.lua_id == "f_bot_2m_as").unwrap();
        assert_eq!(command.name, "Command Center (Bot)");
        assert_eq!(command.types, vec![EntityType::Bot, EntityType::Building]);
        assert_eq!(command.recipe, None);
    }

    #[test]
    fn test_construction_recipe() {
        let entities = game().entities();
        let recipe = entities[0].recipe.as_ref().unwrap();
        assert_eq!(recipe.recipe_type, RecipeType::Construction);
        assert_eq!(recipe.name, "Worker");
        assert_eq!(recipe.producers, vec![RecipeProducer {
            name: "Construction".into(),
            time: 2.0,
        }]);
        // circuit_board is unknown and keeps its id; items sort by name
        assert_eq!(recipe.items[0].name, "Metal Plate");
        assert_eq!(recipe.items[1].name, "circuit_board");
        assert!(!recipe.is_derived);
    }

    #[test]
    fn test_production_recipe() {
        let components = game().components();
        let fabricator = components.iter().find(|c| c.lua_id == "c_fabricator").unwrap();
        let recipe = fabricator.recipe.as_ref().unwrap();
        assert_eq!(recipe.recipe_type, RecipeType::Production);
        assert_eq!(
            recipe.producers,
            vec![
                RecipeProducer {
                    name: "Assembler".into(),
                    time: 8.0,
                },
                RecipeProducer {
                    name: "Fabricator".into(),
                    time: 4.0,
                },
            ]
        );
        assert_eq!(fabricator.attachment_size, Some(ComponentSize::Medium));
        assert_eq!(fabricator.power_usage_per_second, Some(-12.5));

        let assembler = components.iter().find(|c| c.lua_id == "c_assembler").unwrap();
        assert_eq!(assembler.attachment_size, None);
    }

    #[test]
    fn test_items() {
        let items = game().items();
        let plate = items.iter().find(|i| i.lua_id == "metalplate").unwrap();
        assert_eq!(plate.item_type, Some(ItemType::SimpleMaterial));
        assert_eq!(plate.stack_size, 20);
        assert!(plate.recipe.as_ref().unwrap().is_derived);
    }

    #[test]
    fn test_mining_recipes() {
        let game = game();
        let items = game.items();
        let ore = items.iter().find(|i| i.lua_id == "metalore").unwrap();
        let mining = ore.mining_recipe.as_ref().unwrap();
        assert_eq!(mining.name, "Metal Ore");
        assert_eq!(
            mining.producers,
            vec![
                RecipeProducer {
                    name: "Advanced Miner".into(),
                    time: 1.0,
                },
                RecipeProducer {
                    name: "Miner".into(),
                    time: 2.0,
                },
            ]
        );
        assert_eq!(ore.recipe, None);

        let plate = items.iter().find(|i| i.lua_id == "metalplate").unwrap();
        assert_eq!(plate.mining_recipe, None);

        let recipes = game.mining_recipes();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].to_template(), "{{MiningRecipe|Metal Ore|Advanced Miner|1|Miner|2||||}}");
    }

    #[test]
    fn test_instructions() {
        let instructions = game().instructions();
        assert_eq!(instructions.len(), 1);
        let move_to = &instructions[0];
        assert_eq!(move_to.icon, "move.png");
        assert_eq!(move_to.args.len(), 2);
        assert_eq!(move_to.args[1].arg_type, ArgType::In);
        assert_eq!(move_to.args[1].data_type, "entity");
        assert_eq!(move_to.args[0].description, "");
    }

    #[test]
    fn test_technologies_and_unlocks() {
        let game = game();
        let techs = game.technologies();
        let robotics = techs.iter().find(|t| t.lua_id == "t_robotics").unwrap();
        assert_eq!(robotics.required_tech, vec!["Basics"]);
        assert_eq!(robotics.progress_count, 10);
        assert_eq!(robotics.recipe.as_ref().unwrap().producers[0].time, 10.0);

        let unlocks = game.tech_unlocks();
        assert_eq!(
            unlocks,
            vec![
                TechnologyUnlock::new("Robotics", "Worker"),
                TechnologyUnlock::new("Robotics", "Fabricator"),
            ]
        );

        let names = game.unlockable_names();
        assert!(names.contains("Worker"));
        assert!(names.contains("Fabricator"));
        assert!(!names.contains("Command Center (Bot)"));
    }

    #[test]
    fn test_categories() {
        let game = game();
        let filters = game.category_filters();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].name, "Bots");
        assert_eq!(filters[0].ordering, 0);
        assert_eq!(filters[1].ordering, 1);

        let categories = game.technology_categories();
        assert_eq!(categories[0].initial_tech, "Robotics");
        assert_eq!(categories[0].sub_categories, vec!["Bots"]);
    }

    #[test]
    fn test_recipes_cover_every_table() {
        let recipes = game().recipes();
        let mut names: Vec<_> = recipes.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Fabricator", "Metal Plate", "Worker"]);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameData::open(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let path = dir.path().join("dump.json");
        std::fs::write(&path, DUMP).unwrap();
        assert_eq!(GameData::open(&path).unwrap().entities().len(), 2);
    }
}
