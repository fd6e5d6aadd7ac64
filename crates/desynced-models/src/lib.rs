//! Desynced game objects as exported to the wiki.
//!
//! Each record implements [`CargoRecord`](desynced_cargo::CargoRecord), so
//! one type describes both a Cargo table and its rows:
//!
//! - [`Entity`], [`Component`], [`Item`] - buildable objects with their [`Recipe`]
//! - [`Instruction`] - behavior editor instructions and their arguments
//! - [`Technology`], [`TechnologyUnlock`], [`TechnologyCategory`] - the research tree
//! - [`CategoryFilter`] - build menu categories

mod category_filter;
mod component;
mod entity;
mod instruction;
mod item;
mod mining_recipe;
mod recipe;
mod sockets;
mod tech;
mod types;

pub use category_filter::CategoryFilter;
pub use component::{Component, ComponentSize};
pub use entity::{Entity, EntityType, SlotType, UnitType, MAX_ENTITY_TYPES};
pub use instruction::{ArgType, Instruction, InstructionArg, MAX_INSTRUCTION_ARGS};
pub use item::{Item, ItemType};
pub use mining_recipe::{MiningRecipe, MINING_TEMPLATE_NUM_PRODUCERS};
pub use recipe::{
    Recipe, RecipeItem, RecipeProducer, RecipeType, MAX_RECIPE_ITEMS, MAX_RECIPE_PRODUCERS, TEMPLATE_NUM_ITEMS,
    TEMPLATE_NUM_PRODUCERS,
};
pub use sockets::Sockets;
pub use tech::{Technology, TechnologyCategory, TechnologyUnlock, MAX_REQUIRED_TECH, MAX_SUB_CATEGORIES};
pub use types::{parse_optional, Race, UnknownVariant};

use desynced_cargo::CargoRecord;

/// A record stored as one wiki data page.
pub trait WikiObject: CargoRecord + Send + Sync {
    /// Wiki name; also the data page title.
    fn name(&self) -> &str;

    /// Lua id of the source definition, when the object has one.
    fn lua_id(&self) -> Option<&str> {
        None
    }
}
