//! Technologies, their unlocks and categories.

use desynced_cargo::{
    impl_cargo_record, CargoRecord, CargoType, FieldOptions, ListFieldOptions, RecordDescriptor, RecordFieldOptions,
    Value,
};

use crate::recipe::Recipe;
use crate::WikiObject;

/// Prerequisite slots exported per technology.
pub const MAX_REQUIRED_TECH: usize = 3;
/// Sub-category slots exported per technology category.
pub const MAX_SUB_CATEGORIES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Technology {
    pub name: String,
    pub lua_id: String,
    pub description: String,
    pub category: String,
    pub texture: String,
    /// Names of the technologies required first.
    pub required_tech: Vec<String>,
    /// Number of times the research recipe must be completed.
    pub progress_count: i32,
    pub recipe: Option<Recipe>,
}

/// One object unlocked by a technology.
#[derive(Debug, Clone, PartialEq)]
pub struct TechnologyUnlock {
    /// Page name, not stored in the table.
    pub name: String,
    pub tech_name: String,
    pub unlocks: String,
}

impl TechnologyUnlock {
    pub fn new(tech_name: impl Into<String>, unlocks: impl Into<String>) -> Self {
        let tech_name = tech_name.into();
        let unlocks = unlocks.into();
        Self {
            name: format!("{} - {}", tech_name, unlocks),
            tech_name,
            unlocks,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TechnologyCategory {
    pub name: String,
    pub lua_id: String,
    pub discovery_tech: String,
    pub initial_tech: String,
    pub sub_categories: Vec<String>,
    pub texture: String,
}

impl CargoRecord for Technology {
    fn descriptor() -> RecordDescriptor {
        RecordDescriptor::new("Technology")
            .field::<String>("name")
            .field::<String>("lua_id")
            .field::<String>("description")
            .field::<String>("category")
            .field::<String>("texture")
            .annotated::<Vec<String>>("required_tech", ListFieldOptions::new(MAX_REQUIRED_TECH))
            .field::<i32>("progress_count")
            .annotated::<Option<Recipe>>("recipe", RecordFieldOptions::prefixed())
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "name" => Some(self.name.to_value()),
            "lua_id" => Some(self.lua_id.to_value()),
            "description" => Some(self.description.to_value()),
            "category" => Some(self.category.to_value()),
            "texture" => Some(self.texture.to_value()),
            "required_tech" => Some(self.required_tech.to_value()),
            "progress_count" => Some(self.progress_count.to_value()),
            "recipe" => Some(self.recipe.to_value()),
            _ => None,
        }
    }
}

impl CargoRecord for TechnologyUnlock {
    fn descriptor() -> RecordDescriptor {
        RecordDescriptor::new("TechnologyUnlock")
            .annotated::<String>("name", FieldOptions::skipped())
            .field::<String>("tech_name")
            .field::<String>("unlocks")
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "name" => Some(self.name.to_value()),
            "tech_name" => Some(self.tech_name.to_value()),
            "unlocks" => Some(self.unlocks.to_value()),
            _ => None,
        }
    }
}

impl CargoRecord for TechnologyCategory {
    fn descriptor() -> RecordDescriptor {
        RecordDescriptor::new("TechnologyCategory")
            .field::<String>("name")
            .field::<String>("lua_id")
            .field::<String>("discovery_tech")
            .field::<String>("initial_tech")
            .annotated::<Vec<String>>("sub_categories", ListFieldOptions::new(MAX_SUB_CATEGORIES))
            .field::<String>("texture")
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "name" => Some(self.name.to_value()),
            "lua_id" => Some(self.lua_id.to_value()),
            "discovery_tech" => Some(self.discovery_tech.to_value()),
            "initial_tech" => Some(self.initial_tech.to_value()),
            "sub_categories" => Some(self.sub_categories.to_value()),
            "texture" => Some(self.texture.to_value()),
            _ => None,
        }
    }
}

impl_cargo_record!(Technology, TechnologyUnlock, TechnologyCategory);

impl WikiObject for Technology {
    fn name(&self) -> &str {
        &self.name
    }

    fn lua_id(&self) -> Option<&str> {
        Some(&self.lua_id)
    }
}

impl WikiObject for TechnologyUnlock {
    fn name(&self) -> &str {
        &self.name
    }
}

impl WikiObject for TechnologyCategory {
    fn name(&self) -> &str {
        &self.name
    }

    fn lua_id(&self) -> Option<&str> {
        Some(&self.lua_id)
    }
}
