//! Items (`data.items`).

use desynced_cargo::{impl_cargo_record, CargoRecord, CargoType, RecordDescriptor, RecordFieldOptions, Value};

use crate::mining_recipe::MiningRecipe;
use crate::recipe::Recipe;
use crate::types::wiki_enum;
use crate::WikiObject;

wiki_enum! {
    pub enum ItemType {
        Package => "Package",
        Research => "Research",
        Resource => "Resource",
        SimpleMaterial => "Simple",
        AdvancedMaterial => "Advanced",
        HitechMaterial => "Hi-Tech",
    }
}

impl ItemType {
    /// Map an item `tag` from the game data.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "simple_material" => Some(Self::SimpleMaterial),
            "advanced_material" => Some(Self::AdvancedMaterial),
            "hitech_material" => Some(Self::HitechMaterial),
            other => other.parse().ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub lua_id: String,
    pub description: String,
    pub stack_size: i32,
    pub item_type: Option<ItemType>,
    pub recipe: Option<Recipe>,
    /// Miners that harvest this item from the world.
    pub mining_recipe: Option<MiningRecipe>,
}

impl CargoRecord for Item {
    fn descriptor() -> RecordDescriptor {
        RecordDescriptor::new("Item")
            .field::<String>("name")
            .field::<String>("lua_id")
            .field::<String>("description")
            .field::<i32>("stack_size")
            .field::<Option<ItemType>>("type")
            .annotated::<Option<Recipe>>("recipe", RecordFieldOptions::prefixed())
            .annotated::<Option<MiningRecipe>>("mining_recipe", RecordFieldOptions::prefixed().with_name("mining"))
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "name" => Some(self.name.to_value()),
            "lua_id" => Some(self.lua_id.to_value()),
            "description" => Some(self.description.to_value()),
            "stack_size" => Some(self.stack_size.to_value()),
            "type" => Some(self.item_type.to_value()),
            "recipe" => Some(self.recipe.to_value()),
            "mining_recipe" => Some(self.mining_recipe.to_value()),
            _ => None,
        }
    }
}

impl_cargo_record!(Item);

impl WikiObject for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn lua_id(&self) -> Option<&str> {
        Some(&self.lua_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_from_tag() {
        assert_eq!(ItemType::from_tag("simple_material"), Some(ItemType::SimpleMaterial));
        assert_eq!(ItemType::from_tag("hitech_material"), Some(ItemType::HitechMaterial));
        assert_eq!(ItemType::from_tag("resource"), Some(ItemType::Resource));
        assert_eq!(ItemType::from_tag("Hi-Tech"), Some(ItemType::HitechMaterial));
        assert_eq!(ItemType::from_tag("junk"), None);
    }
}
