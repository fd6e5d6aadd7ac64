//! Construction and production recipes.

use desynced_cargo::{
    impl_cargo_record, CargoRecord, CargoType, FieldOptions, ListFieldOptions, RecordDescriptor, Value,
};

use crate::types::wiki_enum;

/// Item arguments of the `{{Recipe}}` wiki template.
pub const TEMPLATE_NUM_ITEMS: usize = 4;
/// Producer arguments of the `{{Recipe}}` wiki template.
pub const TEMPLATE_NUM_PRODUCERS: usize = 2;

/// Ingredient slots of a recipe in the Cargo tables.
pub const MAX_RECIPE_ITEMS: usize = 6;
/// Producer slots of a recipe in the Cargo tables.
pub const MAX_RECIPE_PRODUCERS: usize = 4;

wiki_enum! {
    pub enum RecipeType {
        Construction => "Construction",
        Production => "Production",
    }
}

/// One ingredient of a recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeItem {
    /// Readable item name (not the lua id).
    pub name: String,
    pub amount: i32,
}

/// A component (or construction site) able to produce the recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeProducer {
    /// Readable producer name (not the lua id).
    pub name: String,
    /// Seconds per craft.
    pub time: f64,
}

/// Recipe of an entity, component, item or technology.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub recipe_type: RecipeType,
    /// Name of the object the recipe produces.
    pub name: String,
    pub items: Vec<RecipeItem>,
    pub producers: Vec<RecipeProducer>,
    /// The owning object inherits from another definition.
    pub is_derived: bool,
}

impl Recipe {
    /// Build a recipe with items and producers sorted by name.
    pub fn new(
        recipe_type: RecipeType,
        name: impl Into<String>,
        mut items: Vec<RecipeItem>,
        mut producers: Vec<RecipeProducer>,
        is_derived: bool,
    ) -> Self {
        items.sort_by(|a, b| a.name.cmp(&b.name));
        producers.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            recipe_type,
            name: name.into(),
            items,
            producers,
            is_derived,
        }
    }

    /// `{{Recipe|Name|Item1|Amount1|...|ProducedBy1|Time1|...}}` call.
    ///
    /// Items and producers are padded with empty arguments up to the
    /// template's 4 items and 2 producers.
    pub fn to_template(&self) -> String {
        let mut out = format!("{{{{Recipe|{}", self.name);

        for item in &self.items {
            out.push_str(&format!("|{}|{}", item.name, item.amount));
        }
        for _ in self.items.len()..TEMPLATE_NUM_ITEMS {
            out.push_str("||");
        }

        for producer in &self.producers {
            out.push_str(&format!("|{}|{}", producer.name, producer.time));
        }
        for _ in self.producers.len()..TEMPLATE_NUM_PRODUCERS {
            out.push_str("||");
        }

        out.push_str("}}");
        out
    }
}

impl CargoRecord for RecipeItem {
    fn descriptor() -> RecordDescriptor {
        RecordDescriptor::new("RecipeItem").field::<String>("name").field::<i32>("amount")
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "name" => Some(self.name.to_value()),
            "amount" => Some(self.amount.to_value()),
            _ => None,
        }
    }
}

impl CargoRecord for RecipeProducer {
    fn descriptor() -> RecordDescriptor {
        RecordDescriptor::new("RecipeProducer").field::<String>("name").field::<f64>("time")
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "name" => Some(self.name.to_value()),
            "time" => Some(self.time.to_value()),
            _ => None,
        }
    }
}

impl CargoRecord for Recipe {
    fn descriptor() -> RecordDescriptor {
        RecordDescriptor::new("Recipe")
            .annotated::<RecipeType>("recipe_type", FieldOptions::renamed("type"))
            .annotated::<String>("name", FieldOptions::skipped())
            .annotated::<Vec<RecipeItem>>("items", ListFieldOptions::new(MAX_RECIPE_ITEMS).prefixed())
            .annotated::<Vec<RecipeProducer>>(
                "producers",
                ListFieldOptions::new(MAX_RECIPE_PRODUCERS).prefixed(),
            )
            .field::<bool>("is_derived")
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "recipe_type" => Some(self.recipe_type.to_value()),
            "name" => Some(self.name.to_value()),
            "items" => Some(self.items.to_value()),
            "producers" => Some(self.producers.to_value()),
            "is_derived" => Some(self.is_derived.to_value()),
            _ => None,
        }
    }
}

impl_cargo_record!(RecipeItem, RecipeProducer, Recipe);
