//! Resources harvested from the world.

use desynced_cargo::{impl_cargo_record, CargoRecord, CargoType, FieldOptions, ListFieldOptions, RecordDescriptor, Value};

use crate::recipe::RecipeProducer;

/// Producer arguments of the `{{MiningRecipe}}` wiki template, also used as
/// the Cargo slot count.
pub const MINING_TEMPLATE_NUM_PRODUCERS: usize = 4;

/// Miners able to extract a resource and the time each takes.
#[derive(Debug, Clone, PartialEq)]
pub struct MiningRecipe {
    /// Name of the mined resource.
    pub name: String,
    pub producers: Vec<RecipeProducer>,
}

impl MiningRecipe {
    /// Build a mining recipe with producers sorted by name.
    pub fn new(name: impl Into<String>, mut producers: Vec<RecipeProducer>) -> Self {
        producers.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            name: name.into(),
            producers,
        }
    }

    /// `{{MiningRecipe|Name|Producer1|Time1|...}}` call, padded to 4 producers.
    pub fn to_template(&self) -> String {
        let mut out = format!("{{{{MiningRecipe|{}", self.name);
        for producer in &self.producers {
            out.push_str(&format!("|{}|{}", producer.name, producer.time));
        }
        for _ in self.producers.len()..MINING_TEMPLATE_NUM_PRODUCERS {
            out.push_str("||");
        }
        out.push_str("}}");
        out
    }
}

impl CargoRecord for MiningRecipe {
    fn descriptor() -> RecordDescriptor {
        RecordDescriptor::new("MiningRecipe")
            .annotated::<String>("name", FieldOptions::skipped())
            .annotated::<Vec<RecipeProducer>>(
                "producers",
                ListFieldOptions::new(MINING_TEMPLATE_NUM_PRODUCERS).prefixed(),
            )
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "name" => Some(self.name.to_value()),
            "producers" => Some(self.producers.to_value()),
            _ => None,
        }
    }
}

impl_cargo_record!(MiningRecipe);
