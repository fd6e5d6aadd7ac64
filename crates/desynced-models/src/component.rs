//! Components (`data.components`).

use desynced_cargo::{impl_cargo_record, CargoRecord, CargoType, RecordDescriptor, RecordFieldOptions, Value};

use crate::recipe::Recipe;
use crate::types::{wiki_enum, Race};
use crate::WikiObject;

wiki_enum! {
    /// Socket size a component occupies.
    pub enum ComponentSize {
        Hidden => "Hidden",
        Internal => "Internal",
        Small => "Small",
        Medium => "Medium",
        Large => "Large",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    pub lua_id: String,
    pub description: String,
    pub race: Option<Race>,
    pub attachment_size: Option<ComponentSize>,
    /// Drain on own storage or the power grid.
    pub power_usage_per_second: Option<f64>,
    pub power_storage: Option<i32>,
    /// Rate at which power is offered to the grid.
    pub drain_rate: Option<f64>,
    /// Rate at which excess grid power is pulled in.
    pub charge_rate: Option<f64>,
    pub bandwidth: Option<i32>,
    pub transfer_radius: Option<i32>,
    /// Attack or activation range.
    pub trigger_radius: Option<i32>,
    pub trigger_channels: String,
    pub recipe: Option<Recipe>,
}

impl CargoRecord for Component {
    fn descriptor() -> RecordDescriptor {
        RecordDescriptor::new("Component")
            .field::<String>("name")
            .field::<String>("lua_id")
            .field::<String>("description")
            .field::<Option<Race>>("race")
            .field::<Option<ComponentSize>>("attachment_size")
            .field::<Option<f64>>("power_usage_per_second")
            .field::<Option<i32>>("power_storage")
            .field::<Option<f64>>("drain_rate")
            .field::<Option<f64>>("charge_rate")
            .field::<Option<i32>>("bandwidth")
            .field::<Option<i32>>("transfer_radius")
            .field::<Option<i32>>("trigger_radius")
            .field::<String>("trigger_channels")
            .annotated::<Option<Recipe>>("recipe", RecordFieldOptions::prefixed())
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "name" => Some(self.name.to_value()),
            "lua_id" => Some(self.lua_id.to_value()),
            "description" => Some(self.description.to_value()),
            "race" => Some(self.race.to_value()),
            "attachment_size" => Some(self.attachment_size.to_value()),
            "power_usage_per_second" => Some(self.power_usage_per_second.to_value()),
            "power_storage" => Some(self.power_storage.to_value()),
            "drain_rate" => Some(self.drain_rate.to_value()),
            "charge_rate" => Some(self.charge_rate.to_value()),
            "bandwidth" => Some(self.bandwidth.to_value()),
            "transfer_radius" => Some(self.transfer_radius.to_value()),
            "trigger_radius" => Some(self.trigger_radius.to_value()),
            "trigger_channels" => Some(self.trigger_channels.to_value()),
            "recipe" => Some(self.recipe.to_value()),
            _ => None,
        }
    }
}

impl_cargo_record!(Component);

impl WikiObject for Component {
    fn name(&self) -> &str {
        &self.name
    }

    fn lua_id(&self) -> Option<&str> {
        Some(&self.lua_id)
    }
}
