//! Entities: bots, buildings and bugs (`data.frames`).

use desynced_cargo::{
    impl_cargo_record, CargoEnum, CargoRecord, CargoType, ListFieldOptions, RecordDescriptor, RecordFieldOptions,
    Value,
};

use crate::recipe::Recipe;
use crate::sockets::Sockets;
use crate::types::{wiki_enum, Race};
use crate::WikiObject;

wiki_enum! {
    /// Bay an entity docks into.
    pub enum SlotType {
        None => "None",
        Flyer => "Flyer",
        Drone => "Drone",
        Satellite => "Satellite",
        Garage => "Garage",
        Bughole => "Bughole",
    }
}

wiki_enum! {
    pub enum EntityType {
        Bug => "Bug",
        Bot => "Bot",
        Building => "Building",
    }
}

wiki_enum! {
    /// Navigation grouping of units on the wiki.
    pub enum UnitType {
        Bot => "Bot",
        Drone => "Drone",
        Alien => "Alien",
        Bug => "Bug",
        Human => "Human",
        Space => "Space",
    }
}

/// Number of entity types exported per entity.
pub const MAX_ENTITY_TYPES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub name: String,
    pub lua_id: String,
    pub description: String,
    pub health: i32,
    pub power_usage_per_second: Option<f64>,
    pub movement_speed: Option<f64>,
    pub visibility: Option<i32>,
    pub storage: i32,
    pub size: String,
    pub race: Option<Race>,
    pub types: Vec<EntityType>,
    pub sockets: Sockets,
    pub slot_type: Option<SlotType>,
    pub recipe: Option<Recipe>,
}

impl Entity {
    /// Unit grouping derived from race, slot type and entity types.
    pub fn unit_type(&self) -> Option<UnitType> {
        match self.race {
            Some(Race::Alien) => return Some(UnitType::Alien),
            Some(Race::Bug) => return Some(UnitType::Bug),
            _ => {}
        }
        if self.types.contains(&EntityType::Bug) {
            return Some(UnitType::Bug);
        }
        if self.race == Some(Race::Human) {
            return Some(UnitType::Human);
        }

        match self.slot_type {
            Some(SlotType::Drone) => Some(UnitType::Drone),
            Some(SlotType::Satellite) => Some(UnitType::Space),
            _ if self.types.contains(&EntityType::Bot) => Some(UnitType::Bot),
            _ => None,
        }
    }
}

impl CargoRecord for Entity {
    fn descriptor() -> RecordDescriptor {
        RecordDescriptor::new("Entity")
            .field::<String>("name")
            .field::<String>("lua_id")
            .field::<String>("description")
            .field::<i32>("health")
            .field::<Option<f64>>("power_usage_per_second")
            .field::<Option<f64>>("movement_speed")
            .field::<Option<i32>>("visibility")
            .field::<i32>("storage")
            .field::<String>("size")
            .field::<Option<Race>>("race")
            .annotated::<Vec<EntityType>>("types", ListFieldOptions::new(MAX_ENTITY_TYPES))
            .field::<Sockets>("sockets")
            .field::<Option<SlotType>>("slot_type")
            .field::<Option<UnitType>>("unit_type")
            .annotated::<Option<Recipe>>("recipe", RecordFieldOptions::prefixed())
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "name" => Some(self.name.to_value()),
            "lua_id" => Some(self.lua_id.to_value()),
            "description" => Some(self.description.to_value()),
            "health" => Some(self.health.to_value()),
            "power_usage_per_second" => Some(self.power_usage_per_second.to_value()),
            "movement_speed" => Some(self.movement_speed.to_value()),
            "visibility" => Some(self.visibility.to_value()),
            "storage" => Some(self.storage.to_value()),
            "size" => Some(self.size.to_value()),
            "race" => Some(self.race.to_value()),
            "types" => Some(self.types.to_value()),
            "sockets" => Some(self.sockets.to_value()),
            "slot_type" => Some(self.slot_type.to_value()),
            "unit_type" => Some(self.unit_type().map_or(Value::Null, |t| Value::Enum(t.value()))),
            "recipe" => Some(self.recipe.to_value()),
            _ => None,
        }
    }
}

impl_cargo_record!(Entity);

impl WikiObject for Entity {
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
    use desynced_cargo::{CargoPrinter, Mode};

    fn bot() -> Entity {
        Entity {
            name: "Worker".into(),
            lua_id: "f_bot_1s_a".into(),
            description: String::new(),
            health: 100,
            power_usage_per_second: None,
            movement_speed: Some(3.0),
            visibility: Some(5),
            storage: 1,
            size: "Small".into(),
            race: Some(Race::Robot),
            types: vec![EntityType::Bot],
            sockets: Sockets::default(),
            slot_type: None,
            recipe: None,
        }
    }

    #[test]
    fn test_unit_type() {
        let mut entity = bot();
        assert_eq!(entity.unit_type(), Some(UnitType::Bot));

        entity.slot_type = Some(SlotType::Drone);
        assert_eq!(entity.unit_type(), Some(UnitType::Drone));

        entity.slot_type = Some(SlotType::Satellite);
        assert_eq!(entity.unit_type(), Some(UnitType::Space));

        entity.race = Some(Race::Human);
        assert_eq!(entity.unit_type(), Some(UnitType::Human));

        entity.types.push(EntityType::Bug);
        assert_eq!(entity.unit_type(), Some(UnitType::Bug));

        entity.race = Some(Race::Alien);
        assert_eq!(entity.unit_type(), Some(UnitType::Alien));
    }

    #[test]
    fn test_building_has_no_unit_type() {
        let mut entity = bot();
        entity.types = vec![EntityType::Building];
        assert_eq!(entity.unit_type(), None);
    }

    #[test]
    fn test_unit_type_is_stored() {
        let lines = CargoPrinter::default().print_record(&bot()).unwrap();
        assert!(lines.contains(&"|unitType = Bot".to_string()));

        let declarations = CargoPrinter::new(Mode::Declarations).print_type::<Entity>().unwrap();
        assert!(declarations.contains(
            &"|unitType = String (allowed values=Bot,Drone,Alien,Bug,Human,Space)".to_string()
        ));
    }
}
