//! Behavior instructions (`data.instructions`).

use desynced_cargo::{impl_cargo_record, CargoRecord, CargoType, ListFieldOptions, RecordDescriptor, Value};

use crate::types::wiki_enum;
use crate::WikiObject;

/// Argument slots exported per instruction.
pub const MAX_INSTRUCTION_ARGS: usize = 7;

wiki_enum! {
    pub enum ArgType {
        In => "Input",
        Out => "Output",
        Exec => "Exec",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstructionArg {
    pub arg_type: ArgType,
    pub name: String,
    pub description: String,
    pub data_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub name: String,
    pub lua_id: String,
    pub description: String,
    pub category: String,
    /// File name of the icon, without its directory.
    pub icon: String,
    pub args: Vec<InstructionArg>,
}

impl CargoRecord for InstructionArg {
    fn descriptor() -> RecordDescriptor {
        RecordDescriptor::new("InstructionArg")
            .field::<ArgType>("type")
            .field::<String>("name")
            .field::<String>("description")
            .field::<String>("data_type")
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "type" => Some(self.arg_type.to_value()),
            "name" => Some(self.name.to_value()),
            "description" => Some(self.description.to_value()),
            "data_type" => Some(self.data_type.to_value()),
            _ => None,
        }
    }
}

impl CargoRecord for Instruction {
    fn descriptor() -> RecordDescriptor {
        RecordDescriptor::new("Instruction")
            .field::<String>("name")
            .field::<String>("lua_id")
            .field::<String>("description")
            .field::<String>("category")
            .field::<String>("icon")
            .annotated::<Vec<InstructionArg>>("args", ListFieldOptions::new(MAX_INSTRUCTION_ARGS).prefixed())
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "name" => Some(self.name.to_value()),
            "lua_id" => Some(self.lua_id.to_value()),
            "description" => Some(self.description.to_value()),
            "category" => Some(self.category.to_value()),
            "icon" => Some(self.icon.to_value()),
            "args" => Some(self.args.to_value()),
            _ => None,
        }
    }
}

impl_cargo_record!(InstructionArg, Instruction);

impl WikiObject for Instruction {
    fn name(&self) -> &str {
        &self.name
    }

    fn lua_id(&self) -> Option<&str> {
        Some(&self.lua_id)
    }
}
