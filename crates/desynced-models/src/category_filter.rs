use desynced_cargo::{impl_cargo_record, CargoRecord, CargoType, RecordDescriptor, Value};

use crate::WikiObject;

/// Build menu filter, mirroring `data.categories`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    pub name: String,
    pub tab: String,
    /// Field of an object the filter matches on.
    pub filter_field: String,
    /// Exact value the field must have.
    pub filter_val: String,
    /// Position in the game's category order, lowest first.
    pub ordering: i32,
}

impl CargoRecord for CategoryFilter {
    fn descriptor() -> RecordDescriptor {
        RecordDescriptor::new("CategoryFilter")
            .field::<String>("name")
            .field::<String>("tab")
            .field::<String>("filter_field")
            .field::<String>("filter_val")
            .field::<i32>("ordering")
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "name" => Some(self.name.to_value()),
            "tab" => Some(self.tab.to_value()),
            "filter_field" => Some(self.filter_field.to_value()),
            "filter_val" => Some(self.filter_val.to_value()),
            "ordering" => Some(self.ordering.to_value()),
            _ => None,
        }
    }
}

impl_cargo_record!(CategoryFilter);

impl WikiObject for CategoryFilter {
    fn name(&self) -> &str {
        &self.name
    }
}
