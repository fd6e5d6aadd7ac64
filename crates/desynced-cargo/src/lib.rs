//! Cargo table export for Desynced wiki records.
//!
//! This crate turns nested record types into the flat `|key = value` lines
//! consumed by MediaWiki templates and the Cargo extension:
//!
//! - [`FieldOptions`], [`ListFieldOptions`], [`RecordFieldOptions`] - per-field metadata
//! - [`RecordDescriptor`] / [`CargoRecord`] - hand-written record schemas and field access
//! - [`analyze`] / [`schema_of`] - validated, cached [`TypeInfo`] trees
//! - [`CargoPrinter`] - data, declaration and template renderings
//!
//! # Example
//!
//! ```
//! use desynced_cargo::{impl_cargo_record, CargoPrinter, CargoRecord, CargoType, Mode, RecordDescriptor, Value};
//!
//! #[derive(Debug)]
//! struct Simple {
//!     name: String,
//!     age: i32,
//! }
//!
//! impl CargoRecord for Simple {
//!     fn descriptor() -> RecordDescriptor {
//!         RecordDescriptor::new("Simple").field::<String>("name").field::<i32>("age")
//!     }
//!
//!     fn field(&self, name: &str) -> Option<Value<'_>> {
//!         match name {
//!             "name" => Some(self.name.to_value()),
//!             "age" => Some(self.age.to_value()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl_cargo_record!(Simple);
//!
//! let alice = Simple { name: "Alice".into(), age: 28 };
//! let lines = CargoPrinter::new(Mode::Data).print_record(&alice).unwrap();
//! assert_eq!(lines, vec!["|name = Alice", "|age = 28"]);
//!
//! let declarations = CargoPrinter::new(Mode::Declarations).print_type::<Simple>().unwrap();
//! assert_eq!(declarations, vec!["|name = String", "|age = Integer"]);
//! ```

mod analyze;
mod descriptor;
mod error;
mod options;
mod printer;
mod schema;
mod value;

pub use analyze::{analyze, analyze_record, schema_of};
pub use descriptor::{
    CargoEnum, CargoRecord, CargoType, EnumDescriptor, FieldDescriptor, RecordDescriptor, RecordType, ScalarType,
    TypeDescriptor,
};
pub use error::{Error, Result, SchemaError};
pub use options::{FieldAnnotation, FieldOptions, ListFieldOptions, RecordFieldOptions};
pub use printer::{extract_key, to_camel_case, CargoPrinter, Mode};
pub use schema::{FieldInfo, RecordInfo, TypeInfo};
pub use value::Value;
