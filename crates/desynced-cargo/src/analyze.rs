//! Record type analysis.
//!
//! [`analyze`] walks a record's [`RecordDescriptor`] and builds the
//! [`TypeInfo`] tree the printer consumes. All option validation happens
//! here, once per type, so a bad declaration fails before any data is
//! rendered.
//!
//! [`schema_of`] memoizes the result per type for the lifetime of the
//! process.

use std::any::TypeId;
use std::hash::BuildHasherDefault;
use std::sync::{Arc, LazyLock};

use hashbrown::HashMap as FastHashMap;
use parking_lot::RwLock;
use rustc_hash::FxHasher;

use crate::descriptor::{CargoRecord, FieldDescriptor, RecordType, TypeDescriptor};
use crate::error::SchemaError;
use crate::options::{FieldAnnotation, FieldOptions, ListFieldOptions, RecordFieldOptions};
use crate::schema::{FieldInfo, RecordInfo, TypeInfo};

type FxHashMap<K, V> = FastHashMap<K, V, BuildHasherDefault<FxHasher>>;

static SCHEMAS: LazyLock<RwLock<FxHashMap<TypeId, Arc<TypeInfo>>>> = LazyLock::new(Default::default);

/// Analyze the record type `T`.
pub fn analyze<T: CargoRecord + 'static>() -> Result<TypeInfo, SchemaError> {
    analyze_record(RecordType::of::<T>())
}

/// Analyze a record type given by handle.
pub fn analyze_record(record: RecordType) -> Result<TypeInfo, SchemaError> {
    Analyzer::default().record(record, RecordFieldOptions::default())
}

/// Cached schema of the record type `T`.
///
/// The first call per type analyzes it; later calls share the result.
pub fn schema_of<T: CargoRecord + 'static>() -> Result<Arc<TypeInfo>, SchemaError> {
    let id = TypeId::of::<T>();
    if let Some(schema) = SCHEMAS.read().get(&id) {
        return Ok(Arc::clone(schema));
    }

    let schema = Arc::new(analyze::<T>()?);
    let mut schemas = SCHEMAS.write();
    Ok(Arc::clone(schemas.entry(id).or_insert(schema)))
}

/// Walks descriptors depth-first, tracking the records on the current path.
#[derive(Default)]
struct Analyzer {
    path: Vec<TypeId>,
}

impl Analyzer {
    fn record(&mut self, record: RecordType, options: RecordFieldOptions) -> Result<TypeInfo, SchemaError> {
        let descriptor = record.descriptor();

        self.path.push(record.type_id());
        let fields = descriptor
            .fields
            .iter()
            .map(|field| {
                Ok(FieldInfo {
                    name: field.name,
                    info: self.field(descriptor.name, field)?,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;
        self.path.pop();

        Ok(TypeInfo::Record(RecordInfo {
            name: descriptor.name,
            fields,
            options,
        }))
    }

    fn field(&mut self, owner: &str, field: &FieldDescriptor) -> Result<TypeInfo, SchemaError> {
        match (&field.ty, &field.annotation) {
            (TypeDescriptor::List(element), FieldAnnotation::List(options)) => {
                self.list(owner, field.name.to_string(), element, options)
            }
            (TypeDescriptor::List(_), FieldAnnotation::None) => Err(SchemaError::MissingListOptions {
                record: owner.to_string(),
                field: field.name.to_string(),
            }),
            (TypeDescriptor::Record(record), FieldAnnotation::None) => {
                self.nested(owner, field.name, *record, RecordFieldOptions::default())
            }
            (TypeDescriptor::Record(record), FieldAnnotation::Field(options)) => {
                let options = RecordFieldOptions {
                    field: options.clone(),
                    prefix_name: false,
                };
                self.nested(owner, field.name, *record, options)
            }
            (TypeDescriptor::Record(record), FieldAnnotation::Record(options)) => {
                self.nested(owner, field.name, *record, options.clone())
            }
            (TypeDescriptor::Scalar(ty), FieldAnnotation::None) => Ok(TypeInfo::scalar(*ty)),
            (TypeDescriptor::Scalar(ty), FieldAnnotation::Field(options)) => Ok(TypeInfo::Scalar {
                ty: *ty,
                options: options.clone(),
            }),
            (ty, annotation) => Err(SchemaError::MismatchedOptions {
                record: owner.to_string(),
                field: field.name.to_string(),
                kind: ty.kind(),
                options: annotation.kind(),
            }),
        }
    }

    fn list(
        &mut self,
        owner: &str,
        field: String,
        element: &TypeDescriptor,
        options: &ListFieldOptions,
    ) -> Result<TypeInfo, SchemaError> {
        if options.max_length == 0 {
            return Err(SchemaError::InvalidMaxLength {
                record: owner.to_string(),
                field,
                max_length: options.max_length,
            });
        }

        let item = match element {
            TypeDescriptor::Scalar(ty) => TypeInfo::Scalar {
                ty: *ty,
                options: FieldOptions::default(),
            },
            TypeDescriptor::Record(record) => self.nested(owner, &field, *record, options.record_options.clone())?,
            TypeDescriptor::List(inner) => {
                let inner_field = format!("{}[]", field);
                match options.element.as_deref() {
                    Some(inner_options) => self.list(owner, inner_field, inner, inner_options)?,
                    None => {
                        return Err(SchemaError::MissingListOptions {
                            record: owner.to_string(),
                            field: inner_field,
                        })
                    }
                }
            }
        };

        Ok(TypeInfo::List {
            item: Box::new(item),
            options: options.clone(),
        })
    }

    fn nested(
        &mut self,
        owner: &str,
        field: &str,
        record: RecordType,
        options: RecordFieldOptions,
    ) -> Result<TypeInfo, SchemaError> {
        if self.path.contains(&record.type_id()) {
            return Err(SchemaError::RecursiveRecord {
                record: owner.to_string(),
                field: field.to_string(),
            });
        }

        self.record(record, options)
    }
}
