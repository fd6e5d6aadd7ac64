//! Cargo line printer.
//!
//! [`CargoPrinter`] flattens a record into the ordered `|key = value` lines
//! used by MediaWiki templates and the Cargo extension. One printer walks the
//! analyzed [`TypeInfo`] tree alongside an optional instance and produces one
//! of three renderings:
//!
//! - [`Mode::Data`]: the instance's values, for a storage page
//! - [`Mode::Declarations`]: Cargo field types, for `#cargo_declare`
//! - [`Mode::Template`]: `{{{param|}}}` placeholders, for `#cargo_store`
//!
//! For a given record type all three produce the same keys in the same order.
//!
//! # Keys
//!
//! A key is the field name (or its override), preceded by the prefixes of
//! enclosing records declared with `prefix_name` and followed by the slot
//! numbers of enclosing lists. The result is converted to camelCase:
//!
//! ```text
//! recipe { items[2] { amount } }  ->  recipe_items_amount2  ->  recipeItemsAmount2
//! ```
//!
//! Lists always render `max_length` slots; missing elements render blank.
//! After rendering, every key must be unique.

use std::hash::BuildHasherDefault;
use std::sync::Arc;

use hashbrown::HashMap as FastHashMap;
use rustc_hash::FxHasher;

use crate::analyze::schema_of;
use crate::descriptor::{CargoRecord, ScalarType};
use crate::error::{Error, Result};
use crate::options::ListFieldOptions;
use crate::schema::{RecordInfo, TypeInfo};
use crate::value::Value;

type FxHashMap<K, V> = FastHashMap<K, V, BuildHasherDefault<FxHasher>>;

/// What a [`CargoPrinter`] renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `|key = value` from an instance.
    #[default]
    Data,
    /// `|key = Type` from the schema alone.
    Declarations,
    /// `|key = {{{key|}}}` from the schema alone.
    Template,
}

/// Renders records as Cargo parameter lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct CargoPrinter {
    mode: Mode,
}

/// Key decoration inherited from enclosing records and lists.
#[derive(Debug, Clone, Default)]
struct Scope {
    prefix: String,
    suffix: String,
}

impl Scope {
    fn key(&self, name: &str) -> String {
        format!("{}{}{}", self.prefix, name, self.suffix)
    }
}

/// A rendered line before key casing.
struct Line {
    key: String,
    value: String,
}

impl CargoPrinter {
    /// Create a printer for the given mode.
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Render `instance` (or the bare schema when `None`) as ordered lines.
    ///
    /// `schema` must be a record node. Fails when a list outgrows its slots,
    /// when the instance does not match the schema, or when two lines end up
    /// with the same key.
    pub fn render(&self, instance: Option<&dyn CargoRecord>, schema: &TypeInfo) -> Result<Vec<String>> {
        let TypeInfo::Record(record) = schema else {
            return Err(Error::NotARecord(schema.kind()));
        };

        let value = match instance {
            Some(record) => Value::Record(record),
            None => Value::Null,
        };

        let mut lines = Vec::new();
        self.print_fields(record, &value, &Scope::default(), &mut lines)?;

        let mut keys = Vec::with_capacity(lines.len());
        let mut output = Vec::with_capacity(lines.len());
        for line in lines {
            let key = to_camel_case(&line.key);
            output.push(match self.mode {
                Mode::Template => format!("|{0} = {{{{{{{0}|}}}}}}", key),
                Mode::Data | Mode::Declarations => format!("|{} = {}", key, line.value),
            });
            keys.push(key);
        }

        check_duplicates(&keys, output)
    }

    /// Render an instance using the cached schema of its type.
    pub fn print_record<T: CargoRecord + 'static>(&self, instance: &T) -> Result<Vec<String>> {
        let schema: Arc<TypeInfo> = schema_of::<T>()?;
        self.render(Some(instance as &dyn CargoRecord), &schema)
    }

    /// Render the record type `T` without an instance.
    pub fn print_type<T: CargoRecord + 'static>(&self) -> Result<Vec<String>> {
        let schema = schema_of::<T>()?;
        self.render(None, &schema)
    }

    fn print_fields(&self, record: &RecordInfo, value: &Value<'_>, scope: &Scope, out: &mut Vec<Line>) -> Result<()> {
        for field in &record.fields {
            let child = match value {
                Value::Record(instance) => instance.field(field.name).ok_or_else(|| Error::UnknownField {
                    record: record.name.to_string(),
                    field: field.name.to_string(),
                })?,
                _ => Value::Null,
            };

            self.print_field(field.name, &child, &field.info, scope, out)?;
        }

        Ok(())
    }

    fn print_field(
        &self,
        name: &str,
        value: &Value<'_>,
        info: &TypeInfo,
        scope: &Scope,
        out: &mut Vec<Line>,
    ) -> Result<()> {
        let options = info.options();
        if options.skip_field {
            return Ok(());
        }

        let name = options.name_override.as_deref().unwrap_or(name);

        match info {
            TypeInfo::Scalar { ty, .. } => self.print_scalar(scope.key(name), value, ty, out),
            TypeInfo::List { item, options } => self.print_list(name, value, item, options, scope, out),
            TypeInfo::Record(record) => {
                if !matches!(value, Value::Record(_) | Value::Null) {
                    return Err(Error::TypeMismatch {
                        field: scope.key(name),
                        expected: "record",
                        found: value.kind(),
                    });
                }

                let prefix = if record.options.prefix_name && !name.is_empty() {
                    format!("{}{}_", scope.prefix, name)
                } else {
                    scope.prefix.clone()
                };
                let scope = Scope {
                    prefix,
                    suffix: scope.suffix.clone(),
                };

                self.print_fields(record, value, &scope, out)
            }
        }
    }

    fn print_list(
        &self,
        name: &str,
        value: &Value<'_>,
        item: &TypeInfo,
        options: &ListFieldOptions,
        scope: &Scope,
        out: &mut Vec<Line>,
    ) -> Result<()> {
        let items: &[Value<'_>] = match value {
            Value::List(items) => items.as_slice(),
            Value::Null => &[][..],
            other => {
                return Err(Error::TypeMismatch {
                    field: scope.key(name),
                    expected: "list",
                    found: other.kind(),
                })
            }
        };

        if items.len() > options.max_length {
            return Err(Error::CapacityExceeded {
                field: scope.key(name),
                max_length: options.max_length,
                actual: items.len(),
                value: format!("{:?}", items),
            });
        }

        let null = Value::Null;
        for idx in 0..options.max_length {
            let suffix = if options.skip_suffix {
                scope.suffix.clone()
            } else {
                format!("{}{}", scope.suffix, idx + 1)
            };
            let slot = Scope {
                prefix: scope.prefix.clone(),
                suffix,
            };

            self.print_field(name, items.get(idx).unwrap_or(&null), item, &slot, out)?;
        }

        Ok(())
    }

    fn print_scalar(&self, key: String, value: &Value<'_>, ty: &ScalarType, out: &mut Vec<Line>) -> Result<()> {
        let value = match self.mode {
            Mode::Declarations => ty.to_string(),
            Mode::Template => String::new(),
            Mode::Data => match value {
                Value::List(_) | Value::Record(_) => {
                    return Err(Error::TypeMismatch {
                        field: key,
                        expected: "scalar",
                        found: value.kind(),
                    })
                }
                scalar => scalar.to_string(),
            },
        };

        out.push(Line { key, value });
        Ok(())
    }
}

/// Fails with every repeated key, in first-seen order.
fn check_duplicates(keys: &[String], output: Vec<String>) -> Result<Vec<String>> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for key in keys {
        *counts.entry(key.as_str()).or_insert(0) += 1;
    }

    let mut duplicates: Vec<String> = Vec::new();
    for key in keys {
        if counts.get(key.as_str()).copied().unwrap_or(0) > 1 && !duplicates.contains(key) {
            duplicates.push(key.clone());
        }
    }

    if duplicates.is_empty() {
        Ok(output)
    } else {
        Err(Error::DuplicateKeys {
            keys: duplicates,
            output,
        })
    }
}

/// Convert a snake_case key to camelCase.
///
/// The first segment is lowercased; every following `_`-separated segment is
/// capitalized (first letter upper, rest lower).
pub fn to_camel_case(name: &str) -> String {
    let mut parts = name.split('_');
    let mut out = String::with_capacity(name.len());

    if let Some(first) = parts.next() {
        out.push_str(&first.to_lowercase());
    }

    for part in parts {
        let mut chars = part.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }

    out
}

/// Key of a rendered `|key = ...` line.
pub fn extract_key(line: &str) -> Option<&str> {
    let (key, _) = line.strip_prefix('|')?.split_once(" =")?;
    if key.is_empty() || key.contains(' ') {
        return None;
    }
    Some(key)
}
