//! Analyzed schema tree.
//!
//! A [`TypeInfo`] is the validated, instance-independent description of a
//! record produced by [`analyze`](crate::analyze). There are three node kinds:
//!
//! 1. Scalar values (integers, strings, floats, booleans, enums)
//! 2. Lists of a single element schema, padded to a fixed slot count
//! 3. Records holding an ordered set of named child schemas

use crate::descriptor::ScalarType;
use crate::options::{FieldOptions, ListFieldOptions, RecordFieldOptions};

/// Schema node for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeInfo {
    Scalar { ty: ScalarType, options: FieldOptions },
    List { item: Box<TypeInfo>, options: ListFieldOptions },
    Record(RecordInfo),
}

/// Schema of a record: its fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordInfo {
    pub name: &'static str,
    pub fields: Vec<FieldInfo>,
    pub options: RecordFieldOptions,
}

/// A named child of a [`RecordInfo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: &'static str,
    pub info: TypeInfo,
}

impl TypeInfo {
    /// Scalar node with default options.
    pub fn scalar(ty: ScalarType) -> Self {
        Self::Scalar {
            ty,
            options: FieldOptions::default(),
        }
    }

    /// Options shared by every node kind.
    pub fn options(&self) -> &FieldOptions {
        match self {
            Self::Scalar { options, .. } => options,
            Self::List { options, .. } => &options.field,
            Self::Record(record) => &record.options.field,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar { .. } => "scalar",
            Self::List { .. } => "list",
            Self::Record(_) => "record",
        }
    }

    pub fn as_record(&self) -> Option<&RecordInfo> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Number of lines this node renders to.
    ///
    /// Skipped nodes count zero, lists count their slots times the element.
    pub fn line_count(&self) -> usize {
        if self.options().skip_field {
            return 0;
        }

        match self {
            Self::Scalar { .. } => 1,
            Self::List { item, options } => options.max_length * item.line_count(),
            Self::Record(record) => record.fields.iter().map(|f| f.info.line_count()).sum(),
        }
    }
}

impl RecordInfo {
    /// Look up a child schema by declared name.
    pub fn field(&self, name: &str) -> Option<&TypeInfo> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        let list = TypeInfo::List {
            item: Box::new(TypeInfo::scalar(ScalarType::Integer)),
            options: ListFieldOptions::new(5),
        };
        assert_eq!(list.line_count(), 5);

        let record = TypeInfo::Record(RecordInfo {
            name: "Mixed",
            fields: vec![
                FieldInfo {
                    name: "name",
                    info: TypeInfo::scalar(ScalarType::String),
                },
                FieldInfo { name: "items", info: list },
                FieldInfo {
                    name: "hidden",
                    info: TypeInfo::Scalar {
                        ty: ScalarType::String,
                        options: FieldOptions::skipped(),
                    },
                },
            ],
            options: RecordFieldOptions::default(),
        });
        assert_eq!(record.line_count(), 6);
        assert!(record.as_record().and_then(|r| r.field("items")).is_some());
    }
}
