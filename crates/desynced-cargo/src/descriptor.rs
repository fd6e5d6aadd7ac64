//! Type-level record descriptions.
//!
//! Every exported record type describes itself once through
//! [`CargoRecord::descriptor`]: an ordered list of fields, each with a
//! [`TypeDescriptor`] and the options declared on it. The analyzer turns a
//! descriptor into a validated [`TypeInfo`](crate::TypeInfo) tree; nothing at
//! render time inspects Rust types.
//!
//! Nested record types are referenced lazily through [`RecordType`], so
//! building a descriptor never recurses into other records.

use std::any::TypeId;
use std::fmt;

use crate::options::FieldAnnotation;
use crate::value::Value;

/// Enumerated type with an explicit table of external values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumDescriptor {
    /// Name of the enum type (diagnostics only).
    pub name: &'static str,
    /// Every permitted value, in declaration order.
    pub values: &'static [&'static str],
}

/// Scalar field kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Integer,
    Float,
    Boolean,
    String,
    Enum(EnumDescriptor),
}

impl ScalarType {
    /// Cargo field type used in table declarations.
    pub fn cargo_name(&self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::String | Self::Enum(_) => "String",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum(e) => write!(f, "String (allowed values={})", e.values.join(",")),
            other => f.write_str(other.cargo_name()),
        }
    }
}

/// Lazy handle to a record type.
#[derive(Clone, Copy)]
pub struct RecordType {
    type_id: TypeId,
    type_name: &'static str,
    describe: fn() -> RecordDescriptor,
}

impl RecordType {
    /// Handle for the record type `T`.
    pub fn of<T: CargoRecord + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            describe: T::descriptor,
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Rust path of the record type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Build the record's descriptor.
    pub fn descriptor(&self) -> RecordDescriptor {
        (self.describe)()
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordType").field(&self.type_name).finish()
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for RecordType {}

/// Declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Scalar(ScalarType),
    List(Box<TypeDescriptor>),
    Record(RecordType),
}

impl TypeDescriptor {
    /// Descriptor of any [`CargoType`].
    pub fn of<T: CargoType>() -> Self {
        T::cargo_type()
    }

    /// Descriptor of a record type.
    pub fn record<T: CargoRecord + 'static>() -> Self {
        Self::Record(RecordType::of::<T>())
    }

    /// Descriptor of an enum with a value table.
    pub fn enumeration<T: CargoEnum>() -> Self {
        Self::Scalar(ScalarType::Enum(T::descriptor()))
    }

    /// Short kind name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::List(_) => "list",
            Self::Record(_) => "record",
        }
    }
}

/// A single declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub ty: TypeDescriptor,
    pub annotation: FieldAnnotation,
}

/// Ordered field list of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDescriptor {
    pub name: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    /// Start describing the record `name`.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Declare a field without options.
    pub fn field<T: CargoType>(self, name: &'static str) -> Self {
        self.annotated::<T>(name, FieldAnnotation::None)
    }

    /// Declare a field with options.
    pub fn annotated<T: CargoType>(mut self, name: &'static str, annotation: impl Into<FieldAnnotation>) -> Self {
        self.fields.push(FieldDescriptor {
            name,
            ty: T::cargo_type(),
            annotation: annotation.into(),
        });
        self
    }

    /// Declared field names, in order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

/// A record that can be exported as a Cargo table row.
///
/// `descriptor` is the type-level schema; `field` is read access to an
/// instance by declared field name. `field` must return `Some` for every
/// name in the descriptor.
pub trait CargoRecord: fmt::Debug {
    fn descriptor() -> RecordDescriptor
    where
        Self: Sized;

    fn field(&self, name: &str) -> Option<Value<'_>>;
}

/// A type usable as a field of a [`CargoRecord`].
pub trait CargoType {
    fn cargo_type() -> TypeDescriptor
    where
        Self: Sized;

    fn to_value(&self) -> Value<'_>;
}

/// An enum rendered through an explicit value table.
pub trait CargoEnum: Copy + 'static {
    const NAME: &'static str;
    /// External value of every variant, in declaration order.
    const VALUES: &'static [&'static str];

    /// External value of this variant.
    fn value(self) -> &'static str;

    fn descriptor() -> EnumDescriptor {
        EnumDescriptor {
            name: Self::NAME,
            values: Self::VALUES,
        }
    }
}

macro_rules! impl_integer {
    ($($ty:ty),+) => {$(
        impl CargoType for $ty {
            fn cargo_type() -> TypeDescriptor {
                TypeDescriptor::Scalar(ScalarType::Integer)
            }

            fn to_value(&self) -> Value<'_> {
                Value::Int(i64::from(*self))
            }
        }
    )+};
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32);

impl CargoType for f32 {
    fn cargo_type() -> TypeDescriptor {
        TypeDescriptor::Scalar(ScalarType::Float)
    }

    fn to_value(&self) -> Value<'_> {
        Value::Float(*self)
    }
}

impl CargoType for f64 {
    fn cargo_type() -> TypeDescriptor {
        TypeDescriptor::Scalar(ScalarType::Float)
    }

    fn to_value(&self) -> Value<'_> {
        Value::Double(*self)
    }
}

impl CargoType for bool {
    fn cargo_type() -> TypeDescriptor {
        TypeDescriptor::Scalar(ScalarType::Boolean)
    }

    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl CargoType for String {
    fn cargo_type() -> TypeDescriptor {
        TypeDescriptor::Scalar(ScalarType::String)
    }

    fn to_value(&self) -> Value<'_> {
        Value::String(self.as_str())
    }
}

impl<T: CargoType> CargoType for Option<T> {
    fn cargo_type() -> TypeDescriptor {
        T::cargo_type()
    }

    fn to_value(&self) -> Value<'_> {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: CargoType> CargoType for Vec<T> {
    fn cargo_type() -> TypeDescriptor {
        TypeDescriptor::List(Box::new(T::cargo_type()))
    }

    fn to_value(&self) -> Value<'_> {
        Value::List(self.iter().map(CargoType::to_value).collect())
    }
}

/// Implement [`CargoType`] for record types.
///
/// ```
/// use desynced_cargo::{impl_cargo_record, CargoRecord, CargoType, RecordDescriptor, Value};
///
/// #[derive(Debug)]
/// struct Sockets {
///     small: i32,
/// }
///
/// impl CargoRecord for Sockets {
///     fn descriptor() -> RecordDescriptor {
///         RecordDescriptor::new("Sockets").field::<i32>("small")
///     }
///
///     fn field(&self, name: &str) -> Option<Value<'_>> {
///         match name {
///             "small" => Some(self.small.to_value()),
///             _ => None,
///         }
///     }
/// }
///
/// impl_cargo_record!(Sockets);
/// ```
#[macro_export]
macro_rules! impl_cargo_record {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::CargoType for $ty {
            fn cargo_type() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::record::<Self>()
            }

            fn to_value(&self) -> $crate::Value<'_> {
                $crate::Value::Record(self)
            }
        }
    )+};
}

/// Implement [`CargoType`] for types implementing [`CargoEnum`].
#[macro_export]
macro_rules! impl_cargo_enum {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::CargoType for $ty {
            fn cargo_type() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::enumeration::<Self>()
            }

            fn to_value(&self) -> $crate::Value<'_> {
                $crate::Value::Enum(<Self as $crate::CargoEnum>::value(*self))
            }
        }
    )+};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum Color {
        Red,
        Blue,
    }

    impl CargoEnum for Color {
        const NAME: &'static str = "Color";
        const VALUES: &'static [&'static str] = &["red", "blue"];

        fn value(self) -> &'static str {
            match self {
                Self::Red => "red",
                Self::Blue => "blue",
            }
        }
    }

    impl_cargo_enum!(Color);

    #[test]
    fn test_scalar_descriptors() {
        assert_eq!(TypeDescriptor::of::<i32>(), TypeDescriptor::Scalar(ScalarType::Integer));
        assert_eq!(TypeDescriptor::of::<Option<f64>>(), TypeDescriptor::Scalar(ScalarType::Float));
        assert_eq!(
            TypeDescriptor::of::<Vec<String>>(),
            TypeDescriptor::List(Box::new(TypeDescriptor::Scalar(ScalarType::String)))
        );
    }

    #[test]
    fn test_enum_declaration_text() {
        let ty = TypeDescriptor::of::<Color>();
        let TypeDescriptor::Scalar(scalar) = ty else {
            panic!("enum should be a scalar");
        };
        assert_eq!(scalar.to_string(), "String (allowed values=red,blue)");
        assert_eq!(scalar.cargo_name(), "String");
        assert_eq!(Color::Blue.to_value().to_string(), "blue");
    }

    #[test]
    fn test_descriptor_order() {
        let desc = RecordDescriptor::new("Simple").field::<String>("name").field::<i32>("age");
        assert_eq!(desc.field_names().collect::<Vec<_>>(), vec!["name", "age"]);
    }
}
