//! Error types for schema analysis and Cargo printing.
//!
//! Every error here points at a defect in a record declaration or at data
//! that outgrew its declaration. None of them are transient.

use thiserror::Error;

/// Errors raised while analyzing a record type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A list field was declared without list options.
    #[error("'{field}' in {record} must have ListFieldOptions set")]
    MissingListOptions { record: String, field: String },

    /// A list field has no usable slot count.
    #[error("'{field}' in {record} must have max_length > 0, has a max_length of {max_length}")]
    InvalidMaxLength {
        record: String,
        field: String,
        max_length: usize,
    },

    /// Options of the wrong kind for the field's type.
    #[error("'{field}' in {record} is a {kind} field but has {options} set")]
    MismatchedOptions {
        record: String,
        field: String,
        kind: &'static str,
        options: &'static str,
    },

    /// A record type contains itself.
    #[error("record type {record} refers to itself through '{field}'")]
    RecursiveRecord { record: String, field: String },
}

/// Errors that can occur when rendering a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid record declaration.
    #[error("{0}")]
    Schema(#[from] SchemaError),

    /// A list holds more elements than its declared slots.
    #[error("'{field}' max_length is too short. Is {max_length}, need {actual}.\n List: {value}")]
    CapacityExceeded {
        field: String,
        max_length: usize,
        actual: usize,
        value: String,
    },

    /// Two or more rendered lines share a key.
    #[error("duplicate keys {keys:?} in rendered output:\n{}", output.join("\n"))]
    DuplicateKeys { keys: Vec<String>, output: Vec<String> },

    /// The instance does not expose a declared field.
    #[error("record {record} has no readable field '{field}'")]
    UnknownField { record: String, field: String },

    /// The instance value does not fit the schema node.
    #[error("'{field}' expected a {expected} value, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The top-level schema is not a record.
    #[error("can only render record schemas, got a {0} schema")]
    NotARecord(&'static str),
}

/// Result type for Cargo operations.
pub type Result<T> = std::result::Result<T, Error>;
