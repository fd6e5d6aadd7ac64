//! Error types for wiki page generation.

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating wiki pages.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be rendered.
    #[error("{0}")]
    Cargo(#[from] desynced_cargo::Error),

    /// A record type has an invalid declaration.
    #[error("{0}")]
    Schema(#[from] desynced_cargo::SchemaError),

    /// Template rendering failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Unknown data category name.
    #[error("unknown table: '{0}'")]
    UnknownTable(String),

    /// The table filter matched no table.
    #[error("--table-filter filtered all tables")]
    EmptyTableFilter,

    /// Several lua ids resolve to the same wiki name.
    #[error("name collisions in table {table}: {}", format_collisions(.collisions))]
    NameCollisions {
        table: String,
        collisions: BTreeMap<String, Vec<String>>,
    },

    /// The output directory holds files and overwriting was not allowed.
    #[error("output directory {} already contains data, pass --overwrite to replace it", .0.display())]
    OutputNotEmpty(PathBuf),

    /// Two objects map to the same output file.
    #[error("file {} already exists. Missing name override?", .0.display())]
    FileExists(PathBuf),
}

fn format_collisions(collisions: &BTreeMap<String, Vec<String>>) -> String {
    collisions
        .iter()
        .map(|(name, ids)| format!("'{}' <- {}", name, ids.join(",")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for wiki generation.
pub type Result<T> = std::result::Result<T, Error>;
