//! Desynced wiki data generator.
//!
//! Unified interface to the crates that turn a Desynced game-data export
//! into MediaWiki Cargo pages.
//!
//! # Crates
//!
//! - [`desynced_cargo`] - Cargo record printing (data, declarations, templates)
//! - [`desynced_models`] - Wiki records for game objects
//! - [`desynced_data`] - Game-data export reading
//! - [`desynced_wiki`] - Page templating and generation
//!
//! # Example
//!
//! ```no_run
//! use desynced::prelude::*;
//!
//! let game = GameData::open("desynced_data.json")?;
//! let options = GenerateOptions {
//!     table_filter: parse_table_filter("entity,item")?,
//!     ..GenerateOptions::default()
//! };
//! let summary = Generator::new(options)?.run(&game)?;
//! println!("Pages: {}", summary.pages);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use desynced_cargo as cargo;
pub use desynced_data as data;
pub use desynced_models as models;
pub use desynced_wiki as wiki;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use desynced_cargo::{CargoPrinter, CargoRecord, Mode};
    pub use desynced_data::GameData;
    pub use desynced_models::{
        CategoryFilter, Component, Entity, Instruction, Item, Recipe, Technology, TechnologyCategory,
        TechnologyUnlock, WikiObject,
    };
    pub use desynced_wiki::{parse_table_filter, CargoTable, DataCategory, GenerateOptions, Generator, Templater};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
