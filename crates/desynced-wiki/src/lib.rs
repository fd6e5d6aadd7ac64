//! Desynced wiki page generation.
//!
//! Turns the tables built by `desynced-data` into MediaWiki Cargo pages:
//!
//! - `Template/<table>`: the `#cargo_declare` / `#cargo_store` page of a table
//! - `Data/<table>/<name>`: one storage page per object
//!
//! # Example
//!
//! ```no_run
//! use desynced_data::GameData;
//! use desynced_wiki::{GenerateOptions, Generator};
//!
//! let game = GameData::open("desynced_data.json")?;
//! let summary = Generator::new(GenerateOptions::default())?.run(&game)?;
//! println!("{} pages", summary.pages);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod category;
mod constants;
mod error;
mod generator;
pub mod page;
mod table;
mod templater;

pub use category::{parse_table_filter, DataCategory, DataCategoryInfo};
pub use constants::{page_url, DEFAULT_WIKI_OUTPUT_DIR, FORCE_INCLUDE_NAMES, TEMPLATE_TABLE_INDEX, WIKI_BASE_URL};
pub use error::{Error, Result};
pub use generator::{build_table, page_file_name, GenerateOptions, Generator, Page, RenderedTable, Summary};
pub use table::{name_collisions, CargoTable, Row, Table};
pub use templater::Templater;
