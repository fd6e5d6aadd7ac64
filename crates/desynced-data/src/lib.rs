//! Desynced game data extraction.
//!
//! Reads a JSON export of the game's global `data` table and builds the
//! records defined in `desynced-models`:
//!
//! - [`GameData`] - loaded export plus cross-table lookups
//! - [`ticks`] - game tick conversions
//! - [`names`] - wiki name overrides
//! - [`raw`] - serde shapes of the export
//!
//! ```no_run
//! use desynced_data::GameData;
//!
//! let game = GameData::open("data.json")?;
//! for entity in game.entities() {
//!     println!("{}: {} hp", entity.name, entity.health);
//! }
//! # Ok::<(), desynced_data::Error>(())
//! ```

mod error;
mod game_data;

pub mod names;
pub mod raw;
pub mod ticks;

pub use error::{Error, Result};
pub use game_data::{GameData, CONSTRUCTION_PRODUCER};
