//! Writes declaration and storage pages for every table.
//!
//! Output layout:
//!
//! ```text
//! <output>/Template/<table>          declaration + store template
//! <output>/Data/<table>/<file name>  one storage page per object
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use desynced_data::GameData;
use tracing::{debug, error, info};
use walkdir::WalkDir;

use crate::category::DataCategory;
use crate::constants::{DEFAULT_WIKI_OUTPUT_DIR, FORCE_INCLUDE_NAMES};
use crate::error::{Error, Result};
use crate::table::{CargoTable, Table};
use crate::templater::Templater;

/// What to generate and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
    /// Replace existing output without asking.
    pub overwrite: bool,
    /// Only generate these tables; empty means all.
    pub table_filter: Vec<DataCategory>,
    /// Only write `Template/` pages.
    pub template_only: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_WIKI_OUTPUT_DIR),
            overwrite: false,
            table_filter: Vec::new(),
            template_only: false,
        }
    }
}

/// A storage page ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub name: String,
    pub file_name: String,
    pub content: String,
}

/// Every page of one table.
#[derive(Debug, Clone)]
pub struct RenderedTable {
    pub category: DataCategory,
    pub declaration: String,
    pub pages: Vec<Page>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub tables: usize,
    pub pages: usize,
}

/// The table of `category` over every object in `game`.
///
/// Entities, components and items hide spoilers.
pub fn build_table(category: DataCategory, game: &GameData) -> Box<dyn CargoTable> {
    match category {
        DataCategory::Entity => Table::new(category, game.entities()).hiding_spoilers().boxed(),
        DataCategory::Component => Table::new(category, game.components()).hiding_spoilers().boxed(),
        DataCategory::Item => Table::new(category, game.items()).hiding_spoilers().boxed(),
        DataCategory::Instruction => Table::new(category, game.instructions()).boxed(),
        DataCategory::Tech => Table::new(category, game.technologies()).boxed(),
        DataCategory::TechUnlock => Table::new(category, game.tech_unlocks()).boxed(),
        DataCategory::TechCategory => Table::new(category, game.technology_categories()).boxed(),
        DataCategory::CategoryFilter => Table::new(category, game.category_filters()).boxed(),
    }
}

/// File name of an object's storage page.
pub fn page_file_name(name: &str) -> String {
    name.replace('/', "_").replace('*', "")
}

pub struct Generator {
    options: GenerateOptions,
    templater: Templater,
}

impl Generator {
    pub fn new(options: GenerateOptions) -> Result<Self> {
        Ok(Self {
            options,
            templater: Templater::new()?,
        })
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Build the selected tables from game data.
    ///
    /// Entities, components and items nothing unlocks are dropped unless
    /// force-included.
    pub fn tables(&self, game: &GameData) -> Result<Vec<Box<dyn CargoTable>>> {
        let mut tables: Vec<_> = DataCategory::ALL.iter().map(|&c| build_table(c, game)).collect();

        let mut unlockable: BTreeSet<String> = game.unlockable_names();
        unlockable.extend(FORCE_INCLUDE_NAMES.iter().map(|n| n.to_string()));

        for table in &mut tables {
            let dropped = table.filter_spoilers(&unlockable);
            if dropped > 0 {
                debug!(table = %table.category(), dropped, "hid objects nothing unlocks");
            }
        }

        if !self.options.table_filter.is_empty() {
            tables.retain(|t| self.options.table_filter.contains(&t.category()));
            if tables.is_empty() {
                return Err(Error::EmptyTableFilter);
            }
        }

        Ok(tables)
    }

    /// Fail if any table publishes two objects under the same name.
    ///
    /// Every colliding table is logged before the first is returned.
    pub fn check_collisions(&self, tables: &[Box<dyn CargoTable>]) -> Result<()> {
        let mut first = None;
        for table in tables {
            let collisions = table.name_collisions();
            if collisions.is_empty() {
                continue;
            }

            for (name, ids) in &collisions {
                error!(table = %table.category(), name = %name, ids = %ids.join(","), "name collision");
            }
            first.get_or_insert(Error::NameCollisions {
                table: table.category().to_string(),
                collisions,
            });
        }

        match first {
            Some(err) => {
                error!("name collisions found, resolve them with a wiki name override");
                Err(err)
            }
            None => Ok(()),
        }
    }

    /// Create the output directory and clear stale files from it.
    ///
    /// Without a table filter the whole directory is cleared; with one, only
    /// the data directories of the selected tables. Directories holding files
    /// are only cleared with `overwrite`.
    pub fn prepare_output(&self, tables: &[Box<dyn CargoTable>]) -> Result<()> {
        let output = &self.options.output_dir;
        fs::create_dir_all(output)?;

        let dirs: Vec<PathBuf> = if self.options.table_filter.is_empty() {
            vec![output.clone()]
        } else if self.options.template_only {
            Vec::new()
        } else {
            tables.iter().map(|t| self.data_dir(t.category())).collect()
        };

        for dir in &dirs {
            if has_files(dir) && !self.options.overwrite {
                return Err(Error::OutputNotEmpty(dir.clone()));
            }
        }

        for dir in &dirs {
            clean_files(dir)?;
        }
        Ok(())
    }

    fn data_dir(&self, category: DataCategory) -> PathBuf {
        self.options.output_dir.join("Data").join(category.as_str())
    }

    /// Render a table's declaration page and, unless template-only, its
    /// storage pages.
    pub fn render_table(&self, table: &dyn CargoTable) -> Result<RenderedTable> {
        let category = table.category();
        let (declare, store) = table.declaration()?;
        let declaration = self.templater.declaration(category, &declare, &store)?;

        let pages = if self.options.template_only {
            Vec::new()
        } else {
            table
                .rows()?
                .into_iter()
                .map(|row| -> Result<Page> {
                    Ok(Page {
                        file_name: page_file_name(&row.name),
                        content: self.templater.storage(category, &row.name, &row.lines)?,
                        name: row.name,
                    })
                })
                .collect::<Result<Vec<_>>>()?
        };

        Ok(RenderedTable {
            category,
            declaration,
            pages,
        })
    }

    /// Write a rendered table, returning the number of storage pages.
    pub fn write_table(&self, rendered: &RenderedTable) -> Result<usize> {
        let template_dir = self.options.output_dir.join("Template");
        fs::create_dir_all(&template_dir)?;
        fs::write(template_dir.join(rendered.category.as_str()), &rendered.declaration)?;
        debug!(table = %rendered.category, content = %rendered.declaration, "wrote declaration");

        if self.options.template_only {
            return Ok(0);
        }

        let data_dir = self.data_dir(rendered.category);
        fs::create_dir_all(&data_dir)?;
        for page in &rendered.pages {
            let path = data_dir.join(&page.file_name);
            if path.is_file() {
                return Err(Error::FileExists(path));
            }
            fs::write(&path, &page.content)?;
            debug!(file = %page.name, content = %page.content, "wrote storage page");
        }

        Ok(rendered.pages.len())
    }

    /// Generate every selected table.
    pub fn run(&self, game: &GameData) -> Result<Summary> {
        self.run_with_progress(game, |_, _, _| {})
    }

    /// Generate every selected table, calling `on_table(category, done, total)`
    /// after each one is written.
    pub fn run_with_progress(
        &self,
        game: &GameData,
        mut on_table: impl FnMut(DataCategory, usize, usize),
    ) -> Result<Summary> {
        let tables = self.tables(game)?;
        if !self.options.template_only {
            self.check_collisions(&tables)?;
        }
        self.prepare_output(&tables)?;

        let mut summary = Summary::default();
        for table in &tables {
            let rendered = self.render_table(table.as_ref())?;
            summary.pages += self.write_table(&rendered)?;
            summary.tables += 1;
            info!(table = %table.category(), pages = rendered.pages.len(), "generated table");
            on_table(table.category(), summary.tables, tables.len());
        }

        info!(
            output = %self.options.output_dir.display(),
            tables = summary.tables,
            pages = summary.pages,
            "finished writing wiki files"
        );
        Ok(summary)
    }
}

fn has_files(dir: &Path) -> bool {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .any(|e| e.file_type().is_file())
}

/// Delete every file below `dir`, keeping directories.
fn clean_files(dir: &Path) -> Result<()> {
    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            debug!(path = %entry.path().display(), "deleting");
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"{
        "frames": {
            "f_bot_1s_a": {"name": "Worker", "health_points": 100, "trigger_channels": "bot"},
            "f_secret": {"name": "Secret Bot", "health_points": 1},
            "f_cc": {"name": "Command Center", "trigger_channels": "building"}
        },
        "items": {
            "metalplate": {"name": "Metal/Plate*", "stack_size": 20}
        },
        "techs": {
            "t_robotics": {"name": "Robotics", "unlocks": ["f_bot_1s_a", "metalplate"]}
        }
    }"#;

    fn options(dir: &Path) -> GenerateOptions {
        GenerateOptions {
            output_dir: dir.to_path_buf(),
            ..GenerateOptions::default()
        }
    }

    #[test]
    fn test_generate_writes_pages() {
        let dir = tempfile::tempdir().unwrap();
        let game = GameData::from_json(DUMP).unwrap();
        let summary = Generator::new(options(dir.path())).unwrap().run(&game).unwrap();

        assert_eq!(summary.tables, DataCategory::ALL.len());
        // Worker, Command Center (forced), Metal/Plate*, Robotics, one unlock per entry
        assert_eq!(summary.pages, 6);

        let entity_dir = dir.path().join("Data/entity");
        assert!(entity_dir.join("Worker").is_file());
        assert!(entity_dir.join("Command Center").is_file());
        assert!(!entity_dir.join("Secret Bot").exists());
        assert!(dir.path().join("Data/item/Metal_Plate").is_file());

        let worker = fs::read_to_string(entity_dir.join("Worker")).unwrap();
        assert!(worker.starts_with("{{DataEntity\n|name = Worker\n|luaId = f_bot_1s_a\n"));
        assert!(worker.ends_with("}}\n{{DataTableIndex|entity|Worker}}"));

        let declaration = fs::read_to_string(dir.path().join("Template/entity")).unwrap();
        assert!(declaration.contains("{{#cargo_declare:_table=entity\n|name = String\n"));
        assert!(declaration.contains("|health = {{{health|}}}"));
    }

    #[test]
    fn test_progress_reports_each_table() {
        let dir = tempfile::tempdir().unwrap();
        let game = GameData::from_json(DUMP).unwrap();
        let options = GenerateOptions {
            table_filter: vec![DataCategory::Entity, DataCategory::Item],
            ..options(dir.path())
        };

        let mut seen = Vec::new();
        let summary = Generator::new(options)
            .unwrap()
            .run_with_progress(&game, |category, done, total| seen.push((category, done, total)))
            .unwrap();

        assert_eq!(summary.tables, 2);
        assert_eq!(seen, vec![(DataCategory::Entity, 1, 2), (DataCategory::Item, 2, 2)]);
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("stale"), "old").unwrap();
        let game = GameData::from_json(DUMP).unwrap();

        let err = Generator::new(options(dir.path())).unwrap().run(&game).unwrap_err();
        assert!(matches!(err, Error::OutputNotEmpty(_)));
        assert!(dir.path().join("stale").is_file());

        let overwrite = GenerateOptions {
            overwrite: true,
            ..options(dir.path())
        };
        Generator::new(overwrite).unwrap().run(&game).unwrap();
        assert!(!dir.path().join("stale").exists());
    }

    #[test]
    fn test_table_filter_and_template_only() {
        let dir = tempfile::tempdir().unwrap();
        let game = GameData::from_json(DUMP).unwrap();
        let options = GenerateOptions {
            table_filter: vec![DataCategory::Item],
            template_only: true,
            ..options(dir.path())
        };

        let summary = Generator::new(options).unwrap().run(&game).unwrap();
        assert_eq!(summary, Summary { tables: 1, pages: 0 });
        assert!(dir.path().join("Template/item").is_file());
        assert!(!dir.path().join("Template/entity").exists());
        assert!(!dir.path().join("Data").exists());
    }

    #[test]
    fn test_name_collisions_abort() {
        let dir = tempfile::tempdir().unwrap();
        let game = GameData::from_json(
            r#"{
                "components": {
                    "c_human_aicenter": {"name": "AI Center"},
                    "c_other_aicenter": {"name": "AI Center"}
                },
                "techs": {"t": {"name": "T", "unlocks": ["c_human_aicenter"]}}
            }"#,
        )
        .unwrap();

        let err = Generator::new(options(dir.path())).unwrap().run(&game).unwrap_err();
        match err {
            Error::NameCollisions { table, collisions } => {
                assert_eq!(table, "component");
                assert_eq!(collisions["AI Center"], vec!["c_human_aicenter", "c_other_aicenter"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!dir.path().join("Data").exists());
    }

    #[test]
    fn test_same_file_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        let game = GameData::from_json(
            r#"{
                "items": {
                    "a": {"name": "Plate/1"},
                    "b": {"name": "Plate_1"}
                },
                "techs": {"t": {"name": "T", "unlocks": ["a", "b"]}}
            }"#,
        )
        .unwrap();
        let options = GenerateOptions {
            table_filter: vec![DataCategory::Item],
            ..options(dir.path())
        };

        let err = Generator::new(options).unwrap().run(&game).unwrap_err();
        assert!(matches!(err, Error::FileExists(path) if path.ends_with("Plate_1")));
    }

    #[test]
    fn test_build_empty_table() {
        let table = build_table(DataCategory::TechUnlock, &GameData::default());
        assert!(table.is_empty());
        let (declare, _) = table.declaration().unwrap();
        assert_eq!(declare, vec!["|techName = String", "|unlocks = String"]);
    }

    #[test]
    fn test_page_file_name() {
        assert_eq!(page_file_name("Metal/Plate*"), "Metal_Plate");
        assert_eq!(page_file_name("Worker"), "Worker");
    }
}
