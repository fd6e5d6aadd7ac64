//! Typed tables behind one object-safe interface.

use std::collections::{BTreeMap, BTreeSet};

use desynced_cargo::{schema_of, CargoPrinter, CargoRecord, Mode};
use desynced_models::WikiObject;
use rayon::prelude::*;

use crate::category::DataCategory;
use crate::error::Result;

/// A rendered Cargo table row, before templating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub lines: Vec<String>,
}

/// One Cargo table and its objects.
pub trait CargoTable: Send + Sync {
    fn category(&self) -> DataCategory;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Declaration and template skeleton lines of the table.
    fn declaration(&self) -> Result<(Vec<String>, Vec<String>)>;

    /// Data lines of every object, in object order.
    fn rows(&self) -> Result<Vec<Row>>;

    /// Wiki names claimed by more than one lua id.
    fn name_collisions(&self) -> BTreeMap<String, Vec<String>>;

    /// Drop objects whose name is not in `names`, if the table hides spoilers.
    ///
    /// Returns the number of objects dropped.
    fn filter_spoilers(&mut self, names: &BTreeSet<String>) -> usize;
}

/// A [`CargoTable`] over records of type `T`.
pub struct Table<T> {
    category: DataCategory,
    objects: Vec<T>,
    hide_spoilers: bool,
}

impl<T: WikiObject + 'static> Table<T> {
    pub fn new(category: DataCategory, objects: Vec<T>) -> Self {
        Self {
            category,
            objects,
            hide_spoilers: false,
        }
    }

    /// Only publish objects some technology unlocks.
    pub fn hiding_spoilers(mut self) -> Self {
        self.hide_spoilers = true;
        self
    }

    pub fn objects(&self) -> &[T] {
        &self.objects
    }

    pub fn boxed(self) -> Box<dyn CargoTable> {
        Box::new(self)
    }
}

impl<T: WikiObject + 'static> CargoTable for Table<T> {
    fn category(&self) -> DataCategory {
        self.category
    }

    fn len(&self) -> usize {
        self.objects.len()
    }

    fn declaration(&self) -> Result<(Vec<String>, Vec<String>)> {
        let declare = CargoPrinter::new(Mode::Declarations).print_type::<T>()?;
        let store = CargoPrinter::new(Mode::Template).print_type::<T>()?;
        Ok((declare, store))
    }

    fn rows(&self) -> Result<Vec<Row>> {
        let schema = schema_of::<T>()?;
        let printer = CargoPrinter::new(Mode::Data);

        self.objects
            .par_iter()
            .map(|object| -> Result<Row> {
                Ok(Row {
                    name: object.name().to_string(),
                    lines: printer.render(Some(object as &dyn CargoRecord), &schema)?,
                })
            })
            .collect()
    }

    fn name_collisions(&self) -> BTreeMap<String, Vec<String>> {
        name_collisions(&self.objects)
    }

    fn filter_spoilers(&mut self, names: &BTreeSet<String>) -> usize {
        if !self.hide_spoilers {
            return 0;
        }
        let before = self.objects.len();
        self.objects.retain(|o| names.contains(o.name()));
        before - self.objects.len()
    }
}

/// Wiki names shared by several lua ids, with those ids.
///
/// Objects without a lua id are ignored.
pub fn name_collisions<T: WikiObject>(objects: &[T]) -> BTreeMap<String, Vec<String>> {
    let mut ids_per_name: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for object in objects {
        if let Some(id) = object.lua_id() {
            ids_per_name.entry(object.name().to_string()).or_default().push(id.to_string());
        }
    }

    ids_per_name.retain(|_, ids| ids.len() > 1);
    ids_per_name
}
