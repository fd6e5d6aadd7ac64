//! Cargo tables published to the wiki.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One Cargo table, named as on the wiki.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataCategory {
    CategoryFilter,
    Component,
    Entity,
    Item,
    Instruction,
    Tech,
    TechCategory,
    TechUnlock,
}

/// Page metadata of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataCategoryInfo {
    /// Objects get their own human-written page.
    pub has_page: bool,
    /// Parent page of those pages.
    pub subpage_of: Option<&'static str>,
}

impl DataCategory {
    pub const ALL: [DataCategory; 8] = [
        Self::CategoryFilter,
        Self::Component,
        Self::Entity,
        Self::Item,
        Self::Instruction,
        Self::Tech,
        Self::TechCategory,
        Self::TechUnlock,
    ];

    /// Table name (camelCase).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CategoryFilter => "categoryFilter",
            Self::Component => "component",
            Self::Entity => "entity",
            Self::Item => "item",
            Self::Instruction => "instruction",
            Self::Tech => "tech",
            Self::TechCategory => "techCategory",
            Self::TechUnlock => "techUnlock",
        }
    }

    pub fn info(self) -> DataCategoryInfo {
        let (has_page, subpage_of) = match self {
            Self::Entity | Self::Component | Self::Item => (true, None),
            Self::Instruction => (true, Some("Instructions")),
            Self::Tech => (true, Some("Technology")),
            Self::TechUnlock | Self::TechCategory | Self::CategoryFilter => (false, None),
        };
        DataCategoryInfo { has_page, subpage_of }
    }

    pub fn has_human_pages(self) -> bool {
        self.info().has_page
    }

    /// Storage template name: `component` -> `DataComponent`.
    pub fn template_title(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("Data{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => String::from("Data"),
        }
    }

    pub fn template_page(self) -> String {
        format!("Template:{}", self.template_title())
    }

    /// Title of the data page storing `human_title`.
    pub fn data_page_title(self, human_title: &str) -> String {
        format!("Data:{}:{}", self.as_str(), human_title)
    }
}

impl fmt::Display for DataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| Error::UnknownTable(s.to_string()))
    }
}

/// Parse a comma separated table list, ignoring blanks.
pub fn parse_table_filter(filter: &str) -> Result<Vec<DataCategory>, Error> {
    filter
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(str::parse)
        .collect()
}
