//! Built-in generator settings.

/// Output directory used when none is given.
pub const DEFAULT_WIKI_OUTPUT_DIR: &str = "wiki_output";

pub const WIKI_BASE_URL: &str = "https://wiki.desyncedgame.com";

/// Template appended to every storage page.
pub const TEMPLATE_TABLE_INDEX: &str = "DataTableIndex";

/// Objects published even though no technology unlocks them.
pub const FORCE_INCLUDE_NAMES: &[&str] = &[
    "Command Center",
    "Trilobyte",
    "Malika",
    "Mothika",
    "Scale Worm",
    "Ravager",
    "Trilobyte Attack",
    "Trilobyte Attack (1)",
    "Trilobyte Attack (2)",
    "Trilobyte Attack (3)",
    "Trilobyte Attack (4)",
    "Trilobyte Attack (T2)",
    "Trilobyte Attack (T3)",
    "Wasp Attack",
    "Greelobyte",
    "Trilopew",
    "Wasp",
    "Gigakaiju",
    "Shield Worm",
    "Bug Hole",
    "Bug Hive",
    "Large Bug Hive",
    "Giant Beast",
];

/// Page URL of a wiki title.
pub fn page_url(full_title: &str) -> String {
    format!("{}/{}", WIKI_BASE_URL, full_title.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url() {
        assert_eq!(
            page_url("Data:entity:Command Center"),
            "https://wiki.desyncedgame.com/Data:entity:Command_Center"
        );
    }
}
