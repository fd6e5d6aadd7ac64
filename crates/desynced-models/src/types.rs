//! Enumerations shared across several records.
//!
//! Every enum here renders through an explicit value table: the string a
//! variant maps to is what ends up on the wiki, and the same table is used to
//! parse values coming out of the game data.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A string that matches no variant of the named enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Declare an enum backed by a wiki value table.
///
/// Generates the enum plus [`CargoEnum`](desynced_cargo::CargoEnum),
/// `CargoType`, `Display` and a case-insensitive `FromStr`.
macro_rules! wiki_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl desynced_cargo::CargoEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VALUES: &'static [&'static str] = &[$($value),+];

            fn value(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        desynced_cargo::impl_cargo_enum!($name);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(desynced_cargo::CargoEnum::value(*self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::types::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| desynced_cargo::CargoEnum::value(*v).eq_ignore_ascii_case(s))
                    .ok_or_else(|| $crate::types::UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }
    };
}

pub(crate) use wiki_enum;

wiki_enum! {
    /// Faction an object belongs to.
    pub enum Race {
        Robot => "Robot",
        Alien => "Alien",
        Bug => "Bug",
        Human => "Human",
        Virus => "Virus",
        Blight => "Blight",
        Anomaly => "Anomaly",
    }
}

/// Parse an optional game value, ignoring blanks.
///
/// Unknown values are reported as errors so callers can decide whether to
/// warn or abort.
pub fn parse_optional<T>(value: Option<&str>) -> Result<Option<T>, T::Err>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}
