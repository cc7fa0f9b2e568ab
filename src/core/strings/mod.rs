//! Localized string lookups backed by `.strings` resource files.
//!
//! Resource files live in directories, one file per locale (`en.strings`,
//! `de_DE.strings`, ...). For every directory exactly one file is chosen by
//! locale preference and parsed into a [`StringTable`]; [`LocaleResourceCache`]
//! answers ID lookups across all directories.

mod cache;
mod locale;
mod parser;
mod preview;

pub use cache::{DirectorySummary, LocaleResourceCache, RebuildStats, Resolved};
pub use locale::Locale;
pub use parser::{StringTable, parse_string_table};
pub use preview::{DEFAULT_PREVIEW_WIDTH, quote, shorten};

/// Extension of string resource files.
pub const RESOURCE_EXTENSION: &str = "strings";
