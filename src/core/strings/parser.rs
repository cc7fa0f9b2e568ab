use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

/// `"<id>" = "<value>";`
///
/// Both groups are greedy and quotes are not escape-aware: a `"` inside the
/// ID or value is matched wherever the greedy groups leave it.
static LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"(.*)"\s+=\s+"(.*)";$"#).unwrap());

/// Parsed ID to text mapping of one resource file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    entries: HashMap<String, String>,
}

impl StringTable {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses resource file lines into a table.
///
/// Lines that don't match the entry grammar, and entries with an empty ID or
/// value, are skipped. `\n` in a value becomes a newline. Later duplicates
/// win.
pub fn parse_string_table<'a, I>(lines: I) -> StringTable
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entries = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }
        let Some(captures) = LINE_REGEX.captures(line) else {
            continue;
        };

        let id = &captures[1];
        let value = &captures[2];
        if id.is_empty() || value.is_empty() {
            continue;
        }

        entries.insert(id.to_string(), value.replace("\\n", "\n"));
    }

    StringTable { entries }
}
