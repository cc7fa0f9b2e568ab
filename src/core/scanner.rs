//! Enumeration of source, layout and resource files under a project root.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use walkdir::{DirEntry, WalkDir};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: BTreeSet<PathBuf>,
    pub skipped_count: usize,
}

/// Ignore rules relative to a base directory.
struct IgnoreRules {
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreRules {
    fn new(base_dir: &Path, ignores: &[String]) -> Self {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();

        for ignore in ignores {
            if is_glob_pattern(ignore) {
                match Pattern::new(ignore) {
                    Ok(pattern) => patterns.push(pattern),
                    Err(err) => {
                        tracing::warn!(pattern = %ignore, error = %err, "invalid ignore pattern");
                    }
                }
            } else {
                literal_paths.push(base_dir.join(ignore));
            }
        }

        Self {
            literal_paths,
            patterns,
        }
    }

    fn is_ignored(&self, base_dir: &Path, path: &Path) -> bool {
        if self.literal_paths.iter().any(|p| path.starts_with(p)) {
            return true;
        }
        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        self.patterns.iter().any(|p| p.matches_path(relative))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
}

/// Roots to walk: `base_dir` itself, or every include resolved against it.
fn resolve_includes(base_dir: &Path, includes: &[String]) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for include in includes {
        let full = base_dir.join(include);
        if is_glob_pattern(include) {
            match glob(&full.to_string_lossy()) {
                Ok(entries) => roots.extend(entries.flatten()),
                Err(err) => {
                    tracing::warn!(pattern = %include, error = %err, "invalid include pattern");
                }
            }
        } else if full.exists() {
            roots.push(full);
        } else {
            tracing::warn!(path = %full.display(), "include path does not exist");
        }
    }
    roots
}

/// Collects files with one of `extensions` below the included roots.
///
/// Hidden directories are not entered; unreadable entries are counted in
/// `skipped_count`.
pub fn scan_files(
    base_dir: &Path,
    includes: &[String],
    ignores: &[String],
    extensions: &[String],
) -> ScanResult {
    let rules = IgnoreRules::new(base_dir, ignores);
    let mut result = ScanResult::default();

    for root in resolve_includes(base_dir, includes) {
        let walker = WalkDir::new(&root)
            .into_iter()
            .filter_entry(|entry| !is_hidden(entry) && !rules.is_ignored(base_dir, entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable entry");
                    result.skipped_count += 1;
                    continue;
                }
            };

            if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                result.files.insert(entry.into_path());
            }
        }
    }

    result
}

/// All `.strings` resource files below the resource roots.
///
/// Projects without string resources are common, so missing literal roots
/// are skipped quietly rather than warned about.
pub fn find_resource_files(base_dir: &Path, roots: &[String], ignores: &[String]) -> ScanResult {
    let extensions = [crate::core::strings::RESOURCE_EXTENSION.to_string()];
    let roots: Vec<String> = roots
        .iter()
        .filter(|root| {
            let present = is_glob_pattern(root) || base_dir.join(root.as_str()).exists();
            if !present {
                tracing::debug!(root = %root, "resource root does not exist");
            }
            present
        })
        .cloned()
        .collect();

    if roots.is_empty() {
        return ScanResult::default();
    }
    scan_files(base_dir, &roots, ignores, &extensions)
}
