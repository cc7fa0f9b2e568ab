use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError, RwLock},
};

use super::{Locale, RESOURCE_EXTENSION, StringTable, parse_string_table};
use crate::core::cancel::{CancellationToken, Cancelled};

/// String tables of every resource directory in a project.
///
/// Readers always see a complete generation: [`rebuild`](Self::rebuild)
/// prepares the next generation on the side and swaps it in at the end.
///
/// A directory's table is loaded once and then kept across rebuilds, even if
/// its files change or disappear. Call [`invalidate`](Self::invalidate) to
/// force a reload.
pub struct LocaleResourceCache {
    locale: Locale,
    snapshot: RwLock<Arc<CacheSnapshot>>,
    rebuild_lock: Mutex<()>,
}

#[derive(Debug, Default)]
struct CacheSnapshot {
    /// Ordered by path, which is also the lookup order.
    directories: BTreeMap<PathBuf, ResourceDirectory>,
}

#[derive(Debug, Clone, Default)]
struct ResourceDirectory {
    files: BTreeSet<PathBuf>,
    table: Arc<StringTable>,
    /// File `table` was loaded from.
    source: Option<PathBuf>,
}

impl ResourceDirectory {
    /// Picks the file for `locale`: full tag, language, `en`, then the first
    /// file in path order.
    fn select_file(&self, locale: &Locale) -> Option<&PathBuf> {
        locale
            .candidates()
            .into_iter()
            .find_map(|name| {
                let wanted = format!("{}.{}", name, RESOURCE_EXTENSION);
                self.files
                    .iter()
                    .find(|file| file.file_name().and_then(|n| n.to_str()) == Some(wanted.as_str()))
            })
            .or_else(|| self.files.iter().next())
    }
}

/// Counters from one [`LocaleResourceCache::rebuild`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebuildStats {
    pub directories: usize,
    pub files: usize,
    /// Directories whose table was (re)loaded in this rebuild.
    pub loaded: usize,
}

/// A resolved string and the resource file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub text: String,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySummary {
    pub directory: PathBuf,
    pub files: Vec<PathBuf>,
    pub source: Option<PathBuf>,
    pub entries: usize,
}

impl LocaleResourceCache {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            snapshot: RwLock::new(Arc::new(CacheSnapshot::default())),
            rebuild_lock: Mutex::new(()),
        }
    }

    fn current(&self) -> Arc<CacheSnapshot> {
        let guard = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    fn publish(&self, snapshot: CacheSnapshot) {
        let mut guard = self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(snapshot);
    }

    /// Regroups the observed resource files by directory and loads the table
    /// of every directory that has none yet.
    ///
    /// On cancellation nothing is published and the previous generation
    /// stays visible.
    pub fn rebuild<I>(&self, files: I, cancel: &CancellationToken) -> Result<RebuildStats, Cancelled>
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        let _guard = self
            .rebuild_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        cancel.check()?;

        // Tables survive into the next generation; observed files do not.
        let mut directories: BTreeMap<PathBuf, ResourceDirectory> = self
            .current()
            .directories
            .iter()
            .map(|(path, directory)| {
                let carried = ResourceDirectory {
                    files: BTreeSet::new(),
                    table: Arc::clone(&directory.table),
                    source: directory.source.clone(),
                };
                (path.clone(), carried)
            })
            .collect();

        let mut stats = RebuildStats::default();
        for file in files {
            let file: PathBuf = file.into();
            let Some(parent) = file.parent().map(Path::to_path_buf) else {
                continue;
            };
            directories.entry(parent).or_default().files.insert(file);
            stats.files += 1;
        }

        for (path, directory) in directories.iter_mut() {
            if !directory.table.is_empty() {
                continue;
            }
            cancel.check()?;

            match directory.select_file(&self.locale).cloned() {
                Some(file) => {
                    let table = load_table(&file);
                    tracing::debug!(
                        directory = %path.display(),
                        file = %file.display(),
                        entries = table.len(),
                        "loaded string table"
                    );
                    directory.table = Arc::new(table);
                    directory.source = Some(file);
                    stats.loaded += 1;
                }
                None => directory.source = None,
            }
        }

        stats.directories = directories.len();
        self.publish(CacheSnapshot { directories });
        Ok(stats)
    }

    /// Forgets every directory and table.
    pub fn invalidate(&self) {
        let _guard = self
            .rebuild_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        self.publish(CacheSnapshot::default());
    }

    /// Text for `id` from the first directory (in path order) that defines it.
    pub fn lookup(&self, id: &str) -> Option<String> {
        self.resolve(id).map(|resolved| resolved.text)
    }

    pub fn resolve(&self, id: &str) -> Option<Resolved> {
        let snapshot = self.current();
        snapshot.directories.values().find_map(|directory| {
            directory.table.get(id).map(|text| Resolved {
                text: text.to_string(),
                file: directory.source.clone(),
            })
        })
    }

    pub fn directories(&self) -> Vec<DirectorySummary> {
        self.current()
            .directories
            .iter()
            .map(|(path, directory)| DirectorySummary {
                directory: path.clone(),
                files: directory.files.iter().cloned().collect(),
                source: directory.source.clone(),
                entries: directory.table.len(),
            })
            .collect()
    }
}

/// Reads and parses one resource file. Unreadable files give an empty table.
fn load_table(path: &Path) -> StringTable {
    match fs::read(path) {
        Ok(bytes) => {
            let content = String::from_utf8_lossy(&bytes);
            parse_string_table(content.lines())
        }
        Err(err) => {
            tracing::warn!(file = %path.display(), error = %err, "cannot read string resource");
            StringTable::default()
        }
    }
}
