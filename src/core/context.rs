//! Project context shared by the CLI commands.
//!
//! Resolves the project root and configuration, applies command-line
//! overrides, and builds the string table cache on first use.

use std::{
    cell::OnceCell,
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        cancel::CancellationToken,
        document::DocumentKind,
        scanner::{ScanResult, find_resource_files, scan_files},
        strings::{Locale, LocaleResourceCache, RebuildStats},
    },
};

pub struct ProjectContext {
    pub config: Config,
    /// Directory config paths (includes, resource roots) are relative to.
    pub root_dir: PathBuf,
    pub locale: Locale,
    pub verbose: bool,
    cancel: CancellationToken,
    cache: OnceCell<(LocaleResourceCache, RebuildStats)>,
}

impl ProjectContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let start_dir = common_args.root.clone().unwrap_or_else(|| PathBuf::from("."));
        // Absolute, so the config search can walk above the working directory.
        let start_dir = start_dir
            .canonicalize()
            .with_context(|| format!("Invalid project root: {}", start_dir.display()))?;

        let config_result = load_config(&start_dir)?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .cocolensrc.json found, using default configuration");
        }

        let mut config = config_result.config;

        // CLI > config file > defaults
        if let Some(ref locale) = common_args.locale {
            config.locale = Some(locale.clone());
        }
        if !common_args.resource_roots.is_empty() {
            config.resource_roots = common_args.resource_roots.clone();
        }

        let locale = match config.locale.as_deref() {
            Some(tag) => Locale::parse(tag),
            None => Locale::from_env(),
        };
        tracing::debug!(locale = %locale, root = %config_result.base_dir.display(), "project context");

        Ok(Self {
            config,
            root_dir: config_result.base_dir,
            locale,
            verbose,
            cancel: CancellationToken::new(),
            cache: OnceCell::new(),
        })
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// The string table cache, scanning resource roots the first time.
    pub fn resource_cache(&self) -> Result<&LocaleResourceCache> {
        Ok(&self.cache_with_stats()?.0)
    }

    pub fn rebuild_stats(&self) -> Result<RebuildStats> {
        Ok(self.cache_with_stats()?.1)
    }

    fn cache_with_stats(&self) -> Result<&(LocaleResourceCache, RebuildStats)> {
        if let Some(cached) = self.cache.get() {
            return Ok(cached);
        }

        let resources = find_resource_files(
            &self.root_dir,
            &self.config.resource_roots,
            &self.config.ignores,
        );
        let cache = LocaleResourceCache::new(self.locale.clone());
        let stats = cache.rebuild(resources.files, &self.cancel)?;
        tracing::debug!(
            directories = stats.directories,
            files = stats.files,
            loaded = stats.loaded,
            "string tables built"
        );

        Ok(self.cache.get_or_init(|| (cache, stats)))
    }

    pub fn document_kind(&self, path: &Path) -> Option<DocumentKind> {
        DocumentKind::from_path(
            path,
            &self.config.source_extensions,
            &self.config.layout_extensions,
        )
    }

    /// Source and layout files to process.
    ///
    /// With no explicit paths the configured includes are scanned. Explicit
    /// files are taken as given; directories are scanned.
    pub fn files(&self, paths: &[PathBuf]) -> ScanResult {
        let extensions: Vec<String> = self
            .config
            .source_extensions
            .iter()
            .chain(&self.config.layout_extensions)
            .cloned()
            .collect();

        if paths.is_empty() {
            return scan_files(
                &self.root_dir,
                &self.config.includes,
                &self.config.ignores,
                &extensions,
            );
        }

        let mut result = ScanResult {
            files: BTreeSet::new(),
            skipped_count: 0,
        };
        for path in paths {
            if path.is_dir() {
                let scanned = scan_files(path, &[], &self.config.ignores, &extensions);
                result.files.extend(scanned.files);
                result.skipped_count += scanned.skipped_count;
            } else if path.is_file() {
                result.files.insert(path.clone());
            } else {
                tracing::warn!(path = %path.display(), "no such file or directory");
                result.skipped_count += 1;
            }
        }
        result
    }

    /// `path` relative to the project root, for display.
    pub fn display_path(&self, path: &Path) -> String {
        let relative = path
            .strip_prefix(&self.root_dir)
            .ok()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(path);
        relative
            .to_string_lossy()
            .trim_start_matches("./")
            .to_string()
    }
}
