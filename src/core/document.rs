//! One source or layout file, parsed into syntax elements.

use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use serde::Serialize;

use super::{
    cancel::{CancellationToken, Cancelled},
    folding::{FoldKind, FoldRegion, fold_regions, string_annotations},
    strings::LocaleResourceCache,
    syntax::{LineIndex, SyntaxElement, cpp::parse_cpp, xml::scan_attributes},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// C/C++ source, parsed into calls, declarators and string literals.
    Source,
    /// XML-like layout; only attribute values are considered.
    Layout,
}

impl DocumentKind {
    pub fn from_path(path: &Path, source_extensions: &[String], layout_extensions: &[String]) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        let matches = |list: &[String]| list.iter().any(|e| e.eq_ignore_ascii_case(ext));

        if matches(source_extensions) {
            Some(Self::Source)
        } else if matches(layout_extensions) {
            Some(Self::Layout)
        } else {
            None
        }
    }
}

pub struct Document {
    pub path: PathBuf,
    pub kind: DocumentKind,
    pub content: String,
    pub elements: Vec<SyntaxElement>,
    pub has_errors: bool,
}

impl Document {
    pub fn load(path: &Path, kind: DocumentKind) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        Self::parse(path, kind, content)
    }

    pub fn parse(path: &Path, kind: DocumentKind, content: String) -> Result<Self> {
        let (elements, has_errors) = match kind {
            DocumentKind::Source => {
                let parsed = parse_cpp(&content)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
                (parsed.elements, parsed.has_errors)
            }
            DocumentKind::Layout => (scan_attributes(&content), false),
        };

        if has_errors {
            tracing::debug!(file = %path.display(), "syntax errors; folding what parsed");
        }

        Ok(Self {
            path: path.to_path_buf(),
            kind,
            content,
            elements,
            has_errors,
        })
    }

    /// Fold regions with their 1-based positions, in source order.
    pub fn fold(
        &self,
        cache: &LocaleResourceCache,
        max_width: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<LocatedFold>, Cancelled> {
        let index = LineIndex::new(&self.content);
        let mut full_texts = string_annotations(&self.elements, cache, cancel)?.into_iter();

        let regions = fold_regions(&self.elements, cache, max_width, cancel)?;
        let mut located = Vec::with_capacity(regions.len());
        for region in regions {
            let (line, column) = index.position(&self.content, region.span.start);
            let text = match &region.kind {
                FoldKind::String { id } => full_texts
                    .by_ref()
                    .find(|annotation| &annotation.id == id)
                    .map(|annotation| annotation.text),
                FoldKind::Value { .. } => None,
            };
            located.push(LocatedFold {
                line,
                column,
                source: self.content[region.span.start..region.span.end].to_string(),
                region,
                text,
            });
        }
        Ok(located)
    }
}

/// A fold region placed in its file.
#[derive(Debug, Clone, Serialize)]
pub struct LocatedFold {
    pub line: usize,
    pub column: usize,
    /// The source text the placeholder stands in for.
    pub source: String,
    #[serde(flatten)]
    pub region: FoldRegion,
    /// Complete localized text, for string folds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl LocatedFold {
    pub fn is_value(&self) -> bool {
        matches!(self.region.kind, FoldKind::Value { .. })
    }
}
