//! Fold regions and annotations computed from syntax elements.
//!
//! These are what an editor shows in place of source text: a formatted value
//! for literal colors/vectors/sizes, the localized text for string IDs.

use serde::Serialize;

use super::{
    cancel::{CancellationToken, Cancelled},
    strings::{LocaleResourceCache, quote, shorten},
    syntax::{Span, SyntaxElement, classify_and_extract},
    values::{ValueKind, format_value},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FoldKind {
    Value { kind: ValueKind },
    String { id: String },
}

/// A span of source text to be displayed as `placeholder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoldRegion {
    pub span: Span,
    pub placeholder: String,
    #[serde(flatten)]
    pub kind: FoldKind,
}

/// Full localized text attached to a string ID literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub span: Span,
    pub id: String,
    pub text: String,
}

/// Folds for every recognized value whose arguments are all literals.
///
/// Values without a renderable placeholder (including the empty placeholder
/// of a malformed `Size`) are skipped.
pub fn value_fold_regions(
    elements: &[SyntaxElement],
    cancel: &CancellationToken,
) -> Result<Vec<FoldRegion>, Cancelled> {
    let mut regions = Vec::new();

    for element in elements {
        cancel.check()?;

        let Some(matched) = classify_and_extract(element) else {
            continue;
        };
        let Some(placeholder) = format_value(matched.kind, &matched.arguments) else {
            continue;
        };
        if placeholder.is_empty() || matched.fold_span.is_empty() {
            continue;
        }

        regions.push(FoldRegion {
            span: matched.fold_span,
            placeholder,
            kind: FoldKind::Value { kind: matched.kind },
        });
    }

    Ok(regions)
}

/// Folds string ID literals into their shortened, quoted text.
pub fn string_fold_regions(
    elements: &[SyntaxElement],
    cache: &LocaleResourceCache,
    max_width: usize,
    cancel: &CancellationToken,
) -> Result<Vec<FoldRegion>, Cancelled> {
    let mut regions = Vec::new();

    for element in elements {
        cancel.check()?;

        let SyntaxElement::StringLiteral {
            text, fold_span, ..
        } = element
        else {
            continue;
        };
        if fold_span.is_empty() {
            continue;
        }
        let Some(resolved) = cache.lookup(text) else {
            continue;
        };

        regions.push(FoldRegion {
            span: *fold_span,
            placeholder: quote(&shorten(&resolved, max_width)),
            kind: FoldKind::String { id: text.clone() },
        });
    }

    Ok(regions)
}

/// Annotations carrying the complete text of every resolvable string ID.
pub fn string_annotations(
    elements: &[SyntaxElement],
    cache: &LocaleResourceCache,
    cancel: &CancellationToken,
) -> Result<Vec<Annotation>, Cancelled> {
    let mut annotations = Vec::new();

    for element in elements {
        cancel.check()?;

        if let SyntaxElement::StringLiteral { text, span, .. } = element
            && !span.is_empty()
            && let Some(resolved) = cache.lookup(text)
        {
            annotations.push(Annotation {
                span: *span,
                id: text.clone(),
                text: resolved,
            });
        }
    }

    Ok(annotations)
}

/// Value and string folds together, ordered by position.
pub fn fold_regions(
    elements: &[SyntaxElement],
    cache: &LocaleResourceCache,
    max_width: usize,
    cancel: &CancellationToken,
) -> Result<Vec<FoldRegion>, Cancelled> {
    let mut regions = value_fold_regions(elements, cancel)?;
    regions.extend(string_fold_regions(elements, cache, max_width, cancel)?);
    regions.sort_by_key(|region| (region.span.start, region.span.end));
    Ok(regions)
}
