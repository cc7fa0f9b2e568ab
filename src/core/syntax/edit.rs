use super::{Span, cpp::is_valid_expression};
use crate::core::values::{LiteralArgument, LiteralEditor};

/// An in-memory source text that literals can be rewritten in.
///
/// Spans handed to [`LiteralEditor::replace_literal`] refer to the text as it
/// was parsed; earlier replacements shift later spans automatically.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    text: String,
    edits: Vec<AppliedEdit>,
}

#[derive(Debug, Clone, Copy)]
struct AppliedEdit {
    original: Span,
    delta: isize,
}

impl SourceBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            edits: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn edit_count(&self) -> usize {
        self.edits.len()
    }

    pub fn is_modified(&self) -> bool {
        !self.edits.is_empty()
    }

    /// Where `original` lives now, or `None` if an earlier edit overlapped it.
    fn current_span(&self, original: Span) -> Option<Span> {
        let mut shift: isize = 0;
        for edit in &self.edits {
            if edit.original.end <= original.start {
                shift += edit.delta;
            } else if edit.original.start < original.end {
                return None;
            }
        }

        let start = usize::try_from(original.start as isize + shift).ok()?;
        Some(Span::new(start, start + original.len()))
    }
}

impl LiteralEditor for SourceBuffer {
    fn replace_literal(&mut self, literal: &LiteralArgument, text: &str) -> bool {
        if !is_valid_expression(text) {
            tracing::debug!(replacement = text, "replacement is not an expression, skipped");
            return false;
        }
        let Some(span) = self.current_span(literal.span) else {
            return false;
        };
        // The buffer must still hold the literal that was parsed.
        if self.text.get(span.start..span.end) != Some(literal.raw_text.as_str()) {
            return false;
        }

        self.text.replace_range(span.start..span.end, text);
        self.edits.push(AppliedEdit {
            original: literal.span,
            delta: text.len() as isize - literal.span.len() as isize,
        });
        true
    }
}
