//! Boundary between parsed source code and the value/string engines.
//!
//! Adapters (`cpp`, `xml`) turn source text into a flat list of
//! [`SyntaxElement`]s. The engines only see argument lists, type names and
//! raw literal text, never the underlying syntax tree.

pub mod cpp;
pub mod edit;
pub mod xml;

use serde::Serialize;

use crate::core::values::{LiteralArgument, LiteralArgumentList, ValueKind, classify, extract};

/// Half-open byte range into a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The range without its first and last byte (the delimiters of `(...)` or `{...}`).
    pub const fn inner(&self) -> Self {
        if self.len() < 2 {
            Self::new(self.start, self.start)
        } else {
            Self::new(self.start + 1, self.end - 1)
        }
    }

    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// One argument of a call or initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentExpr {
    Literal(LiteralArgument),
    /// Anything else: identifiers, calls, operators, string literals.
    Other { text: String, span: Span },
}

/// How a declarator is initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initializer {
    /// `Type name(a, b)`
    Arguments { arguments: Vec<ArgumentExpr>, span: Span },
    /// `Type name{a, b}` or `Type name = {a, b}`
    List { arguments: Vec<ArgumentExpr>, span: Span },
}

impl Initializer {
    pub fn arguments(&self) -> &[ArgumentExpr] {
        match self {
            Initializer::Arguments { arguments, .. } | Initializer::List { arguments, .. } => {
                arguments
            }
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Initializer::Arguments { span, .. } | Initializer::List { span, .. } => *span,
        }
    }
}

/// The syntax shapes the engines care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxElement {
    /// `Color3B(255, 0, 0)`; `type_name` is the constructed type.
    CallExpression {
        type_name: String,
        arguments: Vec<ArgumentExpr>,
        span: Span,
    },
    /// `Vec2 position(1, 2);`
    Declarator {
        type_name: String,
        initializer: Option<Initializer>,
        span: Span,
    },
    /// A narrow character string literal, unescaped.
    ///
    /// `fold_span` covers the enclosing one-token macro call when the literal
    /// is its only argument, otherwise the literal itself.
    StringLiteral {
        text: String,
        span: Span,
        fold_span: Span,
    },
}

impl SyntaxElement {
    pub fn span(&self) -> Span {
        match self {
            SyntaxElement::CallExpression { span, .. }
            | SyntaxElement::Declarator { span, .. }
            | SyntaxElement::StringLiteral { span, .. } => *span,
        }
    }
}

/// A recognized value type with fully literal arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueMatch {
    pub kind: ValueKind,
    pub arguments: LiteralArgumentList,
    /// Text a fold of this value should hide.
    pub fold_span: Span,
}

/// Classifies an element and extracts its literal arguments.
///
/// Calls fold as a whole; declarators fold only the inside of their
/// initializer delimiters so the declared name stays visible.
pub fn classify_and_extract(element: &SyntaxElement) -> Option<ValueMatch> {
    match element {
        SyntaxElement::CallExpression {
            type_name,
            arguments,
            span,
        } => Some(ValueMatch {
            kind: classify(type_name)?,
            arguments: extract(arguments)?,
            fold_span: *span,
        }),
        SyntaxElement::Declarator {
            type_name,
            initializer,
            ..
        } => {
            let kind = classify(type_name)?;
            let initializer = initializer.as_ref()?;
            Some(ValueMatch {
                kind,
                arguments: extract(initializer.arguments())?,
                fold_span: initializer.span().inner(),
            })
        }
        SyntaxElement::StringLiteral { .. } => None,
    }
}

/// Byte offset to 1-based line/column lookups.
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(content: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in content.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// 1-based line containing `offset`.
    pub fn line(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// 1-based line and column; the column counts characters, not bytes.
    pub fn position(&self, content: &str, offset: usize) -> (usize, usize) {
        let line = self.line(offset);
        let start = self.line_starts[line - 1];
        let column = content
            .get(start..offset)
            .map_or(offset - start, |prefix| prefix.chars().count());
        (line, column + 1)
    }

    /// Byte offset of a 1-based line/column, if the line exists.
    ///
    /// Columns past the end of the line stop before its line terminator.
    pub fn offset(&self, content: &str, line: usize, column: usize) -> Option<usize> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(content.len());
        let text = content
            .get(start..end)?
            .trim_end_matches('\n')
            .trim_end_matches('\r');
        let skip = column.saturating_sub(1);
        let within = text
            .char_indices()
            .nth(skip)
            .map_or(text.len(), |(i, _)| i);
        Some(start + within)
    }
}
