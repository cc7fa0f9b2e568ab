use std::ops::Deref;

use crate::core::syntax::{ArgumentExpr, Span};

/// One constructor argument that is a numeric literal.
///
/// `span` locates the literal in the source it was parsed from and is what
/// writers use to replace it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralArgument {
    /// Type of the literal as the language types it (`int`, `float`, `double`, ...).
    pub type_name: String,
    /// The literal exactly as written, suffixes included (`255`, `1.5f`).
    pub raw_text: String,
    pub span: Span,
}

impl LiteralArgument {
    pub fn new(type_name: impl Into<String>, raw_text: impl Into<String>, span: Span) -> Self {
        Self {
            type_name: type_name.into(),
            raw_text: raw_text.into(),
            span,
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self.type_name.as_str(), "int" | "float")
    }
}

/// Fully resolved argument list: every slot is a numeric literal.
///
/// There is no way to build a partially resolved list; [`extract`] returns
/// `None` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralArgumentList {
    arguments: Vec<LiteralArgument>,
}

impl Deref for LiteralArgumentList {
    type Target = [LiteralArgument];

    fn deref(&self) -> &Self::Target {
        &self.arguments
    }
}

/// Collects the arguments if, and only if, every one of them is an `int` or
/// `float` literal.
///
/// A single variable reference, nested call or differently typed literal
/// anywhere in the list rejects the whole list.
pub fn extract(arguments: &[ArgumentExpr]) -> Option<LiteralArgumentList> {
    let mut literals = Vec::with_capacity(arguments.len());

    for argument in arguments {
        match argument {
            ArgumentExpr::Literal(literal) if literal.is_numeric() => {
                literals.push(literal.clone());
            }
            _ => return None,
        }
    }

    Some(LiteralArgumentList {
        arguments: literals,
    })
}
