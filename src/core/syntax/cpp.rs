//! C and C++ adapter built on tree-sitter.

use anyhow::{Context, Result, anyhow};
use tree_sitter::{Node, Parser, Tree};

use super::{ArgumentExpr, Initializer, Span, SyntaxElement};
use crate::core::values::LiteralArgument;

/// Elements found in one C/C++ source file.
#[derive(Debug, Default)]
pub struct ParsedSource {
    pub elements: Vec<SyntaxElement>,
    /// The tree contains error nodes; elements outside them are still reported.
    pub has_errors: bool,
}

fn cpp_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_cpp::LANGUAGE.into())
        .context("Failed to load the C++ grammar")?;
    Ok(parser)
}

fn parse_tree(source: &str) -> Result<Tree> {
    cpp_parser()?
        .parse(source, None)
        .ok_or_else(|| anyhow!("C++ parser produced no syntax tree"))
}

pub fn parse_cpp(source: &str) -> Result<ParsedSource> {
    let tree = parse_tree(source)?;
    let root = tree.root_node();

    let mut collector = Collector {
        source,
        elements: Vec::new(),
    };
    collector.visit(root);

    Ok(ParsedSource {
        elements: collector.elements,
        has_errors: root.has_error(),
    })
}

/// Whether `text` parses as a standalone expression.
pub fn is_valid_expression(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }

    let snippet = format!("int __cocolens_value = {};", text);
    match parse_tree(&snippet) {
        Ok(tree) => {
            let root = tree.root_node();
            !root.has_error() && root.named_child_count() == 1
        }
        Err(_) => false,
    }
}

/// Type a C++ numeric literal has, judged from its spelling.
pub fn literal_type(text: &str) -> &'static str {
    let lower: String = text
        .chars()
        .filter(|c| *c != '\'')
        .collect::<String>()
        .to_ascii_lowercase();

    let is_hex = lower.starts_with("0x");
    let is_float = if is_hex {
        lower.contains('p')
    } else {
        lower.contains('.') || lower.contains('e')
    };

    if is_float {
        return match lower.chars().last() {
            Some('f') => "float",
            Some('l') => "long double",
            _ => "double",
        };
    }

    let digits_end = lower
        .trim_end_matches(|c| matches!(c, 'u' | 'l' | 'z'))
        .len();
    match &lower[digits_end..] {
        "" => "int",
        "u" => "unsigned int",
        "l" => "long",
        "ul" | "lu" => "unsigned long",
        "ll" => "long long",
        "ull" | "llu" => "unsigned long long",
        "uz" | "zu" => "size_t",
        _ => "long long",
    }
}

/// Upper-case identifiers are treated as macros (`TR`, `LOCALIZED_TEXT`).
fn is_macro_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase())
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

fn span_of(node: Node) -> Span {
    Span::new(node.start_byte(), node.end_byte())
}

fn unescape(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escape) = chars.next() else {
            out.push('\\');
            break;
        };
        match escape {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'v' => out.push('\u{0B}'),
            // \x takes every following hex digit, octal at most three digits.
            'x' => {
                let mut value: u32 = 0;
                let mut digits = 0;
                while let Some(digit) = chars.peek().and_then(|c| c.to_digit(16)) {
                    value = value.saturating_mul(16).saturating_add(digit);
                    digits += 1;
                    chars.next();
                }
                if digits == 0 {
                    out.push('x');
                } else {
                    out.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
            }
            '0'..='7' => {
                let mut value = escape.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            'u' | 'U' => {
                let width = if escape == 'u' { 4 } else { 8 };
                let hex: String = chars.clone().take(width).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == width => {
                        out.push(decoded);
                        for _ in 0..width {
                            chars.next();
                        }
                    }
                    _ => out.push(escape),
                }
            }
            other => out.push(other),
        }
    }

    out
}

struct Collector<'s> {
    source: &'s str,
    elements: Vec<SyntaxElement>,
}

impl<'s> Collector<'s> {
    fn text(&self, node: Node) -> &'s str {
        self.source
            .get(node.start_byte()..node.end_byte())
            .unwrap_or_default()
    }

    fn visit(&mut self, node: Node) {
        match node.kind() {
            "call_expression" => self.call_expression(node),
            "compound_literal_expression" => self.compound_literal(node),
            "declaration" => self.declaration(node),
            "field_declaration" => self.field_declaration(node),
            "string_literal" => self.string_literal(node),
            _ => {}
        }

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.visit(child);
        }
    }

    /// Last segment of a (possibly qualified or templated) type or callee name.
    fn type_name(&self, node: Node) -> Option<String> {
        match node.kind() {
            "identifier" | "type_identifier" => Some(self.text(node).to_string()),
            "qualified_identifier" | "template_type" | "template_function" => {
                self.type_name(node.child_by_field_name("name")?)
            }
            _ => None,
        }
    }

    fn arguments(&self, list: Node) -> Vec<ArgumentExpr> {
        let mut cursor = list.walk();
        list.named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .map(|child| {
                let text = self.text(child);
                if child.kind() == "number_literal" {
                    ArgumentExpr::Literal(LiteralArgument::new(
                        literal_type(text),
                        text,
                        span_of(child),
                    ))
                } else {
                    ArgumentExpr::Other {
                        text: text.to_string(),
                        span: span_of(child),
                    }
                }
            })
            .collect()
    }

    fn initializer(&self, value: Node) -> Option<Initializer> {
        let arguments = self.arguments(value);
        let span = span_of(value);
        match value.kind() {
            "argument_list" => Some(Initializer::Arguments { arguments, span }),
            "initializer_list" => Some(Initializer::List { arguments, span }),
            _ => None,
        }
    }

    fn call_expression(&mut self, node: Node) {
        let (Some(function), Some(arguments)) = (
            node.child_by_field_name("function"),
            node.child_by_field_name("arguments"),
        ) else {
            return;
        };
        let Some(type_name) = self.type_name(function) else {
            return;
        };

        let arguments = self.arguments(arguments);
        self.elements.push(SyntaxElement::CallExpression {
            type_name,
            arguments,
            span: span_of(node),
        });
    }

    /// `Color3B{1, 2, 3}` folds like a constructor call.
    fn compound_literal(&mut self, node: Node) {
        let (Some(ty), Some(value)) = (
            node.child_by_field_name("type"),
            node.child_by_field_name("value"),
        ) else {
            return;
        };
        let Some(type_name) = self.type_name(ty) else {
            return;
        };
        if value.kind() != "initializer_list" {
            return;
        }

        let arguments = self.arguments(value);
        self.elements.push(SyntaxElement::CallExpression {
            type_name,
            arguments,
            span: span_of(node),
        });
    }

    fn declaration(&mut self, node: Node) {
        let Some(type_name) = node
            .child_by_field_name("type")
            .and_then(|ty| self.type_name(ty))
        else {
            return;
        };

        let mut cursor = node.walk();
        let declarators: Vec<Node> = node
            .children_by_field_name("declarator", &mut cursor)
            .filter(|d| d.kind() == "init_declarator")
            .collect();

        for declarator in declarators {
            let initializer = declarator
                .child_by_field_name("value")
                .and_then(|value| self.initializer(value));
            self.elements.push(SyntaxElement::Declarator {
                type_name: type_name.clone(),
                initializer,
                span: span_of(declarator),
            });
        }
    }

    /// Class members with a default member initializer.
    fn field_declaration(&mut self, node: Node) {
        let Some(type_name) = node
            .child_by_field_name("type")
            .and_then(|ty| self.type_name(ty))
        else {
            return;
        };
        let (Some(declarator), Some(value)) = (
            node.child_by_field_name("declarator"),
            node.child_by_field_name("default_value"),
        ) else {
            return;
        };

        self.elements.push(SyntaxElement::Declarator {
            type_name,
            initializer: self.initializer(value),
            span: Span::new(declarator.start_byte(), value.end_byte()),
        });
    }

    fn string_literal(&mut self, node: Node) {
        // Prefixed literals (L"", u"", u8"") are not plain char arrays.
        let text = self.text(node);
        let Some(inner) = text
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        else {
            return;
        };
        if node
            .parent()
            .is_some_and(|parent| parent.kind() == "concatenated_string")
        {
            return;
        }

        let span = span_of(node);
        self.elements.push(SyntaxElement::StringLiteral {
            text: unescape(inner),
            span,
            fold_span: self.macro_call_span(node).unwrap_or(span),
        });
    }

    /// Span of `MACRO("literal")` when the literal is the macro's only argument.
    fn macro_call_span(&self, literal: Node) -> Option<Span> {
        let list = literal
            .parent()
            .filter(|parent| parent.kind() == "argument_list")?;
        if list.named_child_count() != 1 {
            return None;
        }
        let call = list
            .parent()
            .filter(|parent| parent.kind() == "call_expression")?;
        let function = call
            .child_by_field_name("function")
            .filter(|function| function.kind() == "identifier")?;

        is_macro_name(self.text(function)).then(|| span_of(call))
    }
}
