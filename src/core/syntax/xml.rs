//! Attribute values of XML layout files, exposed as string literals.

use std::sync::LazyLock;

use regex::Regex;

use super::{Span, SyntaxElement};

static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s[A-Za-z_][\w:.\-]*\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Every attribute value as a [`SyntaxElement::StringLiteral`].
///
/// The span covers the quotes, like the value node of an XML tree would.
pub fn scan_attributes(source: &str) -> Vec<SyntaxElement> {
    ATTRIBUTE_REGEX
        .captures_iter(source)
        .filter_map(|captures| {
            let value = captures.get(1).or_else(|| captures.get(2))?;
            let span = Span::new(value.start() - 1, value.end() + 1);
            Some(SyntaxElement::StringLiteral {
                text: decode_entities(value.as_str()),
                span,
                fold_span: span,
            })
        })
        .collect()
}

fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
