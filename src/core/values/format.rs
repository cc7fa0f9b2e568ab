use std::fmt::Write as _;

use super::{LiteralArgument, ValueKind};

/// Why a literal list could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("{kind} takes {expected} arguments, got {actual}")]
    Arity {
        kind: ValueKind,
        expected: &'static str,
        actual: usize,
    },
    #[error("'{0}' is not a base-10 integer")]
    InvalidInteger(String),
    #[error("'{0}' is not a floating point number")]
    InvalidFloat(String),
    #[error("color channel {0} is outside 0..=255")]
    ChannelOutOfRange(i32),
}

/// Renders a value for display, or `None` when it cannot be rendered.
///
/// - Color: `#rrggbb`, with ` aa` appended for a fourth channel
/// - Vector: `[x; y; ...]`
/// - Size: `w × h`, or an empty string for any arity other than 2.
///
/// Wrong arity is an ordinary miss. Literals that fail to parse are logged
/// and also yield `None`.
pub fn format_value(kind: ValueKind, arguments: &[LiteralArgument]) -> Option<String> {
    match try_format_value(kind, arguments) {
        Ok(text) => Some(text),
        Err(FormatError::Arity { .. }) => None,
        Err(err) => {
            tracing::debug!(%kind, error = %err, "cannot format literal arguments");
            None
        }
    }
}

/// Like [`format_value`] but reports the reason for a miss.
pub fn try_format_value(
    kind: ValueKind,
    arguments: &[LiteralArgument],
) -> Result<String, FormatError> {
    match kind {
        ValueKind::Color => format_color(arguments),
        ValueKind::Vector => format_vector(arguments),
        ValueKind::Size => format_size(arguments),
    }
}

fn format_color(arguments: &[LiteralArgument]) -> Result<String, FormatError> {
    if !matches!(arguments.len(), 3 | 4) {
        return Err(FormatError::Arity {
            kind: ValueKind::Color,
            expected: "3 or 4",
            actual: arguments.len(),
        });
    }

    let mut out = String::with_capacity(10);
    out.push('#');
    for (index, argument) in arguments.iter().enumerate() {
        let channel = parse_int(&argument.raw_text)?;
        if !(0..=255).contains(&channel) {
            return Err(FormatError::ChannelOutOfRange(channel));
        }
        // Alpha is set apart from the rgb digits.
        if index == 3 {
            out.push(' ');
        }
        let _ = write!(out, "{:02x}", channel);
    }

    Ok(out)
}

fn format_vector(arguments: &[LiteralArgument]) -> Result<String, FormatError> {
    if arguments.is_empty() {
        return Err(FormatError::Arity {
            kind: ValueKind::Vector,
            expected: "at least 1",
            actual: 0,
        });
    }

    let components = arguments
        .iter()
        .map(|argument| parse_float(&argument.raw_text).map(render_float))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!("[{}]", components.join("; ")))
}

fn format_size(arguments: &[LiteralArgument]) -> Result<String, FormatError> {
    // Any other arity renders as nothing rather than failing.
    let [width, height] = arguments else {
        return Ok(String::new());
    };

    let width = parse_float(&width.raw_text)?;
    let height = parse_float(&height.raw_text)?;

    Ok(format!(
        "{} \u{00D7} {}",
        render_float(width),
        render_float(height)
    ))
}

pub(crate) fn parse_int(text: &str) -> Result<i32, FormatError> {
    text.parse::<i32>()
        .map_err(|_| FormatError::InvalidInteger(text.to_string()))
}

/// Parses a float literal, accepting one leading sign and one trailing
/// `f`/`d` type suffix.
fn parse_float(text: &str) -> Result<f32, FormatError> {
    let digits = text
        .strip_suffix(['f', 'F', 'd', 'D'])
        .unwrap_or(text);
    let unsigned = digits.strip_prefix(['+', '-']).unwrap_or(digits);

    // Rust also accepts "inf"/"nan" which are not literals.
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(FormatError::InvalidFloat(text.to_string()));
    }

    digits
        .parse::<f32>()
        .map_err(|_| FormatError::InvalidFloat(text.to_string()))
}

/// Shortest round-tripping form, always with a fractional part (`10.0`, `2.5`).
fn render_float(value: f32) -> String {
    format!("{:?}", value)
}
