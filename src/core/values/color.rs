use std::fmt;

use anyhow::{Result, bail};

use super::{LiteralArgument, format::parse_int};

/// An RGBA color read from, or written back to, literal arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`; the leading `#` is optional.
    pub fn parse_hex(text: &str) -> Result<Self> {
        let hex = text.trim().trim_start_matches('#');
        if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("Invalid color '{}': expected #rrggbb or #rrggbbaa", text);
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };

        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

/// Same notation as a rendered color value; opaque colors omit the alpha.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)?;
        if self.alpha != 255 {
            write!(f, " {:02x}", self.alpha)?;
        }
        Ok(())
    }
}

/// Host-side replacement of a single literal.
pub trait LiteralEditor {
    /// Replaces the source text of `literal` with `text`.
    ///
    /// Returns `false`, leaving the source untouched, when `text` does not
    /// form a valid expression.
    fn replace_literal(&mut self, literal: &LiteralArgument, text: &str) -> bool;
}

/// Builds a color from 3 or 4 integer literals (alpha defaults to 255).
///
/// Channels that are not base-10 integers in `0..=255` yield `None`.
pub fn color_from_arguments(arguments: &[LiteralArgument]) -> Option<Color> {
    let channel = |argument: &LiteralArgument| {
        parse_int(&argument.raw_text)
            .ok()
            .and_then(|value| u8::try_from(value).ok())
    };

    match arguments {
        [r, g, b] => Some(Color::rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => Some(Color::rgba(
            channel(r)?,
            channel(g)?,
            channel(b)?,
            channel(a)?,
        )),
        _ => None,
    }
}

/// Writes `value` in decimal into `slot`. Absent slots are a no-op.
pub fn write_int<E: LiteralEditor + ?Sized>(
    editor: &mut E,
    slot: Option<&LiteralArgument>,
    value: i32,
) -> bool {
    match slot {
        Some(literal) => editor.replace_literal(literal, &value.to_string()),
        None => false,
    }
}

/// Writes each channel of `color` into its own slot and returns how many
/// writes were applied.
///
/// The slots are edited one by one; a rejected write leaves the earlier ones
/// in place. Alpha is only written when a fourth slot exists.
pub fn write_color<E: LiteralEditor + ?Sized>(
    editor: &mut E,
    arguments: &[LiteralArgument],
    color: Color,
) -> usize {
    if arguments.len() < 3 {
        return 0;
    }

    let channels = [color.red, color.green, color.blue, color.alpha];
    let mut written = 0;
    for (slot, channel) in arguments.iter().zip(channels) {
        if write_int(editor, Some(slot), i32::from(channel)) {
            written += 1;
        }
    }
    written
}
