//! Recognition and rendering of literal cocos values.
//!
//! The pipeline is: [`classify`] a type name, [`extract`] the constructor
//! arguments when all of them are numeric literals, then [`format_value`]
//! them into a display string. [`write_color`] goes the other way for colors.

mod color;
mod format;
mod kind;
mod literal;

pub use color::{Color, LiteralEditor, color_from_arguments, write_color, write_int};
pub use format::{FormatError, format_value, try_format_value};
pub use kind::{ValueKind, classify};
pub use literal::{LiteralArgument, LiteralArgumentList, extract};
