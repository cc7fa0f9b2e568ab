use std::fmt;

use serde::Serialize;

/// Semantic category of a recognized cocos type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Color,
    Vector,
    Size,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Color => write!(f, "color"),
            ValueKind::Vector => write!(f, "vector"),
            ValueKind::Size => write!(f, "size"),
        }
    }
}

/// Maps a type name to its value kind.
///
/// Exact, case-sensitive match; qualified names must be reduced to their last
/// segment by the caller.
pub fn classify(type_name: &str) -> Option<ValueKind> {
    match type_name {
        "Color3B" | "Color4B" => Some(ValueKind::Color),
        "Vec2" | "Vec3" | "Vec4" | "Point" => Some(ValueKind::Vector),
        "Size" => Some(ValueKind::Size),
        _ => None,
    }
}
