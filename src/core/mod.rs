//! Core analysis engine.
//!
//! Two independent pipelines live here:
//!
//! - `values`: recognizes cocos value types (colors, vectors, sizes) whose
//!   constructor arguments are all numeric literals, and renders them.
//! - `strings`: resolves string IDs against `.strings` resource tables with
//!   locale fallback.
//!
//! `syntax` is the boundary to parsed source code, `folding` turns both
//! pipelines into editor-style fold regions and annotations. `document` and
//! `context` tie them to files on disk.

pub mod cancel;
pub mod context;
pub mod document;
pub mod folding;
pub mod scanner;
pub mod strings;
pub mod syntax;
pub mod values;

pub use cancel::{CancellationToken, Cancelled};
pub use folding::{Annotation, FoldKind, FoldRegion};
pub use strings::{LocaleResourceCache, StringTable};
pub use syntax::{ArgumentExpr, Initializer, SyntaxElement, ValueMatch, classify_and_extract};
pub use values::{Color, LiteralArgument, LiteralArgumentList, ValueKind, format_value};
