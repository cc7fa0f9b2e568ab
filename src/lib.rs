//! Cocolens - literal value previews and string lookups for cocos2d-x projects
//!
//! Cocolens is a CLI tool and library that shows what cocos2d-x C++ code means
//! at a glance: `Color3B(255, 0, 128)` becomes `#ff0080`, `Vec2(1.0f, 2.5f)`
//! becomes `[1.0; 2.5]`, and string IDs like `"MENU_START"` are replaced by their
//! localized text from `.strings` resource tables.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Value engine, string tables, syntax adapters and folding

pub mod cli;
pub mod config;
pub mod core;
