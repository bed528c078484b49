//! Culture-aware name formatting.
//!
//! This module provides the complete name formatting pipeline:
//! - Script classification (Latin vs CJK) for name part sequences
//! - Full-name formatting under either convention
//! - Compact initials formatting under either convention
//!
//! The module is organized into focused components:
//! - `script`: the classification heuristic and the [`Script`] type
//! - `latin`: space-joined given-name(s)-then-surname formatting
//! - `cjk`: surname-first concatenation formatting
//! - `core`: validation and dispatch entry points

// Submodules
mod cjk;
mod core;
mod latin;
mod script;

// Re-export the public entry points and strategy helpers
pub use self::core::{format_initials, format_name};

pub use script::{Script, classify_parts, contains_latin_chars};

pub use cjk::{format_cjk_initials, format_cjk_name};
pub use latin::{format_latin_initials, format_latin_name};
