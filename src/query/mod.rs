//! Layout configuration from URL query strings.
//!
//! Parses strings like `?orientation=portrait&maxwidth=960&aspect=4:3` into
//! [`Instructions`], which then overlay a base [`LayoutConfig`] and
//! [`SettleConfig`]. Bad input never fails the parse: it is skipped and
//! reported as a [`ParseWarning`].
//!
//! # Example
//!
//! ```
//! use zenstage::{LayoutConfig, Orientation, query};
//!
//! let result = query::parse("orientation=portrait&maxwidth=960&aspect=4:3");
//! assert!(result.warnings.is_empty());
//!
//! let config = result.instructions.to_config(LayoutConfig::default());
//! assert_eq!(config.logical_orientation, Orientation::Portrait);
//! assert_eq!(config.max_width, 960.0);
//! assert_eq!(config.aspect_landscape, 4.0 / 3.0);
//! assert_eq!(config.aspect_portrait, 3.0 / 4.0);
//! ```
//!
//! # Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `orientation`, `mode` | `landscape` / `portrait` (or `l` / `p`) |
//! | `maxwidth`, `maxheight` | positive pixels |
//! | `aspect` | landscape ratio; portrait becomes its reciprocal |
//! | `aspect.landscape`, `aspect.portrait` | one ratio each |
//! | `settle`, `debounce` | settle delay in milliseconds |
//! | `settle.policy` | `overlap` / `coalesce` |
//!
//! Ratios are `16:9`, `16/9` or a decimal. Keys are case-insensitive.

mod convert;
pub mod instructions;
mod parse;

pub use instructions::Instructions;

use alloc::string::String;
use alloc::vec::Vec;

use crate::constraint::LayoutConfig;
use crate::debounce::SettleConfig;

/// Result of parsing a query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed settings.
    pub instructions: Instructions,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

impl ParseResult {
    /// Parsed settings over [`LayoutConfig::default`].
    pub fn config(&self) -> LayoutConfig {
        self.instructions.to_config(LayoutConfig::default())
    }

    /// Parsed settings over [`SettleConfig::default`].
    pub fn settle(&self) -> SettleConfig {
        self.instructions.to_settle(SettleConfig::default())
    }
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (instructions, warnings) = parse::parse_query(query);
    ParseResult {
        instructions,
        warnings,
    }
}
