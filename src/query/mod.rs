//! Query string parsing into a measurement record.
//!
//! Parses strings like `?w=1920&h=1080&diagonal=24` into
//! [`ScreenProperties`]. Keys are case-insensitive and have short aliases;
//! `resolution=1920x1080` sets both pixel sides, and `ratio` accepts `16:9`.
//!
//! # Example
//!
//! ```
//! use screencalc::query;
//!
//! let result = query::parse("resolution=2048x1536&diag=9.7");
//! assert!(result.warnings.is_empty());
//!
//! let screen = query::screen("resolution=2048x1536&diag=9.7").unwrap();
//! assert_eq!(screen.pixel_density().map(f64::round), Some(264.0));
//! ```
//!
//! # Strictness
//!
//! [`parse`] never fails; problems come back as [`ParseWarning`]s and the
//! offending pair is skipped. [`ParseResult::into_properties`] and
//! [`screen`] turn the first warning about an unknown key or unreadable value
//! into an error. Domain checks (positive, whole pixels) happen when the
//! record reaches a [`Screen`].

mod parse;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ScreenError;
use crate::properties::{Quantity, ScreenProperties};
use crate::screen::Screen;

/// Result of parsing a query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Values that parsed.
    pub properties: ScreenProperties,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

impl ParseResult {
    /// Properties, or an error for the first unknown key or unreadable value.
    ///
    /// Duplicate keys are not errors (last value wins).
    pub fn into_properties(self) -> Result<ScreenProperties, ScreenError> {
        for warning in &self.warnings {
            match warning {
                ParseWarning::KeyNotRecognized { .. } => {
                    return Err(ScreenError::UnknownProperty);
                }
                ParseWarning::ValueInvalid { key, .. } => {
                    return Err(ScreenError::Unparsable(*key));
                }
                ParseWarning::DuplicateKey { .. } => {}
            }
        }
        Ok(self.properties)
    }
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A quantity appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// The key names no quantity.
    KeyNotRecognized { key: String, value: String },
    /// The key was recognized but its value could not be parsed.
    ValueInvalid {
        key: Quantity,
        value: String,
        reason: &'static str,
    },
}

/// Parse a query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (properties, warnings) = parse::parse_query(query);
    ParseResult {
        properties,
        warnings,
    }
}

/// Strictly parse a query string and build a validated [`Screen`].
pub fn screen(query: &str) -> Result<Screen, ScreenError> {
    Screen::from_properties(parse(query).into_properties()?)
}
