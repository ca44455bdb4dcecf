//! Infer display dimensions, pixel density, and aspect ratio from any partial
//! set of measurements.
//!
//! Pure arithmetic with no I/O. `no_std` compatible.
//!
//! # Modules
//!
//! - [`math`]: Geometry identities and continued-fraction ratio simplification
//! - [`properties`]: The nine quantities and the sparse record that holds them
//! - [`screen`]: Lazy, rule-driven inference over a measurement record
//! - `query`: `key=value` query string parsing (feature `query`)
//!
//! # Example
//!
//! ```
//! use screencalc::{Screen, ScreenProperties};
//!
//! let laptop = Screen::from_properties(
//!     ScreenProperties::new()
//!         .pixel_width(1366.0)
//!         .pixel_height(768.0)
//!         .diagonal_size(15.6),
//! )
//! .unwrap();
//!
//! assert_eq!(laptop.pixel_density().map(f64::round), Some(100.0));
//! assert_eq!(laptop.string_ratio().as_deref(), Some("~16:9"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod math;
pub mod properties;
pub mod screen;

#[cfg(feature = "query")]
pub mod query;

pub use error::ScreenError;
pub use math::{Fraction, Precision, simplest_fraction};
pub use properties::{Quantity, ScreenProperties};
pub use screen::{Screen, SimpleRatio};
