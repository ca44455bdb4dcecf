//! The measurement set: nine optional quantities describing one display.
//!
//! [`ScreenProperties`] is a plain record. Nothing here derives anything; the
//! [`Screen`](crate::Screen) engine validates a record on the way in and
//! resolves the missing quantities on demand.
//!
//! # Example
//!
//! ```
//! use screencalc::{Quantity, ScreenProperties};
//!
//! let mut props = ScreenProperties::new()
//!     .pixel_width(2048.0)
//!     .pixel_height(1536.0);
//! props.set_by_name("diagonalSize", 9.7).unwrap();
//!
//! assert_eq!(props.get(Quantity::DiagonalSize), Some(9.7));
//! assert!(props.set_by_name("diagonalSise", 9.7).is_err());
//! ```

use core::fmt;
use core::str::FromStr;

use num_traits::Float;

use crate::error::ScreenError;

/// One of the nine related display quantities.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quantity {
    /// Horizontal resolution in pixels.
    PixelWidth,
    /// Vertical resolution in pixels.
    PixelHeight,
    /// Total number of pixels.
    PixelCount,
    /// Pixels per physical unit (ppi for inches, ppcm for centimetres).
    PixelDensity,
    /// Width divided by height.
    Ratio,
    /// Physical width in the caller's unit.
    PhysicalWidth,
    /// Physical height in the caller's unit.
    PhysicalHeight,
    /// Physical area in square units.
    Area,
    /// Physical diagonal length.
    DiagonalSize,
}

impl Quantity {
    /// All quantities, in record order.
    pub const ALL: [Self; 9] = [
        Self::PixelWidth,
        Self::PixelHeight,
        Self::PixelCount,
        Self::PixelDensity,
        Self::Ratio,
        Self::PhysicalWidth,
        Self::PhysicalHeight,
        Self::Area,
        Self::DiagonalSize,
    ];

    /// Property name as it appears in records and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::PixelWidth => "pixelWidth",
            Self::PixelHeight => "pixelHeight",
            Self::PixelCount => "pixelCount",
            Self::PixelDensity => "pixelDensity",
            Self::Ratio => "ratio",
            Self::PhysicalWidth => "physicalWidth",
            Self::PhysicalHeight => "physicalHeight",
            Self::Area => "area",
            Self::DiagonalSize => "diagonalSize",
        }
    }

    /// Rust field name on [`ScreenProperties`].
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::PixelWidth => "pixel_width",
            Self::PixelHeight => "pixel_height",
            Self::PixelCount => "pixel_count",
            Self::PixelDensity => "pixel_density",
            Self::Ratio => "ratio",
            Self::PhysicalWidth => "physical_width",
            Self::PhysicalHeight => "physical_height",
            Self::Area => "area",
            Self::DiagonalSize => "diagonal_size",
        }
    }

    /// Whether values must be whole numbers.
    pub const fn is_pixel_valued(self) -> bool {
        matches!(self, Self::PixelWidth | Self::PixelHeight | Self::PixelCount)
    }

    pub(crate) const fn bit(self) -> u16 {
        1 << self as u16
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quantity {
    type Err = ScreenError;

    /// Accepts the camelCase property name or the snake_case field name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|q| q.name() == s || q.field_name() == s)
            .ok_or(ScreenError::UnknownProperty)
    }
}

/// Sparse record of known display measurements.
///
/// `None` means unknown. Records are not required to be consistent; a stored
/// ratio need not match stored width and height.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct ScreenProperties {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub pixel_width: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub pixel_height: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub pixel_count: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub pixel_density: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ratio: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub physical_width: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub physical_height: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub area: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub diagonal_size: Option<f64>,
}

impl ScreenProperties {
    /// Empty record: every quantity unknown.
    pub const fn new() -> Self {
        Self {
            pixel_width: None,
            pixel_height: None,
            pixel_count: None,
            pixel_density: None,
            ratio: None,
            physical_width: None,
            physical_height: None,
            area: None,
            diagonal_size: None,
        }
    }

    /// Set horizontal resolution.
    pub fn pixel_width(mut self, value: f64) -> Self {
        self.pixel_width = Some(value);
        self
    }

    /// Set vertical resolution.
    pub fn pixel_height(mut self, value: f64) -> Self {
        self.pixel_height = Some(value);
        self
    }

    /// Set total pixel count.
    pub fn pixel_count(mut self, value: f64) -> Self {
        self.pixel_count = Some(value);
        self
    }

    /// Set pixels per physical unit.
    pub fn pixel_density(mut self, value: f64) -> Self {
        self.pixel_density = Some(value);
        self
    }

    /// Set width / height.
    pub fn ratio(mut self, value: f64) -> Self {
        self.ratio = Some(value);
        self
    }

    /// Set physical width.
    pub fn physical_width(mut self, value: f64) -> Self {
        self.physical_width = Some(value);
        self
    }

    /// Set physical height.
    pub fn physical_height(mut self, value: f64) -> Self {
        self.physical_height = Some(value);
        self
    }

    /// Set physical area.
    pub fn area(mut self, value: f64) -> Self {
        self.area = Some(value);
        self
    }

    /// Set diagonal length.
    pub fn diagonal_size(mut self, value: f64) -> Self {
        self.diagonal_size = Some(value);
        self
    }

    /// Stored value for `quantity`.
    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        *self.slot(quantity)
    }

    /// Replace the stored value for `quantity`.
    pub fn set(&mut self, quantity: Quantity, value: Option<f64>) {
        *self.slot_mut(quantity) = value;
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, quantity: Quantity, value: f64) -> Self {
        self.set(quantity, Some(value));
        self
    }

    /// Set a quantity by its property name (see [`Quantity::from_str`]).
    ///
    /// Unknown names fail with [`ScreenError::UnknownProperty`] so that typos
    /// surface instead of being ignored.
    pub fn set_by_name(&mut self, name: &str, value: f64) -> Result<(), ScreenError> {
        let quantity: Quantity = name.parse()?;
        self.set(quantity, Some(value));
        Ok(())
    }

    /// Known quantities, in record order.
    pub fn known(&self) -> impl Iterator<Item = (Quantity, f64)> + '_ {
        Quantity::ALL
            .into_iter()
            .filter_map(|q| self.get(q).map(|v| (q, v)))
    }

    /// Whether no quantity is known.
    pub fn is_empty(&self) -> bool {
        self.known().next().is_none()
    }

    /// Check every known value against its domain.
    ///
    /// Returns the record with the diagonal normalized: a diagonal that is not
    /// a positive finite number is stored as `0.0` rather than rejected.
    /// Every other quantity must be positive and finite, and pixel-valued
    /// quantities must be whole. The first violation in record order wins.
    pub fn validated(mut self) -> Result<Self, ScreenError> {
        for (quantity, value) in self.known() {
            if quantity == Quantity::DiagonalSize {
                continue;
            }
            if !is_positive(value) {
                return Err(ScreenError::NotPositive(quantity));
            }
            if quantity.is_pixel_valued() && Float::fract(value) != 0.0 {
                return Err(ScreenError::NotInteger(quantity));
            }
        }

        if let Some(diagonal) = self.diagonal_size
            && !is_positive(diagonal)
        {
            log::trace!("diagonalSize {diagonal} is not a positive number, storing 0");
            self.diagonal_size = Some(0.0);
        }
        Ok(self)
    }

    fn slot(&self, quantity: Quantity) -> &Option<f64> {
        match quantity {
            Quantity::PixelWidth => &self.pixel_width,
            Quantity::PixelHeight => &self.pixel_height,
            Quantity::PixelCount => &self.pixel_count,
            Quantity::PixelDensity => &self.pixel_density,
            Quantity::Ratio => &self.ratio,
            Quantity::PhysicalWidth => &self.physical_width,
            Quantity::PhysicalHeight => &self.physical_height,
            Quantity::Area => &self.area,
            Quantity::DiagonalSize => &self.diagonal_size,
        }
    }

    fn slot_mut(&mut self, quantity: Quantity) -> &mut Option<f64> {
        match quantity {
            Quantity::PixelWidth => &mut self.pixel_width,
            Quantity::PixelHeight => &mut self.pixel_height,
            Quantity::PixelCount => &mut self.pixel_count,
            Quantity::PixelDensity => &mut self.pixel_density,
            Quantity::Ratio => &mut self.ratio,
            Quantity::PhysicalWidth => &mut self.physical_width,
            Quantity::PhysicalHeight => &mut self.physical_height,
            Quantity::Area => &mut self.area,
            Quantity::DiagonalSize => &mut self.diagonal_size,
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
