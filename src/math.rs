//! Geometry kernel: the identities that relate screen dimensions, plus
//! continued-fraction simplification of aspect ratios.
//!
//! Pure functions over `f64`. No allocation except [`ratio_to_string`],
//! `no_std` compatible (float math goes through [`num_traits::Float`]).
//!
//! # Example
//!
//! ```
//! use screencalc::math::{Fraction, Precision, height_from_ratio_and_diagonal};
//!
//! // A 4:3 panel with a 10" diagonal is 6" tall.
//! let height = height_from_ratio_and_diagonal(4.0 / 3.0, 10.0);
//! assert!((height - 6.0).abs() < 1e-12);
//!
//! let f = Fraction::approximate(1920.0 / 1080.0, Precision::DEFAULT);
//! assert_eq!((f.numerator, f.denominator), (16, 9));
//! ```

use num_traits::Float;

use crate::error::ScreenError;

/// Height of a rectangle from its width/height ratio and diagonal length.
///
/// With `width = ratio * height`, Pythagoras gives
/// `height² · (ratio² + 1) = diagonal²`.
pub fn height_from_ratio_and_diagonal(ratio: f64, diagonal: f64) -> f64 {
    Float::sqrt(diagonal * diagonal / (ratio * ratio + 1.0))
}

/// Height of a rectangle from its ratio and area: `height² · ratio = area`.
pub fn height_from_ratio_and_area(ratio: f64, area: f64) -> f64 {
    Float::sqrt(area / ratio)
}

/// Pixel height from ratio and total pixel count.
///
/// Same form as [`height_from_ratio_and_area`], in the pixel domain.
pub fn height_from_ratio_and_pixel_count(ratio: f64, pixel_count: f64) -> f64 {
    Float::sqrt(pixel_count / ratio)
}

/// Ratio from pixel height and total pixel count: `pixel_count / height²`.
pub fn ratio_from_height_and_pixel_count(height: f64, pixel_count: f64) -> f64 {
    pixel_count / (height * height)
}

/// Diagonal length of a `width × height` rectangle.
pub fn diagonal_from_width_and_height(width: f64, height: f64) -> f64 {
    Float::hypot(width, height)
}

/// Tolerance for [`Fraction::approximate`], in the open interval `(0, 1)`.
///
/// Smaller values produce larger, more exact fractions. The default collapses
/// common resolutions to their marketed labels (1366×768 becomes 16:9 rather
/// than 683:384).
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Precision(f64);

impl Precision {
    /// `5.0e-3`.
    pub const DEFAULT: Self = Self(5.0e-3);

    /// Validate a precision value.
    pub fn new(value: f64) -> Result<Self, ScreenError> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(ScreenError::PrecisionOutOfRange)
        }
    }

    /// The raw tolerance.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Precision {
    type Error = ScreenError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A continued-fraction convergent `numerator / denominator`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    pub numerator: u64,
    pub denominator: u64,
}

impl Fraction {
    /// Create a fraction. Not reduced.
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// First convergent of `value` whose remainder is within
    /// `precision · denominator²`.
    ///
    /// Non-positive or non-finite input does not loop; it yields a degenerate
    /// fraction. Use [`simplest_fraction`] for checked input.
    pub fn approximate(value: f64, precision: Precision) -> Self {
        let epsilon = precision.get();

        // Convergent window: (h₋₂, k₋₂) = (0, 1), (h₋₁, k₋₁) = (1, 0).
        let (mut h2, mut k2) = (0.0, 1.0);
        let (mut h1, mut k1) = (1.0, 0.0);

        let mut x = value;
        let mut a = Float::floor(x);
        let mut h = a * h1 + h2;
        let mut k = a * k1 + k2;

        while x - a > epsilon * k * k {
            (h2, k2, h1, k1) = (h1, k1, h, k);
            x = 1.0 / (x - a);
            a = Float::floor(x);
            h = a * h1 + h2;
            k = a * k1 + k2;
        }

        Self::new(h as u64, k as u64)
    }

    /// `numerator / denominator` as a float.
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// Simplest fraction approximating `value` within `precision`.
///
/// ```
/// use screencalc::math::{Fraction, simplest_fraction};
///
/// assert_eq!(simplest_fraction(1366.0 / 768.0, 1.0e-5), Ok(Fraction::new(683, 384)));
/// assert!(simplest_fraction(16.0 / 9.0, 1.0).is_err());
/// ```
pub fn simplest_fraction(value: f64, precision: f64) -> Result<Fraction, ScreenError> {
    let precision = Precision::new(precision)?;
    if !(value.is_finite() && value > 0.0) {
        return Err(ScreenError::ValueNotPositive);
    }
    Ok(Fraction::approximate(value, precision))
}

/// Greatest common divisor (Euclid). `gcd(0, 0) == 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Reduce `width:height` for display.
///
/// Divides both sides by their gcd. When the reduced width divides 16 and the
/// reduced height is not 3, both sides are scaled so the width reads 16
/// (8:5 becomes 16:10, 2:1 becomes 16:8, but 4:3 stays 4:3).
pub fn reduce_ratio(width: u64, height: u64) -> (u64, u64) {
    let divisor = gcd(width, height);
    if divisor == 0 {
        return (width, height);
    }
    let (w, h) = (width / divisor, height / divisor);
    if w != 0 && h != 3 && 16 % w == 0 {
        let scale = 16 / w;
        (16, h * scale)
    } else {
        (w, h)
    }
}

/// `"W:H"` label for a pixel resolution, via [`reduce_ratio`].
///
/// ```
/// assert_eq!(screencalc::math::ratio_to_string(1920, 1080), "16:9");
/// assert_eq!(screencalc::math::ratio_to_string(1280, 768), "5:3");
/// ```
#[cfg(feature = "alloc")]
pub fn ratio_to_string(width: u64, height: u64) -> alloc::string::String {
    let (w, h) = reduce_ratio(width, height);
    alloc::format!("{w}:{h}")
}
