//! Property inference over a sparse measurement set.
//!
//! A [`Screen`] stores whatever the caller knows about a display and derives
//! the rest lazily. Each quantity has a fixed, prioritized table of rules;
//! a rule names the quantities it needs and the identity that combines them.
//! The first rule whose inputs all resolve wins, otherwise the stored value
//! is returned as-is. Missing data is `None`, never an error.
//!
//! # Example
//!
//! ```
//! use screencalc::{Screen, ScreenProperties};
//!
//! let ipad_air = Screen::from_properties(
//!     ScreenProperties::new()
//!         .pixel_width(2048.0)
//!         .pixel_height(1536.0)
//!         .diagonal_size(9.7),
//! )
//! .unwrap();
//!
//! let width = ipad_air.physical_width().unwrap();
//! assert!((width - 7.76).abs() < 1e-9);
//! assert_eq!(ipad_air.string_ratio().as_deref(), Some("4:3"));
//! assert_eq!(ipad_air.area().map(|a| (a * 100.0).round() / 100.0), Some(45.16));
//! ```
//!
//! # Cycles
//!
//! Rules refer to each other in cycles (pixel height needs density, density
//! needs pixel height). Resolution carries the set of quantities already on the
//! stack; a quantity that is already being resolved answers with its stored
//! value only. Every nested call adds one quantity to that set, so the depth
//! is bounded by the number of quantities.

use core::fmt;

use crate::error::ScreenError;
use crate::math::{self, Fraction, Precision};
use crate::properties::{Quantity, ScreenProperties};

/// A display and everything known about it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Screen {
    properties: ScreenProperties,
    precision: Precision,
}

impl Screen {
    /// A screen with nothing known.
    pub fn new() -> Self {
        Self::default()
    }

    /// A screen initialized from a validated record.
    pub fn from_properties(properties: ScreenProperties) -> Result<Self, ScreenError> {
        let mut screen = Self::new();
        screen.set_data(properties, false)?;
        Ok(screen)
    }

    /// Set the default precision for [`simple_ratio`](Self::simple_ratio)
    /// and [`string_ratio`](Self::string_ratio).
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Default ratio precision for this screen.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Change the default ratio precision.
    pub fn set_precision(&mut self, precision: Precision) {
        self.precision = precision;
    }

    /// Merge known values from `properties` into the stored set.
    ///
    /// With `replace`, every quantity not present in `properties` becomes
    /// unknown. The whole record is validated before anything is stored, so a
    /// rejected update leaves the screen unchanged.
    pub fn set_data(
        &mut self,
        properties: ScreenProperties,
        replace: bool,
    ) -> Result<(), ScreenError> {
        let incoming = properties.validated().inspect_err(|e| {
            log::debug!("rejected screen update: {e}");
        })?;

        if replace {
            self.properties = ScreenProperties::new();
        }
        let mut count = 0;
        for (quantity, value) in incoming.known() {
            self.properties.set(quantity, Some(value));
            count += 1;
        }
        log::debug!("stored {count} screen properties (replace: {replace})");
        Ok(())
    }

    /// The stored (not derived) measurements.
    pub fn properties(&self) -> &ScreenProperties {
        &self.properties
    }

    /// Resolve any quantity.
    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        Resolver::new(&self.properties).resolve(quantity, Visiting::NONE)
    }

    /// Horizontal resolution.
    pub fn pixel_width(&self) -> Option<f64> {
        self.get(Quantity::PixelWidth)
    }

    /// Vertical resolution.
    pub fn pixel_height(&self) -> Option<f64> {
        self.get(Quantity::PixelHeight)
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> Option<f64> {
        self.get(Quantity::PixelCount)
    }

    /// Pixels per physical unit.
    pub fn pixel_density(&self) -> Option<f64> {
        self.get(Quantity::PixelDensity)
    }

    /// Width divided by height.
    ///
    /// A 1920×1080 display has a ratio of roughly 1.78.
    pub fn ratio(&self) -> Option<f64> {
        self.get(Quantity::Ratio)
    }

    /// Physical width.
    pub fn physical_width(&self) -> Option<f64> {
        self.get(Quantity::PhysicalWidth)
    }

    /// Physical height.
    pub fn physical_height(&self) -> Option<f64> {
        self.get(Quantity::PhysicalHeight)
    }

    /// Physical area in square units.
    pub fn area(&self) -> Option<f64> {
        self.get(Quantity::Area)
    }

    /// Physical diagonal length.
    pub fn diagonal_size(&self) -> Option<f64> {
        self.get(Quantity::DiagonalSize)
    }

    /// Every quantity, resolved.
    pub fn derived(&self) -> ScreenProperties {
        let mut out = ScreenProperties::new();
        for quantity in Quantity::ALL {
            out.set(quantity, self.get(quantity));
        }
        out
    }

    /// The ratio as a simple fraction, using this screen's precision.
    ///
    /// `None` if the ratio cannot be determined.
    pub fn simple_ratio(&self) -> Option<SimpleRatio> {
        self.simple_ratio_with(self.precision)
    }

    /// The ratio as a simple fraction at an explicit precision.
    pub fn simple_ratio_with(&self, precision: Precision) -> Option<SimpleRatio> {
        self.ratio()
            .map(|ratio| SimpleRatio::from_ratio(ratio, precision))
    }

    /// `"W:H"`, prefixed with `~` when the simplification is lossy.
    #[cfg(feature = "alloc")]
    pub fn string_ratio(&self) -> Option<alloc::string::String> {
        self.string_ratio_with(self.precision)
    }

    /// [`string_ratio`](Self::string_ratio) at an explicit precision.
    #[cfg(feature = "alloc")]
    pub fn string_ratio_with(&self, precision: Precision) -> Option<alloc::string::String> {
        use alloc::string::ToString;
        self.simple_ratio_with(precision).map(|r| r.to_string())
    }
}

impl TryFrom<ScreenProperties> for Screen {
    type Error = ScreenError;

    fn try_from(properties: ScreenProperties) -> Result<Self, Self::Error> {
        Self::from_properties(properties)
    }
}

/// A ratio approximated by a small fraction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimpleRatio {
    pub width: u64,
    pub height: u64,
    /// `width / height - ratio`. Zero when the fraction is exact.
    pub difference: f64,
}

impl SimpleRatio {
    /// Approximate `ratio`, labelling 8:5 as 16:10 (and 5:8 as 10:16).
    pub fn from_ratio(ratio: f64, precision: Precision) -> Self {
        let Fraction {
            numerator,
            denominator,
        } = Fraction::approximate(ratio, precision);
        let (width, height) = match (numerator, denominator) {
            (8, 5) => (16, 10),
            (5, 8) => (10, 16),
            other => other,
        };
        Self {
            width,
            height,
            difference: width as f64 / height as f64 - ratio,
        }
    }

    /// Whether the fraction equals the ratio exactly.
    pub fn is_exact(&self) -> bool {
        self.difference == 0.0
    }
}

impl fmt::Display for SimpleRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_exact() {
            f.write_str("~")?;
        }
        write!(f, "{}:{}", self.width, self.height)
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// How a rule combines its inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Identity {
    /// `a × b`
    Product,
    /// `a ÷ b`
    Quotient,
    /// Height from (ratio, diagonal).
    HeightFromDiagonal,
    /// Height from (ratio, area).
    HeightFromArea,
    /// Pixel height from (ratio, pixel count).
    HeightFromPixelCount,
    /// Pixel height from (ratio, diagonal, density).
    PixelsFromDiagonal,
    /// Pixel height from (ratio, area, density).
    PixelsFromArea,
    /// Diagonal from (width, height).
    Hypotenuse,
}

impl Identity {
    const fn arity(self) -> usize {
        match self {
            Self::PixelsFromDiagonal | Self::PixelsFromArea => 3,
            _ => 2,
        }
    }

    fn apply(self, args: &[f64]) -> f64 {
        debug_assert_eq!(args.len(), self.arity(), "{self:?} given {args:?}");
        match (self, args) {
            (Self::Product, &[a, b]) => a * b,
            (Self::Quotient, &[a, b]) => a / b,
            (Self::HeightFromDiagonal, &[ratio, diagonal]) => {
                math::height_from_ratio_and_diagonal(ratio, diagonal)
            }
            (Self::HeightFromArea, &[ratio, area]) => math::height_from_ratio_and_area(ratio, area),
            (Self::HeightFromPixelCount, &[ratio, count]) => {
                math::height_from_ratio_and_pixel_count(ratio, count)
            }
            (Self::PixelsFromDiagonal, &[ratio, diagonal, density]) => {
                math::height_from_ratio_and_diagonal(ratio, diagonal) * density
            }
            (Self::PixelsFromArea, &[ratio, area, density]) => {
                math::height_from_ratio_and_area(ratio, area) * density
            }
            (Self::Hypotenuse, &[width, height]) => {
                math::diagonal_from_width_and_height(width, height)
            }
            // Unreachable while every table entry matches its arity.
            _ => f64::NAN,
        }
    }
}

/// One way to derive a quantity.
struct Rule {
    inputs: &'static [Quantity],
    identity: Identity,
}

const fn rule(inputs: &'static [Quantity], identity: Identity) -> Rule {
    Rule { inputs, identity }
}

use Identity::*;
use Quantity::*;

const PIXEL_HEIGHT_RULES: &[Rule] = &[
    rule(&[PhysicalHeight, PixelDensity], Product),
    rule(&[PixelWidth, Ratio], Quotient),
    rule(&[Ratio, PixelCount], HeightFromPixelCount),
    rule(&[Ratio, DiagonalSize, PixelDensity], PixelsFromDiagonal),
    rule(&[Ratio, Area, PixelDensity], PixelsFromArea),
];

const PIXEL_WIDTH_RULES: &[Rule] = &[
    rule(&[PhysicalWidth, PixelDensity], Product),
    rule(&[PixelHeight, Ratio], Product),
];

const PHYSICAL_HEIGHT_RULES: &[Rule] = &[
    rule(&[PixelHeight, PixelDensity], Quotient),
    rule(&[PhysicalWidth, Ratio], Quotient),
    rule(&[Ratio, DiagonalSize], HeightFromDiagonal),
    rule(&[Ratio, Area], HeightFromArea),
];

const PHYSICAL_WIDTH_RULES: &[Rule] = &[
    rule(&[PixelWidth, PixelDensity], Quotient),
    rule(&[PhysicalHeight, Ratio], Product),
];

const DIAGONAL_RULES: &[Rule] = &[rule(&[PhysicalWidth, PhysicalHeight], Hypotenuse)];

const DENSITY_RULES: &[Rule] = &[
    rule(&[PixelHeight, PhysicalHeight], Quotient),
    rule(&[PixelWidth, PhysicalWidth], Quotient),
];

const AREA_RULES: &[Rule] = &[rule(&[PhysicalWidth, PhysicalHeight], Product)];

const PIXEL_COUNT_RULES: &[Rule] = &[rule(&[PixelWidth, PixelHeight], Product)];

const fn rules_for(quantity: Quantity) -> &'static [Rule] {
    match quantity {
        PixelHeight => PIXEL_HEIGHT_RULES,
        PixelWidth => PIXEL_WIDTH_RULES,
        PhysicalHeight => PHYSICAL_HEIGHT_RULES,
        PhysicalWidth => PHYSICAL_WIDTH_RULES,
        DiagonalSize => DIAGONAL_RULES,
        PixelDensity => DENSITY_RULES,
        Area => AREA_RULES,
        PixelCount => PIXEL_COUNT_RULES,
        // Resolved from stored values by `common_dimensions`.
        Ratio => &[],
    }
}

/// Quantities currently being resolved, one bit per [`Quantity`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Visiting(u16);

impl Visiting {
    const NONE: Self = Self(0);

    fn contains(self, quantity: Quantity) -> bool {
        self.0 & quantity.bit() != 0
    }

    fn with(self, quantity: Quantity) -> Self {
        Self(self.0 | quantity.bit())
    }
}

/// Stateless resolver over one snapshot of stored measurements.
struct Resolver<'a> {
    stored: &'a ScreenProperties,
}

impl<'a> Resolver<'a> {
    fn new(stored: &'a ScreenProperties) -> Self {
        Self { stored }
    }

    fn resolve(&self, quantity: Quantity, visiting: Visiting) -> Option<f64> {
        if visiting.contains(quantity) {
            return self.stored.get(quantity);
        }

        let derived = if quantity == Ratio {
            common_dimensions(self.stored).map(|(w, h)| w / h).filter(|r| r.is_finite())
        } else {
            let visiting = visiting.with(quantity);
            rules_for(quantity)
                .iter()
                .find_map(|rule| self.apply(quantity, rule, visiting))
        };

        derived.or_else(|| self.stored.get(quantity))
    }

    fn apply(&self, target: Quantity, rule: &Rule, visiting: Visiting) -> Option<f64> {
        let mut args = [0.0; 3];
        for (slot, &input) in args.iter_mut().zip(rule.inputs) {
            *slot = self.resolve(input, visiting)?;
        }
        let value = rule.identity.apply(&args[..rule.inputs.len()]);
        if !value.is_finite() {
            return None;
        }
        log::trace!(
            "{target} = {value} from {:?} via {:?}",
            rule.inputs,
            rule.identity
        );
        Some(value)
    }
}

/// Width and height in matching units, from stored values only.
///
/// Tried in order: both pixel sides, both physical sides, one of each joined
/// by density, pixel count with one pixel side, the diagonal with one physical
/// side, and the area with one physical side.
fn common_dimensions(stored: &ScreenProperties) -> Option<(f64, f64)> {
    let ScreenProperties {
        pixel_width,
        pixel_height,
        pixel_count,
        pixel_density,
        physical_width,
        physical_height,
        area,
        diagonal_size,
        ..
    } = *stored;

    if let (Some(w), Some(h)) = (pixel_width, pixel_height) {
        return Some((w, h));
    }
    if let (Some(w), Some(h)) = (physical_width, physical_height) {
        return Some((w, h));
    }

    if let Some(density) = pixel_density {
        if let (Some(w), Some(h)) = (pixel_width, physical_height) {
            return Some((w / density, h));
        }
        if let (Some(w), Some(h)) = (physical_width, pixel_height) {
            return Some((w, h / density));
        }
    }

    if let Some(count) = pixel_count {
        if let Some(h) = pixel_height {
            let ratio = math::ratio_from_height_and_pixel_count(h, count);
            return Some((h * ratio, h));
        }
        if let Some(w) = pixel_width {
            return Some((w, count / w));
        }
    }

    if let Some(diagonal) = diagonal_size {
        if let Some(w) = physical_width
            && diagonal > w
        {
            return Some((w, pythagorean_leg(diagonal, w)));
        }
        if let Some(h) = physical_height
            && diagonal > h
        {
            return Some((pythagorean_leg(diagonal, h), h));
        }
    }

    if let Some(area) = area {
        if let Some(w) = physical_width {
            return Some((w, area / w));
        }
        if let Some(h) = physical_height {
            return Some((area / h, h));
        }
    }

    None
}

/// The other leg of a right triangle.
fn pythagorean_leg(hypotenuse: f64, leg: f64) -> f64 {
    num_traits::Float::sqrt(hypotenuse * hypotenuse - leg * leg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(props: ScreenProperties) -> Screen {
        Screen::from_properties(props).unwrap()
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.unwrap_or_else(|| panic!("expected {expected}, got None"));
        assert!(
            (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    // ── rule tables ─────────────────────────────────────────────────────

    #[test]
    fn ratio_has_no_rules() {
        assert!(rules_for(Ratio).is_empty());
        for q in Quantity::ALL {
            if q != Ratio {
                assert!(!rules_for(q).is_empty(), "{q}");
            }
        }
    }

    #[test]
    fn rules_never_use_their_own_target() {
        for q in Quantity::ALL {
            for r in rules_for(q) {
                assert!(!r.inputs.contains(&q), "{q} rule uses itself");
                assert_eq!(
                    r.inputs.len(),
                    r.identity.arity(),
                    "{q} rule {:?} has the wrong number of inputs",
                    r.identity
                );
            }
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Product given [1.0]")]
    fn identity_arity_mismatch_panics_in_debug() {
        Product.apply(&[1.0]);
    }

    #[test]
    fn visiting_mask() {
        let v = Visiting::NONE.with(PixelWidth).with(Area);
        assert!(v.contains(PixelWidth));
        assert!(v.contains(Area));
        assert!(!v.contains(Ratio));
    }

    // ── common dimensions ───────────────────────────────────────────────

    #[test]
    fn common_dimensions_priority() {
        // Pixel sides beat physical sides.
        let p = ScreenProperties::new()
            .pixel_width(1600.0)
            .pixel_height(1200.0)
            .physical_width(16.0)
            .physical_height(10.0);
        assert_eq!(common_dimensions(&p), Some((1600.0, 1200.0)));
    }

    #[test]
    fn common_dimensions_from_density() {
        let p = ScreenProperties::new()
            .physical_width(8.0)
            .pixel_height(1200.0)
            .pixel_density(200.0);
        assert_eq!(common_dimensions(&p), Some((8.0, 6.0)));
    }

    #[test]
    fn common_dimensions_from_pixel_count_and_width() {
        let p = ScreenProperties::new()
            .pixel_width(1600.0)
            .pixel_count(1600.0 * 1200.0);
        assert_eq!(common_dimensions(&p), Some((1600.0, 1200.0)));
    }

    #[test]
    fn short_diagonal_is_ignored() {
        let p = ScreenProperties::new().physical_width(30.0).diagonal_size(20.0);
        assert_eq!(common_dimensions(&p), None);
        let p = p.area(600.0);
        assert_eq!(common_dimensions(&p), Some((30.0, 20.0)));
    }

    // ── getters ─────────────────────────────────────────────────────────

    #[test]
    fn empty_screen_knows_nothing() {
        let s = Screen::new();
        for q in Quantity::ALL {
            assert_eq!(s.get(q), None, "{q}");
        }
        assert_eq!(s.simple_ratio(), None);
    }

    #[test]
    fn stored_value_is_the_fallback() {
        let s = screen(ScreenProperties::new().pixel_count(1_000_000.0));
        assert_eq!(s.pixel_count(), Some(1_000_000.0));
        assert_eq!(s.pixel_width(), None);
    }

    #[test]
    fn computed_beats_stored() {
        // Stored ratio disagrees with stored resolution; the resolution wins.
        let s = screen(
            ScreenProperties::new()
                .pixel_width(1600.0)
                .pixel_height(1200.0)
                .ratio(16.0 / 9.0),
        );
        assert_eq!(s.ratio(), Some(1600.0 / 1200.0));
    }

    #[test]
    fn resolution_gives_ratio_and_count() {
        let s = screen(ScreenProperties::new().pixel_width(1920.0).pixel_height(1080.0));
        assert_eq!(s.ratio(), Some(1920.0 / 1080.0));
        assert_eq!(s.pixel_count(), Some(1920.0 * 1080.0));
        assert_eq!(s.area(), None);
        assert_eq!(s.diagonal_size(), None);
        assert_eq!(s.pixel_density(), None);
    }

    #[test]
    fn area_and_width_give_ratio() {
        let s = screen(ScreenProperties::new().area(600.0).physical_width(30.0));
        assert_eq!(s.ratio(), Some(1.5));
        assert_close(s.physical_height(), 20.0);
    }

    #[test]
    fn pixel_dimensions_from_ratio_and_count() {
        let s = screen(
            ScreenProperties::new()
                .ratio(1920.0 / 1080.0)
                .pixel_count(1920.0 * 1080.0),
        );
        assert_close(s.pixel_height(), 1080.0);
        assert_close(s.pixel_width(), 1920.0);
    }

    #[test]
    fn zero_diagonal_gives_zero_size() {
        let s = screen(
            ScreenProperties::new()
                .pixel_width(1920.0)
                .pixel_height(1080.0)
                .diagonal_size(-4.0),
        );
        assert_eq!(s.properties().diagonal_size, Some(0.0));
        assert_eq!(s.physical_height(), Some(0.0));
        assert_eq!(s.physical_width(), Some(0.0));
        // Density would be infinite, so it stays unknown.
        assert_eq!(s.pixel_density(), None);
    }

    #[test]
    fn getters_are_idempotent() {
        let s = screen(
            ScreenProperties::new()
                .pixel_width(2048.0)
                .pixel_height(1536.0)
                .diagonal_size(9.7),
        );
        assert_eq!(s.derived(), s.derived());
        for q in Quantity::ALL {
            assert_eq!(s.get(q), s.get(q), "{q}");
        }
    }

    #[test]
    fn derived_fills_everything_it_can() {
        let s = screen(
            ScreenProperties::new()
                .pixel_width(2048.0)
                .pixel_height(1536.0)
                .diagonal_size(9.7),
        );
        let all = s.derived();
        for q in Quantity::ALL {
            assert!(all.get(q).is_some(), "{q} not derived");
        }
    }

    // ── set_data ────────────────────────────────────────────────────────

    #[test]
    fn set_data_merges() {
        let mut s = screen(ScreenProperties::new().pixel_width(2048.0));
        s.set_data(ScreenProperties::new().pixel_height(1536.0), false)
            .unwrap();
        assert_eq!(s.properties().pixel_width, Some(2048.0));
        assert_eq!(s.pixel_count(), Some(2048.0 * 1536.0));
    }

    #[test]
    fn set_data_replace_clears_others() {
        let mut s = screen(ScreenProperties::new().pixel_count(1000.0));
        s.set_data(ScreenProperties::new().pixel_width(1024.0), true)
            .unwrap();
        assert_eq!(s.pixel_count(), None);
        assert_eq!(s.pixel_width(), Some(1024.0));
    }

    #[test]
    fn rejected_update_changes_nothing() {
        let mut s = screen(ScreenProperties::new().pixel_width(1024.0));
        let before = s.clone();
        let err = s
            .set_data(
                ScreenProperties::new().pixel_height(768.0).ratio(-1.0),
                true,
            )
            .unwrap_err();
        assert_eq!(err, ScreenError::NotPositive(Ratio));
        assert_eq!(s, before);
    }

    #[test]
    fn try_from_validates() {
        assert_eq!(
            Screen::try_from(ScreenProperties::new().pixel_width(0.0)),
            Err(ScreenError::NotPositive(PixelWidth))
        );
        assert_eq!(
            Screen::try_from(ScreenProperties::new().pixel_height(1080.5)),
            Err(ScreenError::NotInteger(PixelHeight))
        );
    }

    // ── simple ratio ────────────────────────────────────────────────────

    #[test]
    fn eight_five_becomes_sixteen_ten() {
        let s = screen(ScreenProperties::new().ratio(16.0 / 10.0));
        assert_eq!(
            s.simple_ratio(),
            Some(SimpleRatio {
                width: 16,
                height: 10,
                difference: 0.0
            })
        );
        let portrait = screen(ScreenProperties::new().ratio(10.0 / 16.0));
        assert_eq!(
            portrait.simple_ratio(),
            Some(SimpleRatio {
                width: 10,
                height: 16,
                difference: 0.0
            })
        );
    }

    #[test]
    fn lossy_simplification_reports_difference() {
        let s = screen(ScreenProperties::new().pixel_width(1136.0).pixel_height(640.0));
        let r = s.simple_ratio().unwrap();
        assert_eq!((r.width, r.height), (16, 9));
        assert!((r.difference - 0.002777777777777768).abs() < 1e-15);
        assert!(!r.is_exact());

        let exact = s.simple_ratio_with(Precision::new(1.0e-3).unwrap()).unwrap();
        assert_eq!((exact.width, exact.height), (71, 40));
        assert!(exact.is_exact());
    }

    #[test]
    fn configured_precision_is_used() {
        let s = screen(ScreenProperties::new().ratio(1366.0 / 768.0))
            .with_precision(Precision::new(1.0e-5).unwrap());
        let r = s.simple_ratio().unwrap();
        assert_eq!((r.width, r.height), (683, 384));

        let mut s = s;
        s.set_precision(Precision::DEFAULT);
        assert_eq!(s.precision(), Precision::DEFAULT);
        assert_eq!(s.string_ratio().as_deref(), Some("~16:9"));
    }

    #[test]
    fn display_marks_lossy_ratios() {
        let lossy = SimpleRatio::from_ratio(1366.0 / 768.0, Precision::DEFAULT);
        assert_eq!(format!("{lossy}"), "~16:9");
        let exact = SimpleRatio::from_ratio(2.0, Precision::DEFAULT);
        assert_eq!(format!("{exact}"), "2:1");
    }
}
