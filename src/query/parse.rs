//! Key lookup and value readers for screen query strings.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use crate::properties::{Quantity, ScreenProperties};

/// Parse a query string into properties + warnings.
pub(crate) fn parse_query(query: &str) -> (ScreenProperties, Vec<ParseWarning>) {
    let mut props = ScreenProperties::new();
    let mut warnings = Vec::new();

    for (raw_key, raw_value) in pairs(query) {
        let key = decode_component(raw_key).to_ascii_lowercase();
        let value = decode_component(raw_value);
        dispatch_key(&key, &value, &mut props, &mut warnings);
    }

    (props, warnings)
}

/// Map a lowercased key to its quantity.
fn key_quantity(key: &str) -> Option<Quantity> {
    let quantity = match key {
        "pixelwidth" | "pixel_width" | "w" | "width" => Quantity::PixelWidth,
        "pixelheight" | "pixel_height" | "h" | "height" => Quantity::PixelHeight,
        "pixelcount" | "pixel_count" | "pixels" => Quantity::PixelCount,
        "pixeldensity" | "pixel_density" | "density" | "ppi" | "dpi" | "ppcm" => {
            Quantity::PixelDensity
        }
        "ratio" | "aspect" => Quantity::Ratio,
        "physicalwidth" | "physical_width" => Quantity::PhysicalWidth,
        "physicalheight" | "physical_height" => Quantity::PhysicalHeight,
        "area" => Quantity::Area,
        "diagonalsize" | "diagonal_size" | "diagonal" | "diag" => Quantity::DiagonalSize,
        _ => return None,
    };
    Some(quantity)
}

fn dispatch_key(
    key: &str,
    value: &str,
    props: &mut ScreenProperties,
    warnings: &mut Vec<ParseWarning>,
) {
    if key == "resolution" || key == "res" {
        match parse_pair(value, &['x', 'X', '*']) {
            Some((w, h)) => {
                set_or_warn(props, Quantity::PixelWidth, w, key, value, warnings);
                set_or_warn(props, Quantity::PixelHeight, h, key, value, warnings);
            }
            None => warnings.push(ParseWarning::ValueInvalid {
                key: Quantity::PixelWidth,
                value: String::from(value),
                reason: "expected WIDTHxHEIGHT",
            }),
        }
        return;
    }

    let Some(quantity) = key_quantity(key) else {
        warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        });
        return;
    };

    let (parsed, reason) = match quantity {
        Quantity::Ratio => (parse_ratio(value), "expected a number or W:H"),
        _ => (parse_f64(value), "expected a number"),
    };
    match parsed {
        Some(v) => set_or_warn(props, quantity, v, key, value, warnings),
        None => warnings.push(ParseWarning::ValueInvalid {
            key: quantity,
            value: String::from(value),
            reason,
        }),
    }
}

/// Set a quantity, warning on duplicate.
fn set_or_warn(
    props: &mut ScreenProperties,
    quantity: Quantity,
    parsed: f64,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if props.get(quantity).is_some() {
        warnings.push(ParseWarning::DuplicateKey {
            key: String::from(key),
            value: String::from(value),
        });
    }
    props.set(quantity, Some(parsed));
}

// ---- Value parsers ----

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

/// Ratio as a decimal or as `W:H`, `W/H`, `WxH`.
fn parse_ratio(s: &str) -> Option<f64> {
    if let Some((w, h)) = parse_pair(s, &[':', '/', 'x', 'X']) {
        return Some(w / h);
    }
    parse_f64(s)
}

/// Two numbers joined by one of `separators`.
fn parse_pair(s: &str, separators: &[char]) -> Option<(f64, f64)> {
    let (a, b) = s.split_once(separators)?;
    Some((parse_f64(a)?, parse_f64(b)?))
}

// ---- Tokenizer ----

/// `key=value` segments split on `&`. Empty segments are dropped and a
/// missing `=` gives an empty value.
fn pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.split_once('=').unwrap_or((segment, "")))
}

/// Undo URL encoding: `+` is a space, `%XX` is one byte. The bytes are read
/// back as UTF-8, with malformed sequences replaced.
fn decode_component(raw: &str) -> String {
    let mut bytes = Vec::with_capacity(raw.len());
    let mut rest = raw.as_bytes();
    while let Some((&byte, tail)) = rest.split_first() {
        rest = tail;
        match byte {
            b'+' => bytes.push(b' '),
            b'%' => match escaped_byte(tail) {
                Some(decoded) => {
                    bytes.push(decoded);
                    rest = &tail[2..];
                }
                // A stray `%` stays literal.
                None => bytes.push(b'%'),
            },
            other => bytes.push(other),
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

/// The byte named by two leading hex digits.
fn escaped_byte(digits: &[u8]) -> Option<u8> {
    let [hi, lo, ..] = *digits else {
        return None;
    };
    let hi = char::from(hi).to_digit(16)?;
    let lo = char::from(lo).to_digit(16)?;
    u8::try_from(hi * 16 + lo).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_dimensions() {
        let (props, warnings) = parse_query("w=1920&h=1080");
        assert_eq!(props.pixel_width, Some(1920.0));
        assert_eq!(props.pixel_height, Some(1080.0));
        assert!(warnings.is_empty());
    }

    #[test]
    fn parse_full_names_case_insensitive() {
        let (props, warnings) = parse_query("pixelWidth=2048&PhysicalHeight=5.82&pixel_density=264");
        assert_eq!(props.pixel_width, Some(2048.0));
        assert_eq!(props.physical_height, Some(5.82));
        assert_eq!(props.pixel_density, Some(264.0));
        assert!(warnings.is_empty());
    }

    #[test]
    fn parse_density_aliases() {
        for key in ["ppi", "dpi", "ppcm", "density"] {
            let (props, _) = parse_query(&alloc::format!("{key}=326"));
            assert_eq!(props.pixel_density, Some(326.0), "{key}");
        }
    }

    #[test]
    fn parse_resolution() {
        let (props, warnings) = parse_query("resolution=1366x768");
        assert_eq!(props.pixel_width, Some(1366.0));
        assert_eq!(props.pixel_height, Some(768.0));
        assert!(warnings.is_empty());
    }

    #[test]
    fn parse_resolution_invalid() {
        let (props, warnings) = parse_query("res=1366");
        assert_eq!(props.pixel_width, None);
        assert!(matches!(
            warnings.as_slice(),
            [ParseWarning::ValueInvalid {
                key: Quantity::PixelWidth,
                ..
            }]
        ));
    }

    #[test]
    fn parse_ratio_forms() {
        for q in ["ratio=16:9", "ratio=16/9", "aspect=16x9"] {
            let (props, _) = parse_query(q);
            assert_eq!(props.ratio, Some(16.0 / 9.0), "{q}");
        }
        let (props, _) = parse_query("ratio=1.5");
        assert_eq!(props.ratio, Some(1.5));
    }

    #[test]
    fn parse_ratio_invalid() {
        let (props, warnings) = parse_query("ratio=wide");
        assert_eq!(props.ratio, None);
        assert!(warnings.iter().any(|w| matches!(
            w,
            ParseWarning::ValueInvalid {
                key: Quantity::Ratio,
                ..
            }
        )));
    }

    #[test]
    fn unknown_key_warns() {
        let (_, warnings) = parse_query("w=800&diagnal=24");
        assert!(warnings.iter().any(|w| matches!(
            w,
            ParseWarning::KeyNotRecognized { key, .. } if key == "diagnal"
        )));
    }

    #[test]
    fn duplicate_key_warns() {
        let (props, warnings) = parse_query("w=800&width=400");
        // Last value wins
        assert_eq!(props.pixel_width, Some(400.0));
        assert!(
            warnings
                .iter()
                .any(|w| matches!(w, ParseWarning::DuplicateKey { .. }))
        );
    }

    #[test]
    fn leading_question_mark_stripped() {
        let (props, _) = parse_query("?w=800&h=600");
        assert_eq!(props.pixel_width, Some(800.0));
        assert_eq!(props.pixel_height, Some(600.0));
    }

    #[test]
    fn percent_decoding_works() {
        let (props, _) = parse_query("ratio=16%3A10&diagonal=+13.3");
        assert_eq!(props.ratio, Some(1.6));
        assert_eq!(props.diagonal_size, Some(13.3));
    }

    #[test]
    fn decoding_keeps_utf8() {
        assert_eq!(decode_component("%C3%A9"), "é");
        assert_eq!(decode_component("caf%c3%a9+au+lait"), "café au lait");
        assert_eq!(decode_component("ratio%3A"), "ratio:");
    }

    #[test]
    fn stray_percent_is_literal() {
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
        assert_eq!(decode_component("%4"), "%4");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(decode_component("%FF"), "\u{FFFD}");
    }

    #[test]
    fn encoded_whitespace_is_trimmed() {
        let (props, warnings) = parse_query("w=1920%C2%A0&h=1080");
        assert_eq!(props.pixel_width, Some(1920.0));
        assert_eq!(props.pixel_height, Some(1080.0));
        assert!(warnings.is_empty());
    }

    #[test]
    fn warnings_carry_decoded_text() {
        let (_, warnings) = parse_query("taille=%C3%A9");
        assert_eq!(
            warnings,
            [ParseWarning::KeyNotRecognized {
                key: String::from("taille"),
                value: String::from("é"),
            }]
        );
    }

    #[test]
    fn values_are_not_domain_checked() {
        let (props, warnings) = parse_query("w=-5&area=0");
        assert_eq!(props.pixel_width, Some(-5.0));
        assert_eq!(props.area, Some(0.0));
        assert!(warnings.is_empty());
    }

    #[test]
    fn empty_pairs_skipped() {
        let (props, warnings) = parse_query("&&w=10&");
        assert_eq!(props.pixel_width, Some(10.0));
        assert!(warnings.is_empty());
    }
}
