//! Typed decoders for element text. Every decoder has a default for absent or
//! unreadable input, so a sparse document never fails here.

use crate::pipeline::parse::document::Element;
use crate::pipeline::parse::namespace::Namespaces;
use crate::types::activity::Position;

/// Whole non-negative number. Decimals are truncated; anything else is 0.
pub fn decode_int(text: Option<&str>) -> u32 {
    let text = text.unwrap_or("").trim();
    if let Ok(value) = text.parse::<u32>() {
        return value;
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value as u32,
        _ => 0,
    }
}

pub fn decode_float(text: Option<&str>) -> f64 {
    text.unwrap_or("")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

pub fn decode_string(text: Option<&str>) -> String {
    text.unwrap_or("").trim().to_string()
}

/// Text exactly as the reader delivered it, for values kept in source format.
pub fn decode_verbatim(text: Option<&str>) -> String {
    text.unwrap_or("").to_string()
}

/// A `Position` element becomes a coordinate pair; no element means no position.
pub fn decode_position(element: Option<&Element>, namespaces: &Namespaces) -> Option<Position> {
    element.map(|el| Position {
        latitude: decode_float(el.find_text("tcx:LatitudeDegrees", namespaces)),
        longitude: decode_float(el.find_text("tcx:LongitudeDegrees", namespaces)),
    })
}
