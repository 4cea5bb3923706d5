//! Boundary string codec.
//!
//! The inventory service encodes a parcel outline as whitespace-separated
//! vertex tokens, each `"<longitude>,<latitude>"`. Longitude comes first.
//! Decoding is lenient per vertex: a token that does not parse, or that lies
//! outside valid coordinate ranges, is dropped and the rest of the outline
//! survives.

use crate::model::GeoPoint;

/// Result of decoding a boundary string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedBoundary {
    pub points: Vec<GeoPoint>,
    /// Number of vertex tokens that were dropped.
    pub skipped: usize,
}

/// Decodes a boundary string into points, dropping malformed vertices.
pub fn decode(encoded: &str) -> Vec<GeoPoint> {
    decode_with_stats(encoded).points
}

/// Decodes a boundary string and reports how many vertices were dropped.
pub fn decode_with_stats(encoded: &str) -> DecodedBoundary {
    let mut decoded = DecodedBoundary::default();

    for token in encoded.split_whitespace() {
        match decode_vertex(token) {
            Some(point) => decoded.points.push(point),
            None => decoded.skipped += 1,
        }
    }

    decoded
}

/// Encodes points as a boundary string.
///
/// Uses shortest round-trip float formatting, so `decode(&encode(p)) == p`.
pub fn encode(points: &[GeoPoint]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", point.longitude, point.latitude))
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_vertex(token: &str) -> Option<GeoPoint> {
    let mut parts = token.split(',');
    let (lng, lat) = match (parts.next(), parts.next(), parts.next()) {
        (Some(lng), Some(lat), None) => (lng, lat),
        _ => return None,
    };

    let longitude = lng.trim().parse::<f64>().ok()?;
    let latitude = lat.trim().parse::<f64>().ok()?;
    GeoPoint::new(latitude, longitude)
}
