//! Selects a farm's parcels from an orchard catalog and decodes their
//! outlines.

use tracing::{debug, warn};

use crate::boundary;
use crate::model::{BoundaryPolygon, Parcel};

/// Returns one polygon per parcel owned by `farm_id`, in catalog order.
///
/// Parcels without a boundary yield an empty polygon. A farm with no
/// parcels yields an empty list.
pub fn extract(catalog: &[Parcel], farm_id: i64) -> Vec<BoundaryPolygon> {
    let polygons: Vec<BoundaryPolygon> = catalog
        .iter()
        .filter(|parcel| parcel.farm_id == farm_id)
        .map(parcel_polygon)
        .collect();

    debug!(farm_id, parcels = polygons.len(), "extracted farm polygons");
    polygons
}

fn parcel_polygon(parcel: &Parcel) -> BoundaryPolygon {
    let encoded = match parcel.polygon.as_deref() {
        Some(encoded) if !encoded.trim().is_empty() => encoded,
        _ => return BoundaryPolygon::new(parcel.id, Vec::new()),
    };

    let decoded = boundary::decode_with_stats(encoded);
    if decoded.skipped > 0 {
        debug!(
            parcel_id = parcel.id,
            skipped = decoded.skipped,
            kept = decoded.points.len(),
            "dropped malformed boundary vertices"
        );
    }
    if decoded.points.is_empty() {
        warn!(parcel_id = parcel.id, "boundary has no usable vertices");
    }

    BoundaryPolygon::new(parcel.id, decoded.points)
}
