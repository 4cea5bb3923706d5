//! Frames a set of polygons with a map viewport.
//!
//! Uses an equirectangular bounding box: the center is the midpoint of the
//! box (not the point centroid) and each span is the box extent scaled by a
//! margin factor.

use tracing::{debug, warn};

use crate::model::{BoundaryPolygon, GeoPoint, Viewport};

/// Padding applied to the raw bounding box span.
pub const DEFAULT_MARGIN_FACTOR: f64 = 1.2;

/// Smallest span handed to the map, in degrees (~550 m of latitude).
///
/// Applies when all points share a latitude or longitude, including the
/// single-point case.
pub const MIN_SPAN_DEGREES: f64 = 0.005;

const MAX_LATITUDE_SPAN: f64 = 180.0;
const MAX_LONGITUDE_SPAN: f64 = 360.0;

#[derive(Debug, Clone)]
pub struct FitOptions {
    /// Multiplier on the bounding box extent, applied to both axes.
    pub margin_factor: f64,
    /// Lower bound for each span, in degrees.
    pub min_span: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            margin_factor: DEFAULT_MARGIN_FACTOR,
            min_span: MIN_SPAN_DEGREES,
        }
    }
}

impl FitOptions {
    pub fn with_margin(margin_factor: f64) -> Self {
        Self {
            margin_factor,
            ..Self::default()
        }
    }

    fn effective_margin(&self) -> f64 {
        if self.margin_factor.is_finite() && self.margin_factor > 0.0 {
            self.margin_factor
        } else {
            warn!(margin_factor = self.margin_factor, "invalid margin factor, using default");
            DEFAULT_MARGIN_FACTOR
        }
    }

    fn effective_min_span(&self) -> f64 {
        if self.min_span.is_finite() && self.min_span > 0.0 {
            self.min_span
        } else {
            warn!(min_span = self.min_span, "invalid span floor, using default");
            MIN_SPAN_DEGREES
        }
    }
}

/// Axis-aligned bounds of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    fn from_point(point: &GeoPoint) -> Self {
        Self {
            min_lat: point.latitude,
            max_lat: point.latitude,
            min_lng: point.longitude,
            max_lng: point.longitude,
        }
    }

    fn include(self, point: &GeoPoint) -> Self {
        Self {
            min_lat: self.min_lat.min(point.latitude),
            max_lat: self.max_lat.max(point.latitude),
            min_lng: self.min_lng.min(point.longitude),
            max_lng: self.max_lng.max(point.longitude),
        }
    }

    /// Bounds of every point across `polygons`, or `None` if there are none.
    pub fn of(polygons: &[BoundaryPolygon]) -> Option<Self> {
        polygons
            .iter()
            .flat_map(|polygon| polygon.points())
            .fold(None, |bounds: Option<Bounds>, point| {
                Some(match bounds {
                    Some(bounds) => bounds.include(point),
                    None => Bounds::from_point(point),
                })
            })
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            latitude: (self.min_lat + self.max_lat) / 2.0,
            longitude: (self.min_lng + self.max_lng) / 2.0,
        }
    }
}

/// Computes a viewport containing every point of `polygons`.
///
/// Returns `None` when the polygons hold no points at all; callers fall back
/// to [`Viewport::DEFAULT_CAMERA`] or use [`fit_or_default`].
pub fn fit(polygons: &[BoundaryPolygon], options: &FitOptions) -> Option<Viewport> {
    let bounds = Bounds::of(polygons)?;
    let margin = options.effective_margin();
    let floor = options.effective_min_span();

    let latitude_delta = span(bounds.max_lat - bounds.min_lat, margin, floor, MAX_LATITUDE_SPAN);
    let longitude_delta = span(bounds.max_lng - bounds.min_lng, margin, floor, MAX_LONGITUDE_SPAN);

    let viewport = Viewport {
        center: bounds.center(),
        latitude_delta,
        longitude_delta,
    };
    debug!(?viewport, "fitted viewport");
    Some(viewport)
}

/// Like [`fit`], but yields the default camera when there is nothing to frame.
pub fn fit_or_default(polygons: &[BoundaryPolygon], options: &FitOptions) -> Viewport {
    fit(polygons, options).unwrap_or(Viewport::DEFAULT_CAMERA)
}

fn span(extent: f64, margin: f64, floor: f64, ceiling: f64) -> f64 {
    (extent * margin).max(floor).min(ceiling)
}
