//! Farm and orchard data as delivered by the inventory service, plus the
//! geographic types the map pipeline produces.

use serde::{Deserialize, Deserializer, Serialize};

/// One page of a list endpoint.
///
/// Only `results` is consumed; further pages are never requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_id: i64,
}

/// A sub-area of a farm ("orchard" on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    pub id: i64,
    pub farm_id: i64,
    /// Encoded boundary, `"<lon>,<lat> <lon>,<lat> ..."`.
    #[serde(default)]
    pub polygon: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hectares: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crop_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_id: i64,
}

impl Parcel {
    pub fn new(id: i64, farm_id: i64, polygon: Option<&str>) -> Self {
        Self {
            id,
            farm_id,
            polygon: polygon.map(str::to_string),
            name: String::new(),
            hectares: 0.0,
            crop_type: String::new(),
            client_id: 0,
        }
    }
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A validated latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Returns `None` unless both values are finite and inside
    /// [-90, 90] / [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        (lat_ok && lon_ok).then_some(Self {
            latitude,
            longitude,
        })
    }
}

/// The decoded outline of one parcel, in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPolygon {
    parcel_id: i64,
    points: Vec<GeoPoint>,
}

impl BoundaryPolygon {
    pub fn new(parcel_id: i64, points: Vec<GeoPoint>) -> Self {
        Self { parcel_id, points }
    }

    /// Identifier of the parcel this outline belongs to. Used as the
    /// rendering key.
    pub fn parcel_id(&self) -> i64 {
        self.parcel_id
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    /// Empty outlines are kept but render as nothing.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Camera framing: a center plus the latitude/longitude span in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: GeoPoint,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Viewport {
    /// Fallback camera used when there is nothing to frame: the Western Cape,
    /// zoomed out.
    pub const DEFAULT_CAMERA: Viewport = Viewport {
        center: GeoPoint {
            latitude: -30.327,
            longitude: 18.826,
        },
        latitude_delta: 20.0,
        longitude_delta: 20.0,
    };
}
