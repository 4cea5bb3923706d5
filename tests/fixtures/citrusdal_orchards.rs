//! Orchard outlines around Citrusdal and the Olifants River valley.
//!
//! Boundaries use the inventory wire format: `"<lon>,<lat>"` tokens separated
//! by spaces, ring closed on the first vertex.

use orchard_map::model::{Farm, Parcel};

pub const KROMRIVIER: i64 = 216_269;
pub const BRAKFONTEIN: i64 = 216_270;
pub const SANDDRIF: i64 = 216_271;
/// A farm with no orchards on record.
pub const EMPTY_FARM: i64 = 216_999;

pub const CLIENT_ID: i64 = 257_400;

/// An orchard record in fixture form.
#[derive(Debug, Clone)]
pub struct Orchard {
    pub id: i64,
    pub farm_id: i64,
    pub name: &'static str,
    pub hectares: f64,
    pub crop_type: &'static str,
    pub polygon: Option<&'static str>,
}

impl Orchard {
    pub fn to_parcel(&self) -> Parcel {
        Parcel {
            id: self.id,
            farm_id: self.farm_id,
            polygon: self.polygon.map(str::to_string),
            name: self.name.to_string(),
            hectares: self.hectares,
            crop_type: self.crop_type.to_string(),
            client_id: CLIENT_ID,
        }
    }
}

// ============================================================================
// Farms
// ============================================================================

pub fn farms() -> Vec<Farm> {
    [
        (KROMRIVIER, "Kromrivier Citrus"),
        (BRAKFONTEIN, "Brakfontein"),
        (SANDDRIF, "Sanddrif Druiwe"),
        (EMPTY_FARM, "Nuwe Grond"),
    ]
    .into_iter()
    .map(|(id, name)| Farm {
        id,
        name: name.to_string(),
        client_id: CLIENT_ID,
    })
    .collect()
}

// ============================================================================
// Orchards (interleaved across farms, as the service returns them)
// ============================================================================

pub const ORCHARDS: &[Orchard] = &[
    Orchard {
        id: 216_269_01,
        farm_id: KROMRIVIER,
        name: "Blok 1 Navel",
        hectares: 3.4,
        crop_type: "Oranges",
        polygon: Some(
            "18.9870,-32.5840 18.9912,-32.5838 18.9915,-32.5871 18.9873,-32.5874 18.9870,-32.5840",
        ),
    },
    Orchard {
        id: 216_270_01,
        farm_id: BRAKFONTEIN,
        name: "Suid Blok",
        hectares: 6.1,
        crop_type: "Soft Citrus",
        polygon: Some(
            "19.0425,-32.6402 19.0488,-32.6399 19.0491,-32.6450 19.0429,-32.6453 19.0425,-32.6402",
        ),
    },
    Orchard {
        id: 216_269_02,
        farm_id: KROMRIVIER,
        name: "Blok 2 Valencia",
        hectares: 2.8,
        crop_type: "Oranges",
        polygon: Some(
            "18.9921,-32.5829 18.9960,-32.5826 18.9964,-32.5860 18.9925,-32.5863 18.9921,-32.5829",
        ),
    },
    Orchard {
        id: 216_271_01,
        farm_id: SANDDRIF,
        name: "Rivierblok",
        hectares: 1.9,
        crop_type: "Table Grapes",
        // One corrupted vertex in an otherwise valid ring.
        polygon: Some(
            "18.6710,-32.1980 18.6745,-32.1978 18.67x5,-32.20 18.6748,-32.2011 18.6712,-32.2013 18.6710,-32.1980",
        ),
    },
    Orchard {
        id: 216_269_03,
        farm_id: KROMRIVIER,
        name: "Blok 3 Nuwe Aanplant",
        hectares: 1.2,
        crop_type: "Lemons",
        polygon: None,
    },
    Orchard {
        id: 216_271_02,
        farm_id: SANDDRIF,
        name: "Dam Blok",
        hectares: 0.7,
        crop_type: "Table Grapes",
        polygon: Some("garbage"),
    },
];

pub fn catalog() -> Vec<Parcel> {
    ORCHARDS.iter().map(Orchard::to_parcel).collect()
}
