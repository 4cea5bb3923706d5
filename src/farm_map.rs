//! Farm selection flow: fetch the orchard catalog, pick out one farm's
//! parcels and frame them.

use tracing::{debug, info};

use crate::extract::extract;
use crate::model::{BoundaryPolygon, Farm, Viewport};
use crate::traits::{CatalogError, CatalogProvider};
use crate::viewport::{FitOptions, fit};

/// Everything the map screen needs to draw one farm.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmMap {
    pub farm_id: i64,
    /// One entry per parcel, in catalog order. May contain empty outlines.
    pub polygons: Vec<BoundaryPolygon>,
    /// `None` when no parcel has a usable vertex.
    pub viewport: Option<Viewport>,
}

impl FarmMap {
    /// Camera to show: the fitted viewport, else the default camera.
    pub fn camera(&self) -> Viewport {
        self.viewport.unwrap_or(Viewport::DEFAULT_CAMERA)
    }

    /// Polygons with at least one vertex.
    pub fn drawable(&self) -> impl Iterator<Item = &BoundaryPolygon> {
        self.polygons.iter().filter(|polygon| !polygon.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct FarmMapLoader<P> {
    provider: P,
    options: FitOptions,
}

impl<P: CatalogProvider> FarmMapLoader<P> {
    pub fn new(provider: P, options: FitOptions) -> Self {
        Self { provider, options }
    }

    /// Farms available for selection.
    pub fn farms(&self) -> Result<Vec<Farm>, CatalogError> {
        self.provider.farms()
    }

    /// Builds the map for `farm_id` from a fresh catalog fetch.
    ///
    /// Nothing is cached between calls.
    pub fn load(&self, farm_id: i64) -> Result<FarmMap, CatalogError> {
        let catalog = self.provider.orchards()?;
        debug!(farm_id, catalog = catalog.len(), "loaded orchard catalog");

        let polygons = extract(&catalog, farm_id);
        let viewport = fit(&polygons, &self.options);
        if viewport.is_none() {
            info!(farm_id, "nothing to frame, using default camera");
        }

        Ok(FarmMap {
            farm_id,
            polygons,
            viewport,
        })
    }
}
