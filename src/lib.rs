//! orchard-map core
//!
//! Turns an orchard catalog into per-parcel map polygons and a camera
//! viewport that frames them.

pub mod traits;
pub mod model;
pub mod boundary;
pub mod extract;
pub mod viewport;
pub mod inventory;
pub mod farm_map;
