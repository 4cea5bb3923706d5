//! Seams between the map pipeline and the outside world.

use std::fmt;

use crate::model::{Farm, Parcel};

/// Supplies the farm and orchard catalogs.
///
/// Implemented by the HTTP inventory client; tests use in-memory catalogs.
pub trait CatalogProvider {
    fn farms(&self) -> Result<Vec<Farm>, CatalogError>;

    fn orchards(&self) -> Result<Vec<Parcel>, CatalogError>;
}

#[derive(Debug)]
pub enum CatalogError {
    /// Transport, status or body decoding failure.
    Http(reqwest::Error),
    /// The provider has no catalog to give.
    Unavailable(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Http(err)
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Http(err) => write!(f, "inventory request failed: {}", err),
            CatalogError::Unavailable(reason) => write!(f, "catalog unavailable: {}", reason),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Http(err) => Some(err),
            CatalogError::Unavailable(_) => None,
        }
    }
}
