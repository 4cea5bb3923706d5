//! Test fixtures for orchard-map.
//!
//! Provides a small Western Cape catalog:
//! - Two citrus farms near Citrusdal with real-world orchard outlines
//! - A table-grape farm whose records are partly broken

#![allow(dead_code)]

pub mod citrusdal_orchards;

pub use citrusdal_orchards::*;
