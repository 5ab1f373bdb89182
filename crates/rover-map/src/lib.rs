//! Planetary maps for the rover simulation.
//!
//! This crate defines the [`NavigationMap`] trait, the bounds oracle every
//! rover consults before moving, along with the rectangular
//! [`PlanetaryMap`] backend.
//!
//! A map carries no terrain or occupancy data. It answers exactly one
//! question: is a coordinate inside the grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod navigation;
pub mod planetary;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::MapError;
pub use navigation::NavigationMap;
pub use planetary::PlanetaryMap;
