//! Error types for map construction and bounds checks.

use thiserror::Error;

/// Errors arising from map construction or coordinate checks.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MapError {
    /// A coordinate is outside the bounds of the map.
    #[error("({x},{y}) is outside the map: expected [0, {width}) x [0, {height})")]
    CoordOutOfBounds {
        /// The offending x coordinate.
        x: i32,
        /// The offending y coordinate.
        y: i32,
        /// Map width.
        width: u32,
        /// Map height.
        height: u32,
    },
    /// Attempted to construct a map with zero cells.
    #[error("map must have at least one cell")]
    EmptyMap,
    /// A dimension exceeds the coordinate range.
    #[error("{name} = {value} exceeds maximum {max}")]
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
}
