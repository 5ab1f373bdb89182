//! Rectangular planetary map.

use crate::error::MapError;
use crate::navigation::NavigationMap;
use std::fmt;

/// A rectangular grid of `width * height` cells.
///
/// Each cell has coordinate `(x, y)` where `0 <= x < width` and
/// `0 <= y < height`. The origin `(0, 0)` is the south-west corner; `y`
/// grows northward and `x` grows eastward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlanetaryMap {
    width: u32,
    height: u32,
}

impl PlanetaryMap {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new map with `width * height` cells.
    ///
    /// Returns `Err(MapError::EmptyMap)` if either dimension is 0, or
    /// `Err(MapError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rover_map::{NavigationMap, PlanetaryMap};
    ///
    /// let map = PlanetaryMap::new(4, 5).unwrap();
    /// assert_eq!(map.cell_count(), 20);
    /// assert!(map.is_valid(3, 4));
    /// assert!(!map.is_valid(4, 4));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::EmptyMap);
        }
        if width > Self::MAX_DIM {
            return Err(MapError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(MapError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns (extent along `x`).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows (extent along `y`).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Like [`is_valid`](NavigationMap::is_valid), but reports the valid
    /// range on failure.
    pub fn check(&self, x: i32, y: i32) -> Result<(), MapError> {
        if self.is_valid(x, y) {
            Ok(())
        } else {
            Err(MapError::CoordOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl NavigationMap for PlanetaryMap {
    fn is_valid(&self, x: i32, y: i32) -> bool {
        // Dimensions are capped at i32::MAX, so the casts are lossless.
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }
}

impl fmt::Display for PlanetaryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
