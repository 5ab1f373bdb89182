//! Error types for rover construction and travel.

use rover_core::{CommandError, HeadingError};
use thiserror::Error;

/// Errors from [`RoverBuilder::build`](crate::RoverBuilder::build).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// No navigation map was supplied.
    #[error("a rover needs a navigation map")]
    MissingMap,
}

/// Usage errors from [`Rover::travel`](crate::Rover::travel).
///
/// Variants are listed in the order the preconditions are checked.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TravelError {
    /// The command string failed to parse.
    #[error(transparent)]
    Command(#[from] CommandError),
    /// The start coordinates are outside the map.
    #[error("({x},{y}) is not a valid start position")]
    InvalidStartPosition {
        /// Requested start x.
        x: i32,
        /// Requested start y.
        y: i32,
    },
    /// The start heading is not one of `N`, `E`, `S`, `W`.
    #[error("invalid start heading: {0}")]
    InvalidHeading(#[from] HeadingError),
}

/// Failure of a single motion primitive.
///
/// [`Rover::travel`](crate::Rover::travel) never surfaces this as an error;
/// it turns `OutOfBounds` into a halted report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The target cell of an advance is outside the map.
    #[error("can not advance to ({x},{y})")]
    OutOfBounds {
        /// Target x.
        x: i32,
        /// Target y.
        y: i32,
    },
    /// The rover has no heading yet (it has never travelled).
    #[error("rover has no heading")]
    NoHeading,
}
