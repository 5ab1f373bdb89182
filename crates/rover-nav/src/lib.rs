//! Rover navigation for the rover simulation.
//!
//! A [`Rover`] holds a pose (position and heading) and a shared handle to
//! the [`NavigationMap`](rover_map::NavigationMap) it drives on. The
//! top-level entry point is [`Rover::travel`], which validates its inputs,
//! replays a command string from a start pose, and returns a
//! [`TravelReport`].
//!
//! Leaving the map mid-route is not an error: travel halts at the last
//! valid cell and reports `in_bounds == false`. Bad inputs up front
//! (empty or malformed commands, an off-map start, an unknown heading)
//! are errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod report;
pub mod rover;

pub use error::{ConstructionError, MoveError, TravelError};
pub use report::TravelReport;
pub use rover::{Rover, RoverBuilder};
pub use rover_core::parse_commands;
