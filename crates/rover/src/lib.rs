//! Rover: a Mars rover grid navigation simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the rover sub-crates and adds the [`mission`] layer for describing and
//! running a complete scenario.
//!
//! # Quick start
//!
//! ```rust
//! use rover::prelude::*;
//! use std::sync::Arc;
//!
//! let map = PlanetaryMap::new(4, 5).unwrap();
//! let mut rover = Rover::builder().map(Arc::new(map)).build().unwrap();
//!
//! let report = rover.travel(0, 0, Heading::East, "AALAARALA").unwrap();
//! assert_eq!(report.to_string(), "True, N, (3,3)");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rover-core` | Headings, commands, command parsing |
//! | [`map`] | `rover-map` | `NavigationMap` trait and `PlanetaryMap` |
//! | [`nav`] | `rover-nav` | `Rover`, travel reports and errors |
//! | [`mission`] | this crate | TOML mission files |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Headings, commands, and command parsing (`rover-core`).
pub use rover_core as types;

/// Navigation maps (`rover-map`).
pub use rover_map as map;

/// The rover state machine and travel driver (`rover-nav`).
pub use rover_nav as nav;

pub mod mission;

/// Common imports for driving a rover.
///
/// ```rust
/// use rover::prelude::*;
/// ```
pub mod prelude {
    pub use crate::mission::{MissionConfig, MissionError};
    pub use rover_core::{parse_commands, Command, CommandError, Heading, HeadingError};
    pub use rover_map::{MapError, NavigationMap, PlanetaryMap};
    pub use rover_nav::{
        ConstructionError, MoveError, Rover, RoverBuilder, TravelError, TravelReport,
    };
}
