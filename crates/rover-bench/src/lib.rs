//! Benchmark profiles and utilities for the rover simulation.
//!
//! - [`spiral_route`]: an inward clockwise spiral that visits every cell of
//!   a square map without leaving it
//! - [`scrambled_route`]: deterministic pseudo-random command string
//! - [`reference_profile`]: 100x100 map with its covering spiral

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rover_map::{MapError, PlanetaryMap};

/// Clockwise inward spiral for a `side x side` map, starting at `(0, 0)`
/// facing north.
///
/// Leg lengths are `side-1` three times, then each of `side-2 .. 1` twice.
pub fn spiral_route(side: u32) -> String {
    let mut legs = vec![side.saturating_sub(1)];
    for len in (1..side).rev() {
        legs.push(len);
        legs.push(len);
    }
    legs.iter()
        .map(|&len| "A".repeat(len as usize))
        .collect::<Vec<_>>()
        .join("R")
}

/// Deterministic pseudo-random command string of length `len`.
pub fn scrambled_route(len: usize, seed: u64) -> String {
    (0..len as u64)
        .map(|i| {
            let h = (i ^ seed).wrapping_mul(6364136223846793007) >> 33;
            match h % 3 {
                0 => 'A',
                1 => 'L',
                _ => 'R',
            }
        })
        .collect()
}

/// 100x100 map (10K cells) paired with its covering spiral.
pub fn reference_profile() -> Result<(PlanetaryMap, String), MapError> {
    Ok((PlanetaryMap::new(100, 100)?, spiral_route(100)))
}
