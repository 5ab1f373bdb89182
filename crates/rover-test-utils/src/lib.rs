//! Test utilities and mock maps for rover development.
//!
//! Provides mock implementations of [`NavigationMap`] and the reference
//! travel scenarios (see [`fixtures`]) shared by unit tests, integration
//! tests, and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use rover_map::NavigationMap;
use std::sync::Mutex;

pub use fixtures::{reference_map, reference_scenarios, Scenario};

/// A map with no edges: every coordinate is valid.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenMap;

impl NavigationMap for OpenMap {
    fn is_valid(&self, _x: i32, _y: i32) -> bool {
        true
    }
}

/// A map with no cells: every coordinate is invalid.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClosedMap;

impl NavigationMap for ClosedMap {
    fn is_valid(&self, _x: i32, _y: i32) -> bool {
        false
    }
}

/// Wraps another map and records every bounds query in call order.
///
/// Useful for asserting that a rover consults the map before each advance
/// and stops querying once travel halts.
pub struct ProbeMap<M> {
    inner: M,
    log: Mutex<Vec<(i32, i32)>>,
}

impl<M: NavigationMap> ProbeMap<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            log: Mutex::new(Vec::new()),
        }
    }

    /// Every `(x, y)` queried so far, oldest first.
    pub fn queries(&self) -> Vec<(i32, i32)> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    pub fn query_count(&self) -> usize {
        self.log.lock().map(|log| log.len()).unwrap_or_default()
    }

    /// Forget all recorded queries.
    pub fn reset(&self) {
        if let Ok(mut log) = self.log.lock() {
            log.clear();
        }
    }
}

impl<M: NavigationMap> NavigationMap for ProbeMap<M> {
    fn is_valid(&self, x: i32, y: i32) -> bool {
        if let Ok(mut log) = self.log.lock() {
            log.push((x, y));
        }
        self.inner.is_valid(x, y)
    }
}
