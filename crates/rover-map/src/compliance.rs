//! NavigationMap trait compliance test helpers.
//!
//! These functions verify that a rectangular map implementation answers
//! bounds queries consistently with its declared extent.

use crate::navigation::NavigationMap;

/// Assert every cell of the `width x height` rectangle is valid.
pub fn assert_interior_valid(map: &dyn NavigationMap, width: u32, height: u32) {
    for x in 0..width as i32 {
        for y in 0..height as i32 {
            assert!(map.is_valid(x, y), "({x},{y}) should be inside");
        }
    }
}

/// Assert the one-cell ring just outside the rectangle is invalid.
pub fn assert_border_invalid(map: &dyn NavigationMap, width: u32, height: u32) {
    let (w, h) = (width as i32, height as i32);
    for x in -1..=w {
        assert!(!map.is_valid(x, -1), "({x},-1) should be outside");
        assert!(!map.is_valid(x, h), "({x},{h}) should be outside");
    }
    for y in -1..=h {
        assert!(!map.is_valid(-1, y), "(-1,{y}) should be outside");
        assert!(!map.is_valid(w, y), "({w},{y}) should be outside");
    }
}

/// Assert repeated queries return the same answer.
pub fn assert_queries_pure(map: &dyn NavigationMap, width: u32, height: u32) {
    for x in -1..=width as i32 {
        for y in -1..=height as i32 {
            let first = map.is_valid(x, y);
            assert_eq!(first, map.is_valid(x, y), "({x},{y}) changed between queries");
        }
    }
}

/// Run every compliance check.
pub fn run_full_compliance(map: &dyn NavigationMap, width: u32, height: u32) {
    assert_interior_valid(map, width, height);
    assert_border_invalid(map, width, height);
    assert_queries_pure(map, width, height);
}
