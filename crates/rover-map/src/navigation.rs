//! The `NavigationMap` trait.

/// Bounds oracle consulted by rovers before every forward move.
///
/// Implementations must be pure: the answer for a coordinate never changes
/// over the lifetime of the map.
///
/// # Thread Safety
///
/// `Send + Sync` is required because rovers hold the map behind an
/// `Arc<dyn NavigationMap>` that may be shared across threads.
pub trait NavigationMap: Send + Sync + 'static {
    /// Returns `true` iff `(x, y)` lies inside the map.
    fn is_valid(&self, x: i32, y: i32) -> bool;
}
