//! Travel outcome reporting.

use rover_core::Heading;
use std::fmt;

/// Outcome of a [`Rover::travel`](crate::Rover::travel) call.
///
/// Formats as `"<Flag>, <Heading>, (<X>,<Y>)"`, e.g. `"True, N, (3,4)"`.
///
/// # Examples
///
/// ```
/// use rover_core::Heading;
/// use rover_nav::TravelReport;
///
/// let report = TravelReport {
///     in_bounds: false,
///     heading: Heading::North,
///     x: 3,
///     y: 4,
///     executed: 10,
/// };
/// assert_eq!(report.to_string(), "False, N, (3,4)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TravelReport {
    /// `false` if an advance would have left the map and travel halted.
    pub in_bounds: bool,
    /// Heading when travel finished.
    pub heading: Heading,
    /// Final x. When halted, the last valid cell.
    pub x: i32,
    /// Final y. When halted, the last valid cell.
    pub y: i32,
    /// Commands applied before travel finished. On a halt this excludes the
    /// rejected advance and everything after it.
    pub executed: usize,
}

impl TravelReport {
    /// Final position as `(x, y)`.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl fmt::Display for TravelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = if self.in_bounds { "True" } else { "False" };
        write!(f, "{flag}, {}, ({},{})", self.heading, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(in_bounds: bool, heading: Heading, x: i32, y: i32) -> TravelReport {
        TravelReport {
            in_bounds,
            heading,
            x,
            y,
            executed: 0,
        }
    }

    #[test]
    fn flag_is_capitalised() {
        assert_eq!(report(true, Heading::North, 3, 4).to_string(), "True, N, (3,4)");
        assert_eq!(report(false, Heading::West, 0, 0).to_string(), "False, W, (0,0)");
    }

    #[test]
    fn negative_coordinates_have_no_padding() {
        assert_eq!(report(true, Heading::South, -2, 10).to_string(), "True, S, (-2,10)");
    }

    #[test]
    fn position_pairs_coordinates() {
        assert_eq!(report(true, Heading::East, 5, 7).position(), (5, 7));
    }
}
