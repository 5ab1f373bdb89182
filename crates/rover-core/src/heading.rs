//! Compass headings and their turn transitions.

use crate::error::HeadingError;
use std::fmt;
use std::str::FromStr;

/// The direction a rover is facing.
///
/// Headings form a clockwise cycle `N -> E -> S -> W -> N`. Turning is a
/// fixed permutation of that cycle and never depends on position.
///
/// # Examples
///
/// ```
/// use rover_core::Heading;
///
/// assert_eq!(Heading::North.turn_right(), Heading::East);
/// assert_eq!(Heading::North.turn_left(), Heading::West);
/// assert_eq!(Heading::try_from('S').unwrap(), Heading::South);
/// assert_eq!(Heading::West.to_string(), "W");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Facing increasing `y`.
    North,
    /// Facing increasing `x`.
    East,
    /// Facing decreasing `y`.
    South,
    /// Facing decreasing `x`.
    West,
}

impl Heading {
    /// All headings in clockwise order starting from north.
    pub const ALL: [Heading; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Single-letter code used in reports and mission files.
    pub fn code(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Decode a single-letter code. Case-sensitive.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Rotate 90 degrees clockwise.
    pub fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Rotate 90 degrees counter-clockwise. Exact inverse of [`turn_right`](Self::turn_right).
    pub fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Returns the `(dx, dy)` unit step for this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<char> for Heading {
    type Error = HeadingError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| HeadingError::InvalidCode {
            code: code.to_string(),
        })
    }
}

impl TryFrom<&str> for Heading {
    type Error = HeadingError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        let mut chars = code.chars();
        let decoded = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_code(c),
            _ => None,
        };
        decoded.ok_or_else(|| HeadingError::InvalidCode {
            code: code.to_string(),
        })
    }
}

impl FromStr for Heading {
    type Err = HeadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
