//! The rover navigation state machine.

use crate::error::{ConstructionError, MoveError, TravelError};
use crate::report::TravelReport;
use rover_core::{parse_commands, Command, Heading, HeadingError};
use rover_map::NavigationMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// A single rover bound to a navigation map.
///
/// The pose starts at `(0, 0)` with no heading and is meaningless until the
/// first [`travel`](Self::travel), which overwrites it with the supplied
/// start pose before replaying any commands.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use rover_core::Heading;
/// use rover_map::PlanetaryMap;
/// use rover_nav::Rover;
///
/// let map = Arc::new(PlanetaryMap::new(4, 5).unwrap());
/// let mut rover = Rover::new(map);
///
/// let report = rover.travel(0, 0, Heading::East, "AALAARALAA").unwrap();
/// assert_eq!(report.to_string(), "True, N, (3,4)");
///
/// // One more advance would leave the map: travel halts, no error.
/// let report = rover.travel(0, 0, 'E', "AALAARALAAA").unwrap();
/// assert_eq!(report.to_string(), "False, N, (3,4)");
/// ```
pub struct Rover {
    map: Arc<dyn NavigationMap>,
    x: i32,
    y: i32,
    heading: Option<Heading>,
}

/// Builder for [`Rover`].
///
/// Required field: `map`.
#[derive(Default)]
pub struct RoverBuilder {
    map: Option<Arc<dyn NavigationMap>>,
}

impl RoverBuilder {
    /// Set the map the rover drives on.
    pub fn map(mut self, map: Arc<dyn NavigationMap>) -> Self {
        self.map = Some(map);
        self
    }

    /// Set the map from an optional handle. `None` clears it.
    pub fn maybe_map(mut self, map: Option<Arc<dyn NavigationMap>>) -> Self {
        self.map = map;
        self
    }

    /// Build the rover.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::MissingMap`] if no map was set.
    pub fn build(self) -> Result<Rover, ConstructionError> {
        let map = self.map.ok_or(ConstructionError::MissingMap)?;
        Ok(Rover::new(map))
    }
}

impl Rover {
    /// Bind a new rover to `map`.
    pub fn new(map: Arc<dyn NavigationMap>) -> Self {
        Self {
            map,
            x: 0,
            y: 0,
            heading: None,
        }
    }

    /// Create a new builder.
    pub fn builder() -> RoverBuilder {
        RoverBuilder::default()
    }

    /// Current position as `(x, y)`.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Current heading, or `None` before the first travel.
    pub fn heading(&self) -> Option<Heading> {
        self.heading
    }

    /// The map this rover is bound to.
    pub fn map(&self) -> &Arc<dyn NavigationMap> {
        &self.map
    }

    /// Rotate 90 degrees counter-clockwise. No-op while the heading is unset.
    pub fn turn_left(&mut self) {
        self.heading = self.heading.map(Heading::turn_left);
    }

    /// Rotate 90 degrees clockwise. No-op while the heading is unset.
    pub fn turn_right(&mut self) {
        self.heading = self.heading.map(Heading::turn_right);
    }

    /// Move one cell along the current heading.
    ///
    /// The map is consulted first; if the target cell is outside it the
    /// position is left untouched and [`MoveError::OutOfBounds`] is returned.
    pub fn advance(&mut self) -> Result<(), MoveError> {
        let heading = self.heading.ok_or(MoveError::NoHeading)?;
        self.advance_along(heading)
    }

    /// Reset the pose to `(x, y, heading)` and replay `commands`.
    ///
    /// Preconditions are checked in this order, each failing fast:
    ///
    /// 1. `commands` parses ([`TravelError::Command`]);
    /// 2. `(x, y)` is on the map ([`TravelError::InvalidStartPosition`]);
    /// 3. `heading` decodes ([`TravelError::InvalidHeading`]).
    ///
    /// `heading` may be a [`Heading`], a `char` code, or a `&str` code.
    ///
    /// An advance whose target is off the map halts travel: the remaining
    /// commands are discarded and the report carries `in_bounds == false`
    /// with the last valid position. This is a normal outcome, not an error.
    pub fn travel<H>(
        &mut self,
        x: i32,
        y: i32,
        heading: H,
        commands: &str,
    ) -> Result<TravelReport, TravelError>
    where
        H: TryInto<Heading>,
        H::Error: Into<HeadingError>,
    {
        let commands = parse_commands(commands).inspect_err(|err| {
            debug!(%err, "rejected command string");
        })?;

        if !self.map.is_valid(x, y) {
            debug!(x, y, "rejected start position");
            return Err(TravelError::InvalidStartPosition { x, y });
        }

        let mut heading: Heading = heading.try_into().map_err(|err| {
            let err: HeadingError = err.into();
            debug!(%err, "rejected start heading");
            TravelError::InvalidHeading(err)
        })?;

        self.x = x;
        self.y = y;
        self.heading = Some(heading);
        debug!(x, y, %heading, commands = commands.len(), "starting travel");

        for (executed, &command) in commands.iter().enumerate() {
            match self.step(heading, command) {
                Ok(next) => {
                    heading = next;
                    self.heading = Some(heading);
                    trace!(%command, x = self.x, y = self.y, %heading, "applied command");
                }
                Err(err) => {
                    debug!(%err, executed, "halting travel at map edge");
                    return Ok(self.report(false, heading, executed));
                }
            }
        }

        let report = self.report(true, heading, commands.len());
        debug!(%report, "travel complete");
        Ok(report)
    }

    /// Apply one command from a known heading and return the new heading.
    fn step(&mut self, heading: Heading, command: Command) -> Result<Heading, MoveError> {
        match command {
            Command::TurnLeft => Ok(heading.turn_left()),
            Command::TurnRight => Ok(heading.turn_right()),
            Command::Advance => self.advance_along(heading).map(|()| heading),
        }
    }

    fn advance_along(&mut self, heading: Heading) -> Result<(), MoveError> {
        let (dx, dy) = heading.offset();
        let target = self.x.checked_add(dx).zip(self.y.checked_add(dy));
        match target {
            Some((nx, ny)) if self.map.is_valid(nx, ny) => {
                self.x = nx;
                self.y = ny;
                Ok(())
            }
            // Overflow lands off any map.
            _ => Err(MoveError::OutOfBounds {
                x: self.x.saturating_add(dx),
                y: self.y.saturating_add(dy),
            }),
        }
    }

    fn report(&self, in_bounds: bool, heading: Heading, executed: usize) -> TravelReport {
        TravelReport {
            in_bounds,
            heading,
            x: self.x,
            y: self.y,
            executed,
        }
    }
}

impl fmt::Debug for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rover")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("heading", &self.heading)
            .finish_non_exhaustive()
    }
}
