//! Mission files: one map, one start pose, one command string.
//!
//! A mission is loaded from TOML:
//!
//! ```toml
//! commands = "AAALAAALAAA"
//!
//! [map]
//! width = 4
//! height = 4
//!
//! [start]
//! x = 0
//! y = 3
//! heading = "S"
//! ```
//!
//! `map` defaults to 4×4 and `start` to `(0, 0)` facing north. The heading
//! is kept as text so that an unknown code surfaces as a travel error
//! rather than a parse error.

use rover_map::{MapError, PlanetaryMap};
use rover_nav::{ConstructionError, Rover, TravelError, TravelReport};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors from loading or running a mission.
#[derive(Debug, Error)]
pub enum MissionError {
    /// The mission file could not be read.
    #[error("failed to read mission file {path:?}: {source}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The mission file is not valid TOML for a mission.
    #[error("invalid mission file: {0}")]
    Parse(#[from] toml::de::Error),
    /// The map dimensions are invalid.
    #[error("invalid map: {0}")]
    Map(#[from] MapError),
    /// The rover could not be built.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    /// Travel rejected its inputs.
    #[error(transparent)]
    Travel(#[from] TravelError),
}

/// A complete travel scenario.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MissionConfig {
    /// Raw command string, e.g. `"AALAARALA"`.
    pub commands: String,
    /// Map dimensions.
    #[serde(default)]
    pub map: MapConfig,
    /// Start pose.
    #[serde(default)]
    pub start: StartConfig,
}

/// Map dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MapConfig {
    /// Extent along x (default: 4).
    #[serde(default = "default_extent")]
    pub width: u32,
    /// Extent along y (default: 4).
    #[serde(default = "default_extent")]
    pub height: u32,
}

/// Start pose.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StartConfig {
    /// Start x (default: 0).
    #[serde(default)]
    pub x: i32,
    /// Start y (default: 0).
    #[serde(default)]
    pub y: i32,
    /// Start heading code, one of `N`, `E`, `S`, `W` (default: `N`).
    #[serde(default = "default_heading")]
    pub heading: String,
}

fn default_extent() -> u32 {
    4
}

fn default_heading() -> String {
    "N".to_string()
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: default_extent(),
            height: default_extent(),
        }
    }
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            heading: default_heading(),
        }
    }
}

impl Default for MissionConfig {
    /// The built-in demo: a loop around the border of a 4×4 map.
    fn default() -> Self {
        Self {
            commands: "AAALAAALAAA".to_string(),
            map: MapConfig::default(),
            start: StartConfig {
                x: 0,
                y: 3,
                heading: "S".to_string(),
            },
        }
    }
}

impl MissionConfig {
    /// Load a mission from a TOML file.
    pub fn load(path: &Path) -> Result<Self, MissionError> {
        let content = std::fs::read_to_string(path).map_err(|source| MissionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse a mission from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, MissionError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the map and rover, then travel.
    pub fn run(&self) -> Result<TravelReport, MissionError> {
        let map = PlanetaryMap::new(self.map.width, self.map.height)?;
        info!(
            %map,
            x = self.start.x,
            y = self.start.y,
            heading = %self.start.heading,
            commands = %self.commands,
            "running mission"
        );
        let mut rover = Rover::builder().map(Arc::new(map)).build()?;
        let report = rover.travel(
            self.start.x,
            self.start.y,
            self.start.heading.as_str(),
            &self.commands,
        )?;
        info!(%report, "mission finished");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rover_core::CommandError;

    #[test]
    fn default_mission_loops_the_border() {
        let report = MissionConfig::default().run().unwrap();
        assert_eq!(report.to_string(), "True, N, (3,3)");
    }

    #[test]
    fn parses_full_mission() {
        let config = MissionConfig::from_toml_str(
            r#"
            commands = "AALAARALAAA"

            [map]
            width = 4
            height = 5

            [start]
            x = 0
            y = 0
            heading = "E"
            "#,
        )
        .unwrap();
        assert_eq!(config.map, MapConfig { width: 4, height: 5 });
        assert_eq!(config.run().unwrap().to_string(), "False, N, (3,4)");
    }

    #[test]
    fn missing_tables_use_defaults() {
        let config = MissionConfig::from_toml_str(r#"commands = "RA""#).unwrap();
        assert_eq!(config.map, MapConfig::default());
        assert_eq!(config.start, StartConfig::default());
        assert_eq!(config.run().unwrap().to_string(), "True, E, (1,0)");
    }

    #[test]
    fn missing_commands_is_a_parse_error() {
        let err = MissionConfig::from_toml_str("[map]\nwidth = 3\n").unwrap_err();
        assert!(matches!(err, MissionError::Parse(_)));
    }

    #[test]
    fn zero_sized_map_is_rejected() {
        let mut config = MissionConfig::default();
        config.map.width = 0;
        assert!(matches!(
            config.run(),
            Err(MissionError::Map(MapError::EmptyMap))
        ));
    }

    #[test]
    fn bad_heading_surfaces_as_travel_error() {
        let mut config = MissionConfig::default();
        config.start.heading = "Up".to_string();
        assert!(matches!(
            config.run(),
            Err(MissionError::Travel(TravelError::InvalidHeading(_)))
        ));
    }

    #[test]
    fn empty_commands_surface_as_travel_error() {
        let mut config = MissionConfig::default();
        config.commands.clear();
        assert!(matches!(
            config.run(),
            Err(MissionError::Travel(TravelError::Command(
                CommandError::EmptyInput
            )))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = MissionConfig::load(Path::new("/nonexistent/mission.toml")).unwrap_err();
        assert!(matches!(err, MissionError::Io { .. }));
        assert!(err.to_string().contains("mission.toml"));
    }
}
