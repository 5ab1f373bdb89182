//! Reference travel scenarios.
//!
//! Each [`Scenario`] pins the exact report string a rover must produce.
//! The routes on the 4×5 map are the canonical acceptance cases; the 4×4
//! route is the default mission.

use rover_core::Heading;
use rover_map::PlanetaryMap;

/// One end-to-end travel case with its expected report.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
    pub commands: &'static str,
    pub expected: &'static str,
}

impl Scenario {
    /// Build the map this scenario runs on.
    ///
    /// # Panics
    ///
    /// Panics if the fixture dimensions are zero, which none are.
    pub fn map(&self) -> PlanetaryMap {
        PlanetaryMap::new(self.width, self.height).expect("fixture map dimensions are non-zero")
    }
}

/// The 4×5 map used by the acceptance routes.
pub fn reference_map() -> PlanetaryMap {
    PlanetaryMap::new(4, 5).expect("4x5 is a valid map")
}

/// All reference scenarios.
pub fn reference_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "reaches_3_3",
            width: 4,
            height: 5,
            x: 0,
            y: 0,
            heading: Heading::East,
            commands: "AALAARALA",
            expected: "True, N, (3,3)",
        },
        Scenario {
            name: "reaches_north_edge",
            width: 4,
            height: 5,
            x: 0,
            y: 0,
            heading: Heading::East,
            commands: "AALAARALAA",
            expected: "True, N, (3,4)",
        },
        Scenario {
            name: "leaves_north_edge",
            width: 4,
            height: 5,
            x: 0,
            y: 0,
            heading: Heading::East,
            commands: "AALAARALAAA",
            expected: "False, N, (3,4)",
        },
        Scenario {
            name: "border_loop",
            width: 4,
            height: 4,
            x: 0,
            y: 3,
            heading: Heading::South,
            commands: "AAALAAALAAA",
            expected: "True, N, (3,3)",
        },
        Scenario {
            name: "leaves_west_edge_immediately",
            width: 4,
            height: 4,
            x: 0,
            y: 2,
            heading: Heading::West,
            commands: "ARA",
            expected: "False, W, (0,2)",
        },
    ]
}
