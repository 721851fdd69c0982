//! The bodies of the solar system and their fixed per-frame motion.
//!
//! Everything here is deliberately non-physical: radii, distances and
//! rotation rates are scene units tuned for looks. The one nod to reality is
//! that each planet's orbital sweep is a base rate divided by its orbital
//! period in Earth years, so the outer planets crawl.

use cgmath::Rad;

/// Radius of the sun sphere.
pub const SUN_RADIUS: f32 = 30.0;
/// The sun's self-rotation per frame, radians.
pub const SUN_SPIN: f32 = 0.001;
pub const SUN_TEXTURE: &str = "sun.png";

pub const ASTEROID_TEXTURE: &str = "asteroid.png";
pub const COMET_TEXTURE: &str = "comet.png";

/// Static description of a planet: everything needed to build its body and
/// orbit pivot.
#[derive(Debug, Clone, Copy)]
pub struct PlanetSpec {
    pub name: &'static str,
    pub radius: f32,
    /// Distance from the sun along +Z at sweep angle zero.
    pub orbit_radius: f32,
    /// Self-rotation per frame, radians.
    pub spin: f32,
    /// Orbital sweep per frame, radians.
    pub orbit: f32,
    pub texture: &'static str,
}

#[rustfmt::skip]
pub const PLANETS: [PlanetSpec; 8] = [
    PlanetSpec { name: "mercury", radius: 1.4, orbit_radius: 35.0,  spin: 0.02,  orbit: 0.004 / 0.24,  texture: "mercury.png" },
    PlanetSpec { name: "venus",   radius: 3.4, orbit_radius: 43.0,  spin: 0.005, orbit: 0.004 / 0.62,  texture: "venus.png" },
    PlanetSpec { name: "earth",   radius: 4.0, orbit_radius: 53.0,  spin: 0.01,  orbit: 0.004 / 1.0,   texture: "earth.png" },
    PlanetSpec { name: "mars",    radius: 3.1, orbit_radius: 63.0,  spin: 0.01,  orbit: 0.004 / 1.88,  texture: "mars.png" },
    PlanetSpec { name: "jupiter", radius: 8.0, orbit_radius: 80.0,  spin: 0.05,  orbit: 0.006 / 11.86, texture: "jupiter.png" },
    PlanetSpec { name: "saturn",  radius: 6.5, orbit_radius: 97.0,  spin: 0.04,  orbit: 0.02 / 29.46,  texture: "saturn.png" },
    PlanetSpec { name: "uranus",  radius: 4.0, orbit_radius: 110.0, spin: 0.03,  orbit: 0.02 / 84.0,   texture: "uranus.png" },
    PlanetSpec { name: "neptune", radius: 3.6, orbit_radius: 120.0, spin: 0.03,  orbit: 0.03 / 164.8,  texture: "neptune.png" },
];

/// A rotation angle advanced by a fixed amount every frame.
///
/// Both the bodies' self-rotation and the pivots' orbital sweep are plain
/// accumulators; they never wrap, never scale with frame time, and only ever
/// grow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub angle: Rad<f32>,
    pub delta: Rad<f32>,
}

impl Spin {
    pub fn new(delta: f32) -> Self {
        Self {
            angle: Rad(0.0),
            delta: Rad(delta),
        }
    }

    /// Advance by one frame.
    pub fn step(&mut self) {
        self.angle += self.delta;
    }
}
