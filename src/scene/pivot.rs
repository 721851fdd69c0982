//! Orbit pivots.
//!
//! A pivot is an invisible parent transform sitting at the origin. Rotating
//! it about +Y carries its single child body around the sun; the child's own
//! transform (orbit offset plus self-rotation) stays local.

use crate::data_structures::instance::Instance;
use crate::scene::bodies::Spin;

#[derive(Debug, Clone, Copy)]
pub struct OrbitPivot {
    pub sweep: Spin,
}

impl OrbitPivot {
    pub fn new(orbit_delta: f32) -> Self {
        Self {
            sweep: Spin::new(orbit_delta),
        }
    }

    /// Advance the orbital sweep by one frame.
    pub fn step(&mut self) {
        self.sweep.step();
    }

    /// World transform of the child given its local transform:
    /// `world = pivot * local`.
    pub fn carry(&self, local: &Instance) -> Instance {
        &Instance::from_angle_y(self.sweep.angle) * local
    }
}
