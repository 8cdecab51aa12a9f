//! Overlap test and the inelastic velocity damping rule.
//!
//! This is a heuristic, not a conserving collision: only the querying
//! body is damped, and it is damped again on every step the overlap
//! persists. Bodies never merge.

use crate::simulation::states::Body;

#[derive(Debug, Clone, Copy)]
pub struct CollisionDamping {
    pub factor: f64, // velocity multiplier, -0.2 reverses and dissipates
}

impl CollisionDamping {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// Spheres of visual radius overlap when the radii sum exceeds the separation
    pub fn overlaps(bi: &Body, bj: &Body) -> bool {
        bi.radius() + bj.radius() > bi.distance_to(bj)
    }

    /// Multiplier for `bi`'s velocity when checked against `bj`
    pub fn damping(&self, bi: &Body, bj: &Body) -> Option<f64> {
        Self::overlaps(bi, bj).then_some(self.factor)
    }
}
