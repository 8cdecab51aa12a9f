//! Force / acceleration contributors for the simulation
//!
//! Defines the [`Acceleration`] trait, direct Newtonian gravity between
//! launched bodies, and the [`ForceAccumulator`] that folds gravity and
//! collision damping into body velocities once per step.

use crate::simulation::collision::CollisionDamping;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &System, out: &mut [NVec3]);
}

/// Newtonian gravity with a separation floor instead of softening.
///
/// Positions are in simulation units; they are scaled to metres by
/// `distance_scale` before the inverse-square law is applied, so the
/// result is in m/s^2 with SI `G`.
#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub distance_scale: f64, // metres per unit
    pub min_distance: f64, // separation floor (units)
}

impl NewtonianGravity {
    pub fn from_params(params: &Parameters) -> Self {
        Self {
            G: params.G,
            distance_scale: params.distance_scale,
            min_distance: params.min_distance,
        }
    }

    /// Acceleration on `bi` caused by `bj`: `G m_j / d^2` toward `bj`.
    ///
    /// Independent of `bi`'s own mass. Separations below `min_distance`
    /// use the floored distance; coincident bodies have no direction and
    /// get no pull.
    pub fn pair_acceleration(&self, bi: &Body, bj: &Body) -> NVec3 {
        let r = bj.x - bi.x;
        let dist = r.norm();
        if dist == 0.0 || !dist.is_finite() {
            return NVec3::zeros();
        }

        let direction = r / dist;
        let dist_m = dist.max(self.min_distance) * self.distance_scale;

        direction * (self.G * bj.mass() / (dist_m * dist_m))
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec3]) {
        let n = sys.bodies.len();

        // All ordered pairs; inactive bodies neither feel nor exert a pull
        for i in 0..n {
            let bi = &sys.bodies[i];
            if !bi.is_active() {
                continue;
            }
            for j in 0..n {
                let bj = &sys.bodies[j];
                if i == j || !bj.is_active() {
                    continue;
                }
                out[i] += self.pair_acceleration(bi, bj);
            }
        }
    }
}

/// Sum every acceleration into a fresh buffer, one entry per body
pub fn accumulate_accels(term: &dyn Acceleration, sys: &System) -> Vec<NVec3> {
    let mut out = vec![NVec3::zeros(); sys.bodies.len()];
    term.acceleration(sys, &mut out);
    out
}

/// Applies gravity kicks and collision damping straight into velocities.
///
/// For each active body `i` and each other active body `j`, in index
/// order: `v_i += a_ij / accelerate_divisor`, then if the two overlap
/// `v_i *= damping`. The damping is one-sided and repeats every step
/// while the overlap lasts. Positions are never touched.
#[derive(Debug, Clone)]
pub struct ForceAccumulator {
    pub gravity: NewtonianGravity,
    pub collision: CollisionDamping,
    pub accelerate_divisor: f64,
}

impl ForceAccumulator {
    pub fn from_params(params: &Parameters) -> Self {
        Self {
            gravity: NewtonianGravity::from_params(params),
            collision: CollisionDamping::new(params.collision_damping),
            accelerate_divisor: params.accelerate_divisor,
        }
    }

    /// One force pass over `sys`. Returns the number of damped (i, j) pairs.
    pub fn apply(&self, sys: &mut System) -> usize {
        let n = sys.bodies.len();
        let mut damped = 0;

        for i in 0..n {
            if !sys.bodies[i].is_active() {
                continue;
            }
            for j in 0..n {
                if i == j || !sys.bodies[j].is_active() {
                    continue;
                }

                let (a, damping) = {
                    let bi = &sys.bodies[i];
                    let bj = &sys.bodies[j];
                    (
                        self.gravity.pair_acceleration(bi, bj),
                        self.collision.damping(bi, bj),
                    )
                };

                let bi = &mut sys.bodies[i];
                bi.v += a / self.accelerate_divisor;
                if let Some(factor) = damping {
                    bi.v *= factor;
                    damped += 1;
                }
            }
        }

        damped
    }
}
