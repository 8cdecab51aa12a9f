//! Fixed-divisor time integration
//!
//! The step is semi-implicit Euler with constant divisors instead of a
//! time step: velocities are kicked by `a / accelerate_divisor`, then
//! positions drift by `v / integrator_divisor`. Simulated speed is tied
//! to how often `step` is called, and trajectories only reproduce when
//! those divisors are kept.

use super::forces::ForceAccumulator;
use super::params::Parameters;
use super::states::System;

/// Drift: `x += v / divisor` for every active body
pub fn drift(sys: &mut System, divisor: f64) {
    for b in sys.bodies.iter_mut().filter(|b| b.is_active()) {
        b.x += b.v / divisor;
    }
}

/// Advance the system by one step: kick (forces + collision damping),
/// then drift. Returns the number of damped pairs from the kick.
pub fn semi_implicit_euler(sys: &mut System, forces: &ForceAccumulator, params: &Parameters) -> usize {
    if sys.bodies.is_empty() {
        return 0;
    }

    // Kick: velocities only, positions are still those of step n
    let damped = forces.apply(sys);

    // Drift with the updated velocities
    drift(sys, params.integrator_divisor);

    sys.steps += 1;
    damped
}
