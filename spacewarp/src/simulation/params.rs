//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds every tunable constant the physics core reads:
//! - gravitational constant and speed-of-light analogue (`G`, `c`),
//! - body defaults (density, seed mass, visual size ratio),
//! - the fixed kick/drift divisors and collision damping,
//! - the warp field scaling and authoring growth rate

use super::constants::*;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub c: f64, // speed of light analogue, only used by the warp gate
    pub default_density: f64, // substituted for non-positive density
    pub default_seed_mass: f64, // seed mass and warp reference mass
    pub size_ratio: f64, // physical radius / visual radius
    pub distance_scale: f64, // metres per simulation unit
    pub min_distance: f64, // separation floor (units)
    pub warp_min_distance: f64, // planar floor for the warp falloff (units)
    pub accelerate_divisor: f64, // per-kick velocity divisor
    pub integrator_divisor: f64, // per-step position divisor
    pub collision_damping: f64, // velocity multiplier on overlap
    pub warp_scale: f64, // warp amplitude constant
    pub com_tilt_factor: f64, // lattice shift per unit centre-of-mass height
    pub growth_rate: f64, // authored mass growth per second
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: G_SI,
            c: C_SI,
            default_density: DEFAULT_DENSITY,
            default_seed_mass: DEFAULT_SEED_MASS,
            size_ratio: DEFAULT_SIZE_RATIO,
            distance_scale: DISTANCE_SCALE,
            min_distance: MIN_DISTANCE,
            warp_min_distance: WARP_MIN_DISTANCE,
            accelerate_divisor: ACCELERATE_DIVISOR,
            integrator_divisor: INTEGRATOR_DIVISOR,
            collision_damping: COLLISION_DAMPING,
            warp_scale: WARP_SCALE,
            com_tilt_factor: COM_TILT_FACTOR,
            growth_rate: GROWTH_RATE,
        }
    }
}

impl Parameters {
    /// Replace values that would make the core divide by zero or produce
    /// NaN with the reference defaults. Nothing here is ever reported as an error.
    pub fn sanitized(mut self) -> Self {
        let reference = Parameters::default();

        self.c = positive_or(self.c, reference.c);
        self.default_density = positive_or(self.default_density, reference.default_density);
        self.default_seed_mass = positive_or(self.default_seed_mass, reference.default_seed_mass);
        self.size_ratio = positive_or(self.size_ratio, reference.size_ratio);
        self.distance_scale = positive_or(self.distance_scale, reference.distance_scale);
        self.min_distance = positive_or(self.min_distance, reference.min_distance);
        self.warp_min_distance = positive_or(self.warp_min_distance, reference.warp_min_distance);
        self.accelerate_divisor = positive_or(self.accelerate_divisor, reference.accelerate_divisor);
        self.integrator_divisor = positive_or(self.integrator_divisor, reference.integrator_divisor);

        if !self.G.is_finite() {
            self.G = reference.G;
        }
        if !self.collision_damping.is_finite() {
            self.collision_damping = reference.collision_damping;
        }
        if !self.warp_scale.is_finite() {
            self.warp_scale = reference.warp_scale;
        }
        if !self.com_tilt_factor.is_finite() {
            self.com_tilt_factor = reference.com_tilt_factor;
        }
        if !self.growth_rate.is_finite() || self.growth_rate < 0.0 {
            self.growth_rate = reference.growth_rate;
        }
        self
    }
}

/// `value` if it is finite and strictly positive, `fallback` otherwise
pub fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
