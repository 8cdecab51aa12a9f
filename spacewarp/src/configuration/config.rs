//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and the fixed-step tuning knobs
//! - [`LatticeConfig`]    – size and resolution of the warp lattice
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every parameter and lattice field is optional and falls back to the
//! reference value, so a scenario file may list bodies only.
//!
//! # YAML format
//!
//! ```yaml
//! paused: false
//!
//! parameters:
//!   G: 6.6743e-11           # gravitational constant
//!   c: 299792458.0          # only gates the warp falloff
//!   accelerate_divisor: 96  # velocity += acc / divisor
//!   integrator_divisor: 94  # position += velocity / divisor
//!   collision_damping: -0.2
//!
//! lattice:
//!   size: 20000.0
//!   divisions: 25
//!
//! bodies:
//!   - x: [ -5000.0, 650.0, -350.0 ]
//!     v: [ 0.0, 0.0, -500.0 ]
//!     m: 5.97219e22
//!     density: 5515.0
//!     color: [ 0.0, 1.0, 1.0, 1.0 ]
//!   - x: [ 0.0, 0.0, -350.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!     m: 1.989e25
//!     density: 5515.0
//!     color: [ 1.0, 0.929, 0.176, 1.0 ]
//!     glow: true
//! ```

use serde::Deserialize;

use crate::simulation::constants::*;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Rgba, DEFAULT_COLOR};

/// Physical constants and fixed-step tuning
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64, // gravitational constant
    pub c: f64, // speed of light analogue
    pub default_density: f64, // kg/m^3 for bodies without one
    pub default_seed_mass: f64, // kg, also the warp reference mass
    pub size_ratio: f64, // physical / visual radius
    pub distance_scale: f64, // metres per unit
    pub min_distance: f64, // separation floor (units)
    pub warp_min_distance: f64, // planar floor for the warp falloff (units)
    pub accelerate_divisor: f64, // per-kick velocity divisor
    pub integrator_divisor: f64, // per-step position divisor
    pub collision_damping: f64, // velocity multiplier on overlap
    pub warp_scale: f64, // warp amplitude constant
    pub com_tilt_factor: f64, // lattice shift per unit centre-of-mass height
    pub growth_rate: f64, // authored mass growth per second
}

impl Default for ParametersConfig {
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

impl From<ParametersConfig> for Parameters {
    fn from(cfg: ParametersConfig) -> Self {
        Parameters {
            G: cfg.G,
            c: cfg.c,
            default_density: cfg.default_density,
            default_seed_mass: cfg.default_seed_mass,
            size_ratio: cfg.size_ratio,
            distance_scale: cfg.distance_scale,
            min_distance: cfg.min_distance,
            warp_min_distance: cfg.warp_min_distance,
            accelerate_divisor: cfg.accelerate_divisor,
            integrator_divisor: cfg.integrator_divisor,
            collision_damping: cfg.collision_damping,
            warp_scale: cfg.warp_scale,
            com_tilt_factor: cfg.com_tilt_factor,
            growth_rate: cfg.growth_rate,
        }
        .sanitized()
    }
}

/// Warp lattice geometry
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LatticeConfig {
    pub size: f64, // edge length in units
    pub divisions: usize, // cells per edge
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            size: LATTICE_SIZE,
            divisions: LATTICE_DIVISIONS,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 3], // initial position in units
    pub v: [f64; 3], // initial velocity in units per step
    pub m: f64, // mass in kg, non-positive falls back to the seed mass
    #[serde(default)]
    pub density: Option<f64>, // kg/m^3, defaults to `default_density`
    #[serde(default = "default_color")]
    pub color: Rgba,
    #[serde(default)]
    pub glow: bool,
    #[serde(default = "default_true")]
    pub launched: bool, // false parks the body outside the physics
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default = "default_true")]
    pub paused: bool, // start paused, like the interactive viewer
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub lattice: LatticeConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }
}

fn default_true() -> bool {
    true
}

fn default_color() -> Rgba {
    DEFAULT_COLOR
}
