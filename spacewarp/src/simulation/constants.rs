//! Reference constants for the simulation.
//!
//! These are the defaults behind [`Parameters`](super::params::Parameters).
//! Every one of them can be overridden from a scenario file.

// ---------------------------------------------------------------------------
// Physical Constants (SI)
// ---------------------------------------------------------------------------
pub const G_SI: f64 = 6.6743e-11; // Gravitational constant (m^3 kg^-1 s^-2)
pub const C_SI: f64 = 299_792_458.0; // Speed of light (m/s)

// ---------------------------------------------------------------------------
// Body Defaults
// ---------------------------------------------------------------------------
pub const DEFAULT_DENSITY: f64 = 3344.0; // kg/m^3, substituted for non-positive density
pub const DEFAULT_SEED_MASS: f64 = 1.0e22; // kg, seed mass of an authored body
pub const DEFAULT_SIZE_RATIO: f64 = 30_000.0; // physical radius (m) / visual radius (units)
pub const RADIUS_FLOOR_NUMERATOR: f64 = 0.1; // radius floor is 0.1 / size_ratio

// ---------------------------------------------------------------------------
// Space / Distance
// ---------------------------------------------------------------------------
pub const DISTANCE_SCALE: f64 = 1000.0; // metres per simulation unit (1 unit = 1 km)
pub const MIN_DISTANCE: f64 = 0.001; // units (1 mm after scaling), floor for pair separation

// ---------------------------------------------------------------------------
// Integration / Collision
// ---------------------------------------------------------------------------
pub const ACCELERATE_DIVISOR: f64 = 96.0; // velocity += acc / divisor per pair kick
pub const INTEGRATOR_DIVISOR: f64 = 94.0; // position += velocity / divisor per step
pub const COLLISION_DAMPING: f64 = -0.2; // velocity multiplier on overlap
pub const GROWTH_RATE: f64 = 1.0; // authored mass growth per second of frame time

// ---------------------------------------------------------------------------
// Warp Lattice
// ---------------------------------------------------------------------------
pub const LATTICE_SIZE: f64 = 20_000.0; // edge length of the square lattice (units)
pub const LATTICE_DIVISIONS: usize = 25; // cells per edge
pub const WARP_SCALE: f64 = 1.0e5; // empirical dip amplitude scaling
pub const WARP_MIN_DISTANCE: f64 = 1.0; // units, planar warp distance floor before scaling
pub const COM_TILT_FACTOR: f64 = 0.1; // global shift per unit of centre-of-mass height
