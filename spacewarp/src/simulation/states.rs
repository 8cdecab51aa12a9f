//! Core state types for the simulation.
//!
//! - `Body`   a point mass with a derived visual radius and authoring flags
//! - `System` the ordered body collection (insertion order) plus a step counter
//!
//! Mass, density and radius are private so the radius can never go stale:
//! every mass or density change goes through a setter that re-derives it.

use nalgebra::Vector3;
use std::f64::consts::PI;

use super::params::{positive_or, Parameters};
use super::constants::RADIUS_FLOOR_NUMERATOR;

pub type NVec3 = Vector3<f64>;

/// Opaque RGBA colour carried for the renderer
pub type Rgba = [f32; 4];

pub const DEFAULT_COLOR: Rgba = [1.0, 0.0, 0.0, 1.0];

/// Mass with the default substituted when it is not strictly positive
pub fn sanitize_mass(m: f64, params: &Parameters) -> f64 {
    positive_or(m, params.default_seed_mass)
}

/// Density with the default substituted when it is not strictly positive
pub fn sanitize_density(density: f64, params: &Parameters) -> f64 {
    positive_or(density, params.default_density)
}

/// Visual radius of a sphere of mass `m` and density `density`:
/// `cbrt(3m / (4 pi density)) / size_ratio`, floored at `0.1 / size_ratio`.
///
/// Inputs are sanitized first, so the result is always finite and positive.
pub fn visual_radius(m: f64, density: f64, params: &Parameters) -> f64 {
    let m = sanitize_mass(m, params);
    let density = sanitize_density(density, params);
    let size_ratio = positive_or(params.size_ratio, Parameters::default().size_ratio);

    // Divide first so masses near f64::MAX stay finite
    let physical = (3.0 / (4.0 * PI * density) * m).cbrt();
    let radius = physical / size_ratio;

    if radius.is_finite() && radius > 0.0 {
        radius
    } else {
        RADIUS_FLOOR_NUMERATOR / size_ratio
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec3, // position (units, 1 unit = 1 km)
    pub v: NVec3, // velocity (units per step)
    m: f64, // mass (kg)
    density: f64, // density (kg/m^3)
    radius: f64, // visual radius (units), derived
    pub color: Rgba, // opaque render attribute
    pub glow: bool, // opaque render attribute
    initializing: bool, // under interactive authoring
    launched: bool, // subject to gravity and collision
}

impl Body {
    /// A launched body, ready for physics
    pub fn new(x: NVec3, v: NVec3, m: f64, density: f64, params: &Parameters) -> Self {
        let m = sanitize_mass(m, params);
        let density = sanitize_density(density, params);
        Self {
            x,
            v,
            m,
            density,
            radius: visual_radius(m, density, params),
            color: DEFAULT_COLOR,
            glow: false,
            initializing: false,
            launched: true,
        }
    }

    /// A body under authoring: default seed mass and density, at rest,
    /// excluded from physics until [`Body::launch`]
    pub fn seed(x: NVec3, params: &Parameters) -> Self {
        let mut body = Self::new(
            x,
            NVec3::zeros(),
            params.default_seed_mass,
            params.default_density,
            params,
        );
        body.initializing = true;
        body.launched = false;
        body
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_glow(mut self, glow: bool) -> Self {
        self.glow = glow;
        self
    }

    /// Neither authoring nor launched: excluded from physics but still
    /// counted in the centre of mass
    pub fn parked(mut self) -> Self {
        self.initializing = false;
        self.launched = false;
        self
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn is_initializing(&self) -> bool {
        self.initializing
    }

    pub fn is_launched(&self) -> bool {
        self.launched
    }

    /// Participates in gravity, collision and integration
    pub fn is_active(&self) -> bool {
        self.launched && !self.initializing
    }

    /// Set the mass and re-derive the radius. Ignored once launched.
    pub fn set_mass(&mut self, m: f64, params: &Parameters) -> bool {
        if self.launched {
            return false;
        }
        self.m = sanitize_mass(m, params);
        self.update_radius(params);
        true
    }

    /// Set the density and re-derive the radius. Ignored once launched.
    pub fn set_density(&mut self, density: f64, params: &Parameters) -> bool {
        if self.launched {
            return false;
        }
        self.density = sanitize_density(density, params);
        self.update_radius(params);
        true
    }

    /// Multiplicative growth `m *= 1 + k dt` while authoring, saturating
    /// at `f64::MAX`. Negative or non-finite `dt` counts as no elapsed time.
    pub fn grow(&mut self, dt: f64, params: &Parameters) -> bool {
        if !self.initializing {
            return false;
        }
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let m = self.m * (1.0 + params.growth_rate * dt);
        let m = if m.is_finite() { m } else { f64::MAX };
        self.set_mass(m, params)
    }

    /// Finish authoring. Returns true only on the first transition.
    pub fn launch(&mut self) -> bool {
        if self.launched {
            return false;
        }
        self.initializing = false;
        self.launched = true;
        true
    }

    /// Re-clamp mass and density, then recompute the radius
    pub fn update_radius(&mut self, params: &Parameters) {
        self.m = sanitize_mass(self.m, params);
        self.density = sanitize_density(self.density, params);
        self.radius = visual_radius(self.m, self.density, params);
    }

    pub fn momentum(&self) -> NVec3 {
        self.v * self.m
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.x - self.x).norm()
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // insertion order, last may be under authoring
    pub steps: u64, // completed physics steps
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, steps: 0 }
    }

    /// Total mass of every body not under authoring
    pub fn total_mass(&self) -> f64 {
        self.bodies
            .iter()
            .filter(|b| !b.initializing)
            .map(|b| b.m)
            .sum()
    }

    /// Mass-weighted mean height of every body not under authoring,
    /// or `fallback` when that mass is zero
    pub fn center_of_mass_y(&self, fallback: f64) -> f64 {
        let (weighted, total) = self
            .bodies
            .iter()
            .filter(|b| !b.initializing)
            .fold((0.0, 0.0), |(w, t), b| (w + b.m * b.x.y, t + b.m));

        if total > 0.0 {
            weighted / total
        } else {
            fallback
        }
    }

    pub fn total_momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .filter(|b| b.is_active())
            .map(|b| b.momentum())
            .fold(NVec3::zeros(), |acc, p| acc + p)
    }

    pub fn active_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_active()).count()
    }
}
