//! Spacetime "warp" lattice.
//!
//! A square grid of line segments on the plane `y = initial_y`, drawn as
//! the classic rubber-sheet picture of gravity wells. Each frame every
//! lattice point gets a new height from the bodies above it:
//!
//! ```text
//! y = y0 + sum_b( -warp(b) * rs(b) / d_xz(b) ) - |com_y - y0| * tilt
//! ```
//!
//! with `rs = 2 G m / c^2`, `d_xz` the planar distance in metres (floored
//! at `warp_min_distance` units) and `warp = (m / m_ref) * radius * warp_scale`. A body
//! contributes only where `d_xz > rs`. This is a cosmetic picture, not
//! a relativistic calculation.
//!
//! The x/z coordinates are fixed at construction; only y is rewritten.

use crate::error::ScenarioError;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Schwarzschild radius analogue `2 G m / c^2`, in metres
pub fn schwarzschild_radius(m: f64, params: &Parameters) -> f64 {
    2.0 * params.G * m / (params.c * params.c)
}

/// Vertical dip contributed by one body at lattice coordinates (x, z).
/// Zero when the point lies inside the body's screening radius.
pub fn body_displacement(body: &Body, x: f64, z: f64, params: &Parameters) -> f64 {
    let m = body.mass();
    if m <= 0.0 || body.radius() <= 0.0 {
        return 0.0;
    }

    let dx = body.x.x - x;
    let dz = body.x.z - z;
    let dist_xz = (dx * dx + dz * dz).sqrt().max(params.warp_min_distance);
    let dist_xz_m = dist_xz * params.distance_scale;

    let rs = schwarzschild_radius(m, params);
    if dist_xz_m <= rs {
        return 0.0;
    }

    let warp_factor = (m / params.default_seed_mass) * body.radius() * params.warp_scale;
    -warp_factor * (rs / dist_xz_m)
}

#[derive(Debug, Clone)]
pub struct WarpLattice {
    size: f64, // edge length (units)
    divisions: usize, // cells per edge
    initial_y: f64, // reference plane height
    points: Vec<NVec3>, // segment endpoints, consecutive pairs form a line
}

impl WarpLattice {
    /// Build the flat lattice: `divisions + 1` lines along x, then
    /// `divisions + 1` lines along z, each split into `divisions` segments
    pub fn new(size: f64, divisions: usize) -> Result<Self, ScenarioError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(ScenarioError::LatticeSize(size));
        }
        if divisions == 0 {
            return Err(ScenarioError::LatticeDivisions);
        }

        let step = size / divisions as f64;
        let half = size / 2.0;
        let initial_y = -half * 0.3 + 3.0 * step;

        let mut points = Vec::with_capacity(4 * (divisions + 1) * divisions);

        // x-axis lines
        for z_step in 0..=divisions {
            let z = -half + z_step as f64 * step;
            for x_step in 0..divisions {
                let x_start = -half + x_step as f64 * step;
                points.push(NVec3::new(x_start, initial_y, z));
                points.push(NVec3::new(x_start + step, initial_y, z));
            }
        }

        // z-axis lines
        for x_step in 0..=divisions {
            let x = -half + x_step as f64 * step;
            for z_step in 0..divisions {
                let z_start = -half + z_step as f64 * step;
                points.push(NVec3::new(x, initial_y, z_start));
                points.push(NVec3::new(x, initial_y, z_start + step));
            }
        }

        Ok(Self {
            size,
            divisions,
            initial_y,
            points,
        })
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn divisions(&self) -> usize {
        self.divisions
    }

    pub fn initial_y(&self) -> f64 {
        self.initial_y
    }

    pub fn points(&self) -> &[NVec3] {
        &self.points
    }

    pub fn segments(&self) -> impl Iterator<Item = (NVec3, NVec3)> + '_ {
        self.points.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Global downward shift from the centre-of-mass height
    pub fn tilt(&self, sys: &System, params: &Parameters) -> f64 {
        let com_y = sys.center_of_mass_y(self.initial_y);
        (com_y - self.initial_y).abs() * params.com_tilt_factor
    }

    /// Height of a lattice point at (x, z) for the given bodies
    pub fn height_at(&self, x: f64, z: f64, sys: &System, params: &Parameters) -> f64 {
        let dip: f64 = sys
            .bodies
            .iter()
            .map(|b| body_displacement(b, x, z, params))
            .sum();
        self.initial_y + dip - self.tilt(sys, params)
    }

    /// Recompute every height from the current bodies. Pure in the body
    /// state: calling it twice without changes gives the same lattice.
    pub fn warp(&mut self, sys: &System, params: &Parameters) {
        let tilt = self.tilt(sys, params);
        let y0 = self.initial_y;

        for p in self.points.iter_mut() {
            let dip: f64 = sys
                .bodies
                .iter()
                .map(|b| body_displacement(b, p.x, p.z, params))
                .sum();
            p.y = y0 + dip - tilt;
        }
    }

    /// Lowest and highest point height
    pub fn depth_range(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|p| p.y).fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
    }
}
