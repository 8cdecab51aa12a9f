//! Build and drive a fully-initialized simulation scenario
//!
//! `Scenario` is the single owner of the simulation state: the body
//! collection, the warp lattice, the parameters and the engine flags.
//! The outer frame loop calls [`Scenario::step`] once per frame and then
//! reads a [`FrameView`]; input handling talks to it through the
//! authoring and pause methods between steps.

use log::{debug, info, trace};

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::ScenarioResult;
use crate::simulation::engine::{Engine, RunState};
use crate::simulation::forces::{accumulate_accels, ForceAccumulator};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};
use crate::simulation::warp::WarpLattice;

/// What a single frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub advanced: bool, // physics ran (not paused)
    pub grew: bool, // the authored body gained mass
    pub damped: usize, // (i, j) pairs hit by collision damping
}

/// Read-only per-frame snapshot for the renderer
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub bodies: &'a [Body],
    pub lattice: &'a WarpLattice,
    pub paused: bool,
    pub steps: u64,
}

#[derive(Debug, Clone)]
pub struct Scenario {
    engine: Engine,
    parameters: Parameters,
    system: System,
    forces: ForceAccumulator,
    lattice: WarpLattice,
}

impl Scenario {
    /// Start paused with the lattice already warped by `bodies`
    pub fn new(parameters: Parameters, bodies: Vec<Body>, lattice: WarpLattice) -> Self {
        let parameters = parameters.sanitized();
        let mut scenario = Self {
            engine: Engine::default(),
            forces: ForceAccumulator::from_params(&parameters),
            parameters,
            system: System::new(bodies),
            lattice,
        };
        scenario.lattice.warp(&scenario.system, &scenario.parameters);
        scenario
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> ScenarioResult<Self> {
        let parameters: Parameters = cfg.parameters.into();

        // Bodies: map `BodyConfig` -> runtime `Body`, clamping bad values
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                let body = Body::new(
                    NVec3::from(bc.x),
                    NVec3::from(bc.v),
                    bc.m,
                    bc.density.unwrap_or(parameters.default_density),
                    &parameters,
                )
                .with_color(bc.color)
                .with_glow(bc.glow);
                if bc.launched {
                    body
                } else {
                    body.parked()
                }
            })
            .collect();

        let lattice = WarpLattice::new(cfg.lattice.size, cfg.lattice.divisions)?;
        debug!(
            "built scenario: {} bodies, {}x{} lattice",
            bodies.len(),
            lattice.divisions(),
            lattice.divisions()
        );

        let mut scenario = Self::new(parameters, bodies, lattice);
        if !cfg.paused {
            scenario.resume();
        }
        Ok(scenario)
    }

    // =========================================================================================
    // Frame step
    // =========================================================================================

    /// Run one frame. `dt` is the wall-clock frame time and only drives
    /// authoring growth; physics advances by one fixed step when running.
    /// The lattice is re-warped whether or not the simulation is paused.
    pub fn step(&mut self, dt: f64) -> StepReport {
        let grew = self.grow_authored(dt);

        let (advanced, damped) = match self.engine.state {
            RunState::Running => {
                let damped = semi_implicit_euler(&mut self.system, &self.forces, &self.parameters);
                (true, damped)
            }
            RunState::Paused => (false, 0),
        };

        self.lattice.warp(&self.system, &self.parameters);

        trace!(
            "step {}: {} active bodies, {} damped pairs",
            self.system.steps,
            self.system.active_count(),
            damped
        );

        StepReport {
            advanced,
            grew,
            damped,
        }
    }

    fn grow_authored(&mut self, dt: f64) -> bool {
        if !(self.engine.authoring && self.engine.grow) {
            return false;
        }
        let parameters = &self.parameters;
        self.system
            .bodies
            .last_mut()
            .map(|b| b.grow(dt, parameters))
            .unwrap_or(false)
    }

    // =========================================================================================
    // Pause / resume
    // =========================================================================================

    pub fn toggle_pause(&mut self) -> RunState {
        self.engine.state = self.engine.state.toggled();
        info!(
            "Simulation {}",
            if self.engine.state.is_paused() { "PAUSED" } else { "RESUMED" }
        );
        self.engine.state
    }

    pub fn pause(&mut self) {
        if !self.engine.state.is_paused() {
            self.toggle_pause();
        }
    }

    pub fn resume(&mut self) {
        if self.engine.state.is_paused() {
            self.toggle_pause();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.engine.state.is_paused()
    }

    pub fn run_state(&self) -> RunState {
        self.engine.state
    }

    // =========================================================================================
    // Authoring
    // =========================================================================================

    /// Spawn a seed body at `x` moving with `v` and start authoring it.
    /// Ignored while another body is being authored.
    pub fn begin_authoring(&mut self, x: NVec3, v: NVec3) -> bool {
        if self.engine.authoring {
            return false;
        }
        let mut body = Body::seed(x, &self.parameters);
        body.v = v;
        info!(
            "Started creating object. Initial mass: {:e}, visual radius: {}",
            body.mass(),
            body.radius()
        );
        self.system.bodies.push(body);
        self.engine.authoring = true;
        self.engine.grow = false;
        true
    }

    /// Grow intent for the next frames
    pub fn set_grow(&mut self, grow: bool) {
        self.engine.grow = grow && self.engine.authoring;
    }

    pub fn is_authoring(&self) -> bool {
        self.engine.authoring
    }

    pub fn authored(&self) -> Option<&Body> {
        if self.engine.authoring {
            self.system.bodies.last()
        } else {
            None
        }
    }

    /// Move the authored body
    pub fn nudge_authored(&mut self, delta: NVec3) -> bool {
        if !self.engine.authoring {
            return false;
        }
        match self.system.bodies.last_mut() {
            Some(b) => {
                b.x += delta;
                true
            }
            None => false,
        }
    }

    /// Give the authored body a launch velocity before releasing it
    pub fn set_authored_velocity(&mut self, v: NVec3) -> bool {
        if !self.engine.authoring {
            return false;
        }
        match self.system.bodies.last_mut() {
            Some(b) => {
                b.v = v;
                true
            }
            None => false,
        }
    }

    /// Launch the authored body; its mass is fixed from here on
    pub fn finish_authoring(&mut self) -> Option<&Body> {
        if !self.engine.authoring {
            return None;
        }
        self.engine.authoring = false;
        self.engine.grow = false;

        let body = self.system.bodies.last_mut()?;
        body.launch();
        info!(
            "Launched object. Final mass: {:e}, visual radius: {}",
            body.mass(),
            body.radius()
        );
        Some(&*body)
    }

    /// Drop the authored body without launching it
    pub fn cancel_authoring(&mut self) -> Option<Body> {
        if !self.engine.authoring {
            return None;
        }
        self.engine.authoring = false;
        self.engine.grow = false;

        let body = self.system.bodies.pop();
        debug!("cancelled authoring, {} bodies remain", self.system.bodies.len());
        body
    }

    // =========================================================================================
    // Body collection
    // =========================================================================================

    /// Insert a body. While authoring it goes in front of the authored
    /// body so that one stays last.
    pub fn add_body(&mut self, body: Body) -> usize {
        let bodies = &mut self.system.bodies;
        if self.engine.authoring && !bodies.is_empty() {
            let index = bodies.len() - 1;
            bodies.insert(index, body);
            index
        } else {
            bodies.push(body);
            bodies.len() - 1
        }
    }

    pub fn remove_body(&mut self, index: usize) -> Option<Body> {
        if index >= self.system.bodies.len() {
            return None;
        }
        if self.engine.authoring && index == self.system.bodies.len() - 1 {
            return self.cancel_authoring();
        }
        Some(self.system.bodies.remove(index))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn lattice(&self) -> &WarpLattice {
        &self.lattice
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Swap in new parameters; the force model and every body radius follow them
    pub fn set_parameters(&mut self, parameters: Parameters) {
        self.parameters = parameters.sanitized();
        self.forces = ForceAccumulator::from_params(&self.parameters);
        for body in self.system.bodies.iter_mut() {
            body.update_radius(&self.parameters);
        }
    }

    /// Current gravitational acceleration on every body (m/s^2), without
    /// touching any state
    pub fn accelerations(&self) -> Vec<NVec3> {
        accumulate_accels(&self.forces.gravity, &self.system)
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            bodies: &self.system.bodies,
            lattice: &self.lattice,
            paused: self.engine.state.is_paused(),
            steps: self.system.steps,
        }
    }
}
