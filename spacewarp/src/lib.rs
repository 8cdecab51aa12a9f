pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, System, NVec3, Rgba};
pub use simulation::params::Parameters;
pub use simulation::engine::{Engine, RunState};
pub use simulation::forces::{Acceleration, ForceAccumulator, NewtonianGravity};
pub use simulation::collision::CollisionDamping;
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::warp::WarpLattice;
pub use simulation::scenario::{Scenario, FrameView, StepReport};

pub use configuration::config::{ParametersConfig, LatticeConfig, BodyConfig, ScenarioConfig};

pub use error::ScenarioError;

pub use benchmark::benchmark::{bench_step, bench_warp};
