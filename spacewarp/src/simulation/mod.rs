pub mod constants;
pub mod states;
pub mod params;
pub mod engine;
pub mod collision;
pub mod forces;
pub mod integrator;
pub mod warp;
pub mod scenario;
