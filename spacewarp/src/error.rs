//! Errors raised while building a scenario.
//!
//! The physics itself never fails: bad masses and densities are clamped.
//! Only a lattice with no usable geometry is rejected.

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("lattice size must be finite and positive, got {0}")]
    LatticeSize(f64),
    #[error("lattice needs at least one division")]
    LatticeDivisions,
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
