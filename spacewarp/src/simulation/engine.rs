//! Runtime engine state
//!
//! Holds the pause state machine and the interactive authoring flags
//! that the step driver in `scenario` consults every frame.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused, // warp still updates, bodies frozen
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        }
    }

    pub fn is_paused(self) -> bool {
        self == RunState::Paused
    }
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub state: RunState, // paused or running
    pub authoring: bool, // last body is under interactive creation
    pub grow: bool, // grow intent, sampled once per frame
}
