//! Clipworks core: pure panel state machine and view-model helpers.
mod effect;
mod job;
mod msg;
mod state;
mod strings;
mod update;
mod view_model;

pub use effect::Effect;
pub use job::{Feature, JobFailure, JobParams, Mode, Precondition, Provider, Scale};
pub use msg::Msg;
pub use state::{JobPhase, PanelState, StatusLevel, StatusMessage, PROGRESS_MAX};
pub use update::update;
pub use view_model::PanelViewModel;
