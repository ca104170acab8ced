mod phases;
mod root;
mod state;

pub(crate) use {
    phases::PhaseView,
    state::{AppState, LoadingState, RunningState},
};

pub use {root::App, state::Selectors};
