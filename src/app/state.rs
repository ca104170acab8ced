// src/app/state.rs

use serde::{Deserialize, Serialize};

use crate::{
    config::{AreaExponent, ColorMode, GroupingMode, Timeframe},
    utils::AppInstant,
};

/// User-chosen heatmap parameters. Persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub timeframe: Timeframe,
    pub grouping: GroupingMode,
    pub area_exponent: AreaExponent,
    pub color_mode: ColorMode,
}

#[derive(Clone)]
pub(crate) struct RunningState;

#[derive(Clone)]
pub(crate) struct LoadingState {
    pub(crate) started: AppInstant,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self {
            started: AppInstant::now(),
        }
    }
}

pub(crate) enum AppState {
    Loading(LoadingState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState::default())
    }
}
