use {
    eframe::{
        Frame, Storage,
        egui::{Context, Key, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{
        mem,
        sync::{mpsc, mpsc::Receiver},
    },
    strum::IntoEnumIterator,
};

use crate::{
    Cli,
    app::{AppState, LoadingState, PhaseView, RunningState, Selectors},
    config::{ColorMode, DF, GroupingMode, Timeframe},
    data::{count_bad_rows, fetch_market_data},
    domain::MarketItem,
    ui::{HeatmapView, UI_CONFIG},
    utils::AppInstant,
};

#[cfg(not(target_arch = "wasm32"))]
use {std::thread, tokio::runtime::Runtime};

type MarketData = (Vec<MarketItem>, &'static str);

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) selectors: Selectors, // persists across sessions.
    pub(crate) show_legend: bool,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    pub(crate) items: Vec<MarketItem>,
    /// Bumped every time `items` is replaced.
    #[serde(skip)]
    pub(crate) data_generation: u64,
    #[serde(skip)]
    pub(crate) data_source: &'static str,
    #[serde(skip)]
    pub(crate) bad_rows: usize,
    #[serde(skip)]
    pub(crate) heatmap_view: HeatmapView,
    #[serde(skip)]
    pub(crate) data_rx: Option<Receiver<MarketData>>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            show_legend: true,
            state: AppState::default(),
            items: Vec::new(),
            data_generation: 0,
            data_source: "-",
            bad_rows: 0,
            heatmap_view: HeatmapView::new(),
            data_rx: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("Restored selectors: {:?}", app.selectors);
        }

        app.heatmap_view = HeatmapView::new();
        app.state = AppState::Loading(LoadingState::default());

        let (data_tx, data_rx) = mpsc::channel();
        app.data_rx = Some(data_rx);

        #[cfg(not(target_arch = "wasm32"))]
        {
            let args_clone = args.clone();
            thread::spawn(move || {
                let data = match Runtime::new() {
                    Ok(rt) => rt.block_on(fetch_market_data(&args_clone)),
                    Err(e) => {
                        log::error!("Failed to create runtime for data loading: {}", e);
                        (Vec::new(), "no data")
                    }
                };
                let _ = data_tx.send(data);
            });
        }

        #[cfg(target_arch = "wasm32")]
        {
            let args_clone = args.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let data = fetch_market_data(&args_clone).await;
                let _ = data_tx.send(data);
            });
        }

        app
    }

    /// Swap in a fresh set of rows. Everything downstream recomputes from scratch.
    pub(crate) fn replace_items(&mut self, items: Vec<MarketItem>, source: &'static str) {
        self.bad_rows = count_bad_rows(&items);
        self.items = items;
        self.data_source = source;
        self.data_generation += 1;
    }

    pub(crate) fn log_selection_change(&self, _before: &Selectors) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("SELECTION {:?} -> {:?}", _before, self.selectors);
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let before = self.selectors;

        ctx.input(|i| {
            let number_keys = [Key::Num1, Key::Num2, Key::Num3, Key::Num4, Key::Num5];
            for (key, tf) in number_keys.into_iter().zip(Timeframe::iter()) {
                if i.key_pressed(key) {
                    self.selectors.timeframe = tf;
                }
            }
            if i.key_pressed(Key::G) {
                self.selectors.grouping = match self.selectors.grouping {
                    GroupingMode::Divided => GroupingMode::Combined,
                    GroupingMode::Combined => GroupingMode::Divided,
                };
            }
            if i.key_pressed(Key::C) {
                self.selectors.color_mode = match self.selectors.color_mode {
                    ColorMode::Bands => ColorMode::Gradient,
                    ColorMode::Gradient => ColorMode::Bands,
                };
            }
            if i.key_pressed(Key::L) {
                self.show_legend = !self.show_legend;
            }
        });

        if self.selectors != before {
            self.log_selection_change(&before);
        }
    }

    pub(crate) fn tick_loading_state(
        &mut self,
        ctx: &Context,
        state: &mut LoadingState,
    ) -> AppState {
        if let Some(next_state) = self.finalize_loading_if_ready() {
            return next_state;
        }
        ctx.request_repaint();
        self.handle_global_shortcuts(ctx);
        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx, Some(state));
        AppState::Loading(state.clone())
    }

    pub(crate) fn finalize_loading_if_ready(&mut self) -> Option<AppState> {
        let (items, source) = self.data_rx.as_ref()?.try_recv().ok()?;

        #[cfg(debug_assertions)]
        if DF.log_data_load {
            log::info!("{} rows received from {}", items.len(), source);
        }

        self.replace_items(items, source);
        self.data_rx = None;
        Some(AppState::Running(RunningState))
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        let start = AppInstant::now();

        self.handle_global_shortcuts(ctx);
        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx, None);

        let frame_time = start.elapsed().as_micros();
        if frame_time > 50_000 && DF.log_performance {
            log::warn!("🐢 SLOW FRAME: {}us", frame_time);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("💾 SAVE [App]: {:?}", self.selectors);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
