use {
    crate::{
        app::{App, LoadingState},
        config::{
            AreaExponent, ColorMode, GroupingMode, Timeframe, constants::AREA_EXPONENT_STEP,
        },
        domain::ViewportSize,
        ui::{
            UI_CONFIG, UI_TEXT, UiStyleExt, render_legend, render_loading,
            styles::{change_with_icon, get_change_color},
        },
    },
    eframe::egui::{
        Align, CentralPanel, Color32, Context, FontId, Layout, RichText, Slider,
        TopBottomPanel,
    },
    strum::IntoEnumIterator,
};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.top_panel_frame();
        let before = self.selectors;

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. TIMEFRAME
                    ui.label_subheader(&UI_TEXT.tb_timeframe);
                    for tf in Timeframe::iter() {
                        if ui
                            .interactive_label(
                                &tf.to_string(),
                                self.selectors.timeframe == tf,
                                UI_CONFIG.colors.label,
                                FontId::proportional(13.0),
                            )
                            .clicked()
                        {
                            self.selectors.timeframe = tf;
                        }
                    }

                    ui.separator();

                    // 2. GROUPING
                    ui.label_subheader(&UI_TEXT.tb_grouping);
                    for mode in GroupingMode::iter() {
                        ui.selectable_value(&mut self.selectors.grouping, mode, mode.to_string());
                    }

                    ui.separator();

                    // 3. COLOUR MODE
                    ui.label_subheader(&UI_TEXT.tb_color_mode);
                    for mode in ColorMode::iter() {
                        ui.selectable_value(&mut self.selectors.color_mode, mode, mode.to_string());
                    }

                    ui.separator();

                    // 4. AREA EXPONENT
                    ui.label_subheader(&UI_TEXT.tb_area);
                    let mut exponent = self.selectors.area_exponent.value();
                    ui.add(
                        Slider::new(&mut exponent, 0.0..=1.0)
                            .step_by(AREA_EXPONENT_STEP)
                            .show_value(false),
                    );
                    self.selectors.area_exponent = AreaExponent::new(exponent);
                    ui.label_subdued(self.selectors.area_exponent.to_string());

                    ui.separator();
                    ui.checkbox(&mut self.show_legend, UI_TEXT.tb_legend.as_str());

                    // 5. AGGREGATE CHANGE (right aligned)
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let change = self
                            .heatmap_view
                            .layout()
                            .and_then(|layout| layout.market_change);
                        ui.label(
                            RichText::new(change_with_icon(change))
                                .strong()
                                .color(get_change_color(change)),
                        );
                        ui.label_subdued(format!(
                            "{} ({})",
                            UI_TEXT.tb_market, self.selectors.timeframe
                        ));
                    });
                });
            });

        if self.selectors != before {
            self.log_selection_change(&before);
        }
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.bottom_panel_frame();

        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if self.show_legend {
                        if let Some(layout) = self.heatmap_view.layout() {
                            render_legend(ui, &layout.legend);
                        }
                        ui.separator();
                    }

                    ui.metric(&UI_TEXT.sb_source, self.data_source, Color32::WHITE);
                    ui.separator();
                    let rows = if self.bad_rows > 0 {
                        format!(
                            "{} ({} {})",
                            self.items.len(),
                            self.bad_rows,
                            UI_TEXT.sb_bad_rows
                        )
                    } else {
                        self.items.len().to_string()
                    };
                    ui.metric(&UI_TEXT.sb_rows, &rows, Color32::WHITE);
                    ui.separator();
                    let tiles = self
                        .heatmap_view
                        .layout()
                        .map(|layout| format!("{} @ {}", layout.leaves.len(), layout.viewport))
                        .unwrap_or_else(|| "-".to_string());
                    ui.metric(&UI_TEXT.sb_tiles, &tiles, Color32::WHITE);
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context, loading: Option<&LoadingState>) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| match loading {
                Some(state) => {
                    // Keeps the legend live while rows are on their way
                    let size = ui.available_size();
                    self.heatmap_view.refresh(
                        &self.items,
                        self.data_generation,
                        true,
                        self.selectors,
                        ViewportSize::new(size.x.round() as f64, size.y.round() as f64),
                    );
                    render_loading(ui, state);
                }
                None => self.heatmap_view.show(
                    ui,
                    &self.items,
                    self.data_generation,
                    false,
                    self.selectors,
                ),
            });
    }
}
