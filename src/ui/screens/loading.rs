use {
    crate::{
        app::LoadingState,
        config::HEATMAP_CONFIG,
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{RichText, Ui},
};

pub(crate) fn render_loading(ui: &mut Ui, state: &LoadingState) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.heading(
            RichText::new(&UI_TEXT.ls_title)
                .size(24.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.add_space(10.0);
        ui.label(
            RichText::new(&UI_TEXT.ls_main)
                .italics()
                .color(HEATMAP_CONFIG.color_text_subdued),
        );
        ui.add_space(20.0);
        ui.spinner();
        ui.add_space(5.0);
        ui.label(
            RichText::new(format!("{:.1}s", state.started.elapsed().as_secs_f32()))
                .small()
                .color(HEATMAP_CONFIG.color_text_subdued),
        );
    });
}
