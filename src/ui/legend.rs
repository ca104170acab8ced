use {
    crate::{config::HEATMAP_CONFIG, models::Legend, ui::UiStyleExt},
    eframe::egui::{RichText, Sense, Ui, vec2},
};

/// One row of seven swatches, worst to best, each labelled with its tipping point.
pub(crate) fn render_legend(ui: &mut Ui, legend: &Legend) {
    ui.horizontal(|ui| {
        ui.label_subdued(legend.timeframe.to_string());
        ui.spacing_mut().item_spacing.x = 1.0;
        for entry in &legend.entries {
            ui.vertical(|ui| {
                let (rect, _) = ui.allocate_exact_size(
                    vec2(
                        HEATMAP_CONFIG.legend_swatch_width,
                        HEATMAP_CONFIG.legend_swatch_height,
                    ),
                    Sense::hover(),
                );
                ui.painter().rect_filled(rect, 0.0, entry.color);
                ui.label(
                    RichText::new(entry.label())
                        .small()
                        .color(HEATMAP_CONFIG.color_text_subdued),
                );
            });
        }
    });
}
