use {
    crate::{
        analysis::{PipelineInput, compute_layout},
        app::Selectors,
        config::{HEATMAP_CONFIG, constants::font::GROUP_TITLE_FONT},
        domain::{MarketItem, Rect, ViewportSize},
        models::{DetailTier, HeatmapLayout, LeafTile, TileShade},
        ui::{UI_TEXT, ViewportTracker, styles::get_change_color},
        utils::{format_change, format_mcap_millions},
    },
    eframe::egui::{
        self, Align2, Color32, FontId, Mesh, Painter, Pos2, Response, RichText, Sense, Shape,
        Stroke, StrokeKind, Ui, pos2, vec2,
    },
};

/// Everything a layout depends on besides the rows themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LayoutKey {
    generation: u64,
    loading: bool,
    selectors: Selectors,
    viewport: ViewportSize,
}

/// Owns the viewport tracker and the last computed layout. The layout is only
/// ever replaced whole.
#[derive(Default)]
pub struct HeatmapView {
    tracker: ViewportTracker,
    key: Option<LayoutKey>,
    layout: Option<HeatmapLayout>,
    recomputes: u64,
}

impl HeatmapView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(&self) -> Option<&HeatmapLayout> {
        self.layout.as_ref()
    }

    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    /// Recompute when any input changed since the last call. `generation` must
    /// change whenever `items` does. Returns `true` if a new layout was built.
    pub fn refresh(
        &mut self,
        items: &[MarketItem],
        generation: u64,
        loading: bool,
        selectors: Selectors,
        viewport: ViewportSize,
    ) -> bool {
        self.tracker.observe(viewport);
        let key = LayoutKey {
            generation,
            loading,
            selectors,
            viewport: self.tracker.current(),
        };
        if self.key == Some(key) {
            return false;
        }

        let input = PipelineInput {
            items,
            loading,
            timeframe: selectors.timeframe,
            grouping: selectors.grouping,
            area_exponent: selectors.area_exponent,
            color_mode: selectors.color_mode,
            viewport: key.viewport,
        };
        self.layout = Some(compute_layout(&input));
        self.key = Some(key);
        self.recomputes += 1;
        true
    }

    /// Fill the remaining space of `ui` with the heatmap.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        items: &[MarketItem],
        generation: u64,
        loading: bool,
        selectors: Selectors,
    ) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let surface = response.rect;
        // Whole pixels, so sub-pixel jitter between frames is not a resize
        let viewport = ViewportSize::new(
            surface.width().round() as f64,
            surface.height().round() as f64,
        );
        self.refresh(items, generation, loading, selectors, viewport);

        let Some(layout) = &self.layout else {
            return;
        };

        if layout.is_empty() {
            if !loading {
                let msg = if viewport.is_degenerate() {
                    &UI_TEXT.cp_waiting_for_space
                } else {
                    &UI_TEXT.cp_no_data
                };
                painter.text(
                    surface.center(),
                    Align2::CENTER_CENTER,
                    msg,
                    FontId::proportional(14.0),
                    HEATMAP_CONFIG.color_text_subdued,
                );
            }
            return;
        }

        let origin = surface.min;
        for leaf in &layout.leaves {
            paint_leaf(&painter, origin, leaf);
        }
        for group in &layout.groups {
            let r = to_screen(origin, &group.rect);
            painter.with_clip_rect(r).text(
                r.left_top() + vec2(4.0, 0.5),
                Align2::LEFT_TOP,
                group.title(),
                FontId::proportional(GROUP_TITLE_FONT),
                HEATMAP_CONFIG.color_group_title,
            );
        }

        self.show_hover(&painter, &response, origin, layout);
    }

    fn show_hover(
        &self,
        painter: &Painter,
        response: &Response,
        origin: Pos2,
        layout: &HeatmapLayout,
    ) {
        let Some(pointer) = response.hover_pos() else {
            return;
        };
        let local = pointer - origin;
        let Some(leaf) = layout.leaf_at(local.x as f64, local.y as f64) else {
            return;
        };

        painter.rect_stroke(
            to_screen(origin, &leaf.rect),
            0.0,
            Stroke::new(
                HEATMAP_CONFIG.tile_hover_stroke_width,
                HEATMAP_CONFIG.color_tile_hover_stroke,
            ),
            StrokeKind::Inside,
        );

        let timeframe = layout.legend.timeframe;
        response.clone().on_hover_ui_at_pointer(|ui| {
            ui.label(RichText::new(&leaf.name).strong());
            ui.label(format!("{}: {}", UI_TEXT.tt_category, leaf.category));
            ui.label(
                RichText::new(format!(
                    "{} ({}): {}",
                    UI_TEXT.tt_change,
                    timeframe,
                    format_change(leaf.percent_change)
                ))
                .color(get_change_color(leaf.percent_change)),
            );
            ui.label(format!(
                "{}: {}",
                UI_TEXT.tt_market_cap,
                format_mcap_millions(leaf.market_cap)
            ));
        });
    }
}

fn to_screen(origin: Pos2, rect: &Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + vec2(rect.x as f32, rect.y as f32),
        vec2(rect.width as f32, rect.height as f32),
    )
}

fn paint_leaf(painter: &Painter, origin: Pos2, leaf: &LeafTile) {
    let r = to_screen(origin, &leaf.rect);
    if leaf.shade.is_flat() {
        painter.rect_filled(r, 0.0, leaf.shade.base);
    } else {
        painter.add(Shape::mesh(shaded_mesh(r, &leaf.shade)));
    }

    let lines: Vec<String> = match leaf.detail {
        DetailTier::Full => vec![
            leaf.name.clone(),
            format_change(leaf.percent_change),
            format_mcap_millions(leaf.market_cap),
        ],
        DetailTier::Compact => vec![leaf.name.clone(), format_change(leaf.percent_change)],
        DetailTier::Blank => return,
    };

    let line_height = leaf.font_size * 1.2;
    let top = r.center().y - line_height * (lines.len() as f32 - 1.0) / 2.0;
    let clipped = painter.with_clip_rect(r);
    for (i, line) in lines.into_iter().enumerate() {
        clipped.text(
            pos2(r.center().x, top + line_height * i as f32),
            Align2::CENTER_CENTER,
            line,
            FontId::proportional(leaf.font_size),
            HEATMAP_CONFIG.color_tile_text,
        );
    }
}

/// Light centre, base colour at the edge midpoints, dark corners.
fn shaded_mesh(r: egui::Rect, shade: &TileShade) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(r.center(), shade.lighter);

    let ring: [(Pos2, Color32); 8] = [
        (r.left_top(), shade.darker),
        (r.center_top(), shade.base),
        (r.right_top(), shade.darker),
        (r.right_center(), shade.base),
        (r.right_bottom(), shade.darker),
        (r.center_bottom(), shade.base),
        (r.left_bottom(), shade.darker),
        (r.left_center(), shade.base),
    ];
    for (pos, color) in ring {
        mesh.colored_vertex(pos, color);
    }
    for i in 0..8u32 {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % 8);
    }
    mesh
}
