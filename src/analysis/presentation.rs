//! Presentation rules layered on top of the geometry.

use crate::{
    config::{
        DETAIL_TIERS,
        constants::font::{HEIGHT_DIVISOR, MAX_LEAF_FONT, MIN_LEAF_FONT, WIDTH_DIVISOR},
    },
    domain::Rect,
    models::DetailTier,
};

pub fn detail_tier(rect: &Rect) -> DetailTier {
    let t = &DETAIL_TIERS;
    if rect.width > t.full_min_width && rect.height > t.full_min_height {
        DetailTier::Full
    } else if rect.width > t.compact_min_width && rect.height > t.compact_min_height {
        DetailTier::Compact
    } else {
        DetailTier::Blank
    }
}

/// Bigger weights read bigger, but text never outgrows its tile.
pub fn leaf_font_size(weight: f64, max_weight: f64, rect: &Rect) -> f32 {
    let relative = if max_weight > 0.0 {
        (weight / max_weight).clamp(0.0, 1.0) as f32
    } else {
        0.0
    };
    let preferred = MIN_LEAF_FONT + (MAX_LEAF_FONT - MIN_LEAF_FONT) * relative;
    preferred
        .min(rect.width as f32 / WIDTH_DIVISOR)
        .min(rect.height as f32 / HEIGHT_DIVISOR)
        .max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_rect_size() {
        assert_eq!(detail_tier(&Rect::new(0.0, 0.0, 81.0, 61.0)), DetailTier::Full);
        assert_eq!(detail_tier(&Rect::new(0.0, 0.0, 80.0, 200.0)), DetailTier::Compact);
        assert_eq!(detail_tier(&Rect::new(0.0, 0.0, 200.0, 60.0)), DetailTier::Compact);
        assert_eq!(detail_tier(&Rect::new(0.0, 0.0, 41.0, 31.0)), DetailTier::Compact);
        assert_eq!(detail_tier(&Rect::new(0.0, 0.0, 40.0, 100.0)), DetailTier::Blank);
        assert_eq!(detail_tier(&Rect::new(0.0, 0.0, 100.0, 30.0)), DetailTier::Blank);
    }

    #[test]
    fn font_scales_with_weight_and_fits_the_tile() {
        let big = Rect::new(0.0, 0.0, 300.0, 300.0);
        assert_eq!(leaf_font_size(10.0, 10.0, &big), 12.0);
        assert_eq!(leaf_font_size(5.0, 10.0, &big), 10.0);
        assert_eq!(leaf_font_size(0.0, 0.0, &big), 8.0);
        assert_eq!(leaf_font_size(10.0, 10.0, &Rect::new(0.0, 0.0, 30.0, 300.0)), 6.0);
        assert_eq!(leaf_font_size(10.0, 10.0, &Rect::new(0.0, 0.0, 300.0, 15.0)), 5.0);
    }
}
