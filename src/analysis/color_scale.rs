//! Discrete colour bands for percent change.
//!
//! Bands are assigned by value order against six thresholds at
//! `±scale`, `±0.66·scale` and `±0.33·scale`. Unknown change is neutral.

use std::str::FromStr;

use anyhow::{Result, anyhow};
use colorgrad::Gradient;
use eframe::egui::Color32;

use crate::{
    config::{
        HEATMAP_CONFIG, Timeframe,
        constants::{BAND_FRACTIONS, CHANGE_CLAMP_PCT, DEFAULT_SCALE},
    },
    models::{BandThresholds, ColorBand, LegendEntry, TileShade},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    thresholds: BandThresholds,
}

impl ColorScale {
    pub fn new(scale: f64) -> Self {
        let [f33, f66] = BAND_FRACTIONS;
        Self {
            thresholds: BandThresholds {
                scale,
                negative_100: -scale,
                negative_66: -scale * f66,
                negative_33: -scale * f33,
                positive_33: scale * f33,
                positive_66: scale * f66,
                positive_100: scale,
            },
        }
    }

    pub fn for_timeframe(timeframe: Timeframe) -> Self {
        Self::new(timeframe.scale())
    }

    /// Free-form label lookup; unknown labels get the default scale.
    pub fn for_label(label: &str) -> Self {
        let scale = Timeframe::from_str(label.trim())
            .map(|tf| tf.scale())
            .unwrap_or(DEFAULT_SCALE);
        Self::new(scale)
    }

    pub fn thresholds(&self) -> BandThresholds {
        self.thresholds
    }

    pub fn band(&self, change: Option<f64>) -> ColorBand {
        let t = &self.thresholds;
        match change {
            Some(c) if !c.is_nan() => {
                if c <= t.negative_66 {
                    ColorBand::Worst
                } else if c <= t.negative_33 {
                    ColorBand::SecondWorst
                } else if c < 0.0 {
                    ColorBand::ThirdWorst
                } else if c < t.positive_33 {
                    ColorBand::Neutral
                } else if c < t.positive_66 {
                    ColorBand::ThirdBest
                } else if c < t.scale {
                    ColorBand::SecondBest
                } else {
                    ColorBand::Best
                }
            }
            _ => ColorBand::Neutral,
        }
    }

    pub fn color(&self, change: Option<f64>) -> Color32 {
        band_color(self.band(change))
    }

    /// Swatches for the legend, worst to best. The neutral swatch is labelled 0.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        let t = &self.thresholds;
        [
            t.negative_100,
            t.negative_66,
            t.negative_33,
            0.0,
            t.positive_33,
            t.positive_66,
            t.positive_100,
        ]
        .into_iter()
        .zip(HEATMAP_CONFIG.band_colors)
        .map(|(threshold, color)| LegendEntry { threshold, color })
        .collect()
    }
}

pub fn band_color(band: ColorBand) -> Color32 {
    HEATMAP_CONFIG.band_colors[band.index()]
}

/// Continuous red/green ramp keyed on clamped change.
pub struct ChangeGradient {
    loss: colorgrad::LinearGradient,
    gain: colorgrad::LinearGradient,
}

impl ChangeGradient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            loss: build_ramp(&HEATMAP_CONFIG.loss_gradient)?,
            gain: build_ramp(&HEATMAP_CONFIG.gain_gradient)?,
        })
    }

    pub fn base_color(&self, clamped_change: f64) -> Color32 {
        let intensity = (clamped_change.abs() / CHANGE_CLAMP_PCT).min(1.0) as f32;
        let ramp = if clamped_change < 0.0 {
            &self.loss
        } else {
            &self.gain
        };
        to_egui_color(ramp.at(intensity))
    }

    pub fn shade(&self, clamped_change: f64) -> TileShade {
        let base = self.base_color(clamped_change);
        let offset = HEATMAP_CONFIG.shade_offset;
        TileShade {
            lighter: adjust(base, offset),
            base,
            darker: adjust(base, -offset),
        }
    }
}

fn build_ramp(colors: &[&str]) -> Result<colorgrad::LinearGradient> {
    colorgrad::GradientBuilder::new()
        .html_colors(colors)
        .build::<colorgrad::LinearGradient>()
        .map_err(|e| anyhow!("failed to build change gradient {:?}: {}", colors, e))
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgb(rgba8[0], rgba8[1], rgba8[2])
}

/// Shift every channel by `amount`, saturating at 0 and 255.
pub fn adjust(color: Color32, amount: i16) -> Color32 {
    let shift = |v: u8| (v as i16 + amount).clamp(0, 255) as u8;
    Color32::from_rgb(shift(color.r()), shift(color.g()), shift(color.b()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn thresholds_follow_the_scale() {
        let t = ColorScale::for_timeframe(Timeframe::H24).thresholds();
        assert_eq!(t.scale, 8.0);
        assert_eq!(t.negative_100, -8.0);
        assert!((t.negative_66 + 5.28).abs() < 1e-9);
        assert!((t.positive_33 - 2.64).abs() < 1e-9);
        assert_eq!(t.positive_100, 8.0);
    }

    #[test]
    fn unknown_label_uses_default_scale() {
        assert_eq!(ColorScale::for_label("1Y").thresholds().scale, DEFAULT_SCALE);
        assert_eq!(ColorScale::for_label("7D").thresholds().scale, 24.0);
    }

    #[test]
    fn band_boundaries_are_ordered_by_value() {
        let s = ColorScale::new(10.0);
        let t = s.thresholds();
        let eps = 1e-9;

        assert_eq!(s.band(Some(-50.0)), ColorBand::Worst);
        assert_eq!(s.band(Some(t.negative_66)), ColorBand::Worst);
        assert_eq!(s.band(Some(t.negative_66 + eps)), ColorBand::SecondWorst);
        assert_eq!(s.band(Some(t.negative_33)), ColorBand::SecondWorst);
        assert_eq!(s.band(Some(t.negative_33 + eps)), ColorBand::ThirdWorst);
        assert_eq!(s.band(Some(-eps)), ColorBand::ThirdWorst);
        assert_eq!(s.band(Some(0.0)), ColorBand::Neutral);
        assert_eq!(s.band(Some(t.positive_33 - eps)), ColorBand::Neutral);
        assert_eq!(s.band(Some(t.positive_33)), ColorBand::ThirdBest);
        assert_eq!(s.band(Some(t.positive_66 - eps)), ColorBand::ThirdBest);
        assert_eq!(s.band(Some(t.positive_66)), ColorBand::SecondBest);
        assert_eq!(s.band(Some(t.scale - eps)), ColorBand::SecondBest);
        assert_eq!(s.band(Some(t.scale)), ColorBand::Best);
    }

    #[test]
    fn thresholds_keep_float_products_of_the_scale() {
        // 10 * 0.66 is 6.6000000000000005, so -6.6 sits just inside the second worst band
        let s = ColorScale::new(10.0);
        assert!(s.thresholds().negative_66 < -6.6);
        assert_eq!(s.band(Some(-6.6)), ColorBand::SecondWorst);
        assert_eq!(s.band(Some(3.3)), ColorBand::Neutral);
    }

    #[test]
    fn twenty_percent_on_the_daily_scale_is_best() {
        let s = ColorScale::for_timeframe(Timeframe::H24);
        assert_eq!(s.band(Some(20.0)), ColorBand::Best);
        assert_eq!(s.color(Some(20.0)), Color32::from_rgb(8, 153, 80));
    }

    #[test]
    fn unknown_change_is_neutral() {
        let s = ColorScale::for_timeframe(Timeframe::H6);
        assert_eq!(s.band(None), ColorBand::Neutral);
        assert_eq!(s.band(Some(f64::NAN)), ColorBand::Neutral);
        assert_eq!(s.color(None), Color32::from_rgb(61, 61, 61));
    }

    #[test]
    fn band_is_monotonic_in_change() {
        for tf in Timeframe::iter() {
            let s = ColorScale::for_timeframe(tf);
            let mut prev = ColorBand::Worst;
            let mut x = -150.0;
            while x <= 150.0 {
                let band = s.band(Some(x));
                assert!(band >= prev, "{tf}: band dropped at {x}");
                prev = band;
                x += 0.05;
            }
        }
    }

    #[test]
    fn legend_has_seven_swatches_with_zero_in_the_middle() {
        let entries = ColorScale::for_timeframe(Timeframe::H6).legend_entries();
        let labels: Vec<String> = entries.iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            vec!["-4%", "-2.6%", "-1.3%", "0%", "1.3%", "2.6%", "4%"]
        );
        assert_eq!(entries[0].color, band_color(ColorBand::Worst));
        assert_eq!(entries[6].color, band_color(ColorBand::Best));
    }

    #[test]
    fn gradient_ramps_and_shades() {
        let g = ChangeGradient::new().unwrap();
        assert_eq!(g.base_color(0.0), Color32::from_rgb(100, 150, 100));
        assert_eq!(g.base_color(100.0), Color32::from_rgb(0, 205, 0));
        assert_eq!(g.base_color(-100.0), Color32::from_rgb(205, 0, 0));

        let shade = g.shade(-100.0);
        assert_eq!(shade.lighter, Color32::from_rgb(225, 20, 20));
        assert_eq!(shade.darker, Color32::from_rgb(185, 0, 0));
    }

    #[test]
    fn adjust_saturates() {
        assert_eq!(
            adjust(Color32::from_rgb(250, 5, 100), 20),
            Color32::from_rgb(255, 25, 120)
        );
        assert_eq!(
            adjust(Color32::from_rgb(250, 5, 100), -20),
            Color32::from_rgb(230, 0, 80)
        );
    }
}
