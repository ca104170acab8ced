/// Colour scale used when a timeframe label is not recognised.
pub const DEFAULT_SCALE: f64 = 3.0;

/// Band thresholds sit at these fractions of the scale (mirrored for losses).
pub const BAND_FRACTIONS: [f64; 2] = [0.33, 0.66];

/// Percent change is clamped to +/- this for colour intensity.
pub const CHANGE_CLAMP_PCT: f64 = 100.0;

/// Slider starts in-between "unified" and "realistic".
pub const DEFAULT_AREA_EXPONENT: f64 = 0.7;

/// Step of the area-exponent slider in the toolbar.
pub const AREA_EXPONENT_STEP: f64 = 0.01;

pub mod font {
    /// Leaf font size interpolates between these by relative weight.
    pub const MIN_LEAF_FONT: f32 = 8.0;
    pub const MAX_LEAF_FONT: f32 = 12.0;
    /// Font may never exceed rect width / this.
    pub const WIDTH_DIVISOR: f32 = 5.0;
    /// Font may never exceed rect height / this.
    pub const HEIGHT_DIVISOR: f32 = 3.0;
    pub const GROUP_TITLE_FONT: f32 = 9.0;
}
