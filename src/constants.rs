//! Sizing, color, and styling constants for the grayscale picker.

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Thumb radius on sliders
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for the swatch
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Width of the thumb label column beside each slider
pub const THUMB_LABEL_WIDTH: f32 = 14.0;

/// Preview swatch edge length
pub const SWATCH_SIZE: f32 = 32.0;

/// Value font size
pub const VALUE_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Checkerboard cell size (for translucent track backgrounds)
#[cfg(feature = "alpha")]
pub const CHECKER_CELL: f64 = 5.0;
