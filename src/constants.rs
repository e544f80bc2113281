//! Global constants for the beacon slider engine.

/// Full track width of a slider; a slider's width encodes its value as
/// `width / SLIDER_SIZE`.
pub const SLIDER_SIZE: f32 = 200.0;

/// Maximum RGB channel value.
pub const RGB_MAX: f32 = 255.0;

/// Degrees in the full hue circle.
pub const HUE_MAX: f32 = 360.0;

/// Degrees per hue sector (the circle splits into six).
pub const HUE_SECTOR: f32 = 60.0;

/// Saturation and value percentage scale.
pub const PERCENT_MAX: f32 = 100.0;

/// Height of each slider panel.
pub const SLIDER_LENGTH: f32 = 50.0;

/// Gap between stacked slider panels.
pub const SLIDER_SPACING: f32 = 10.0;

/// Top-left corner of the first (red) slider panel.
pub const PANEL_ORIGIN: (f32, f32) = (20.0, 20.0);
