//! Slider rectangles and the fixed registry roles.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::{Point, Size};

/// Number of sliders in the registry: six foreground, six background.
pub const SLIDER_COUNT: usize = 12;

/// Registry index of the first background panel.
pub const BACKGROUND_START: usize = 6;

/// The color channel a foreground slider edits.
///
/// Roles map onto fixed registry slots 0-5. The renderer relies on that
/// order, so it never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SliderRole {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Value,
}

impl SliderRole {
    /// All roles in registry-slot order.
    pub const ALL: [SliderRole; 6] = [
        SliderRole::Red,
        SliderRole::Green,
        SliderRole::Blue,
        SliderRole::Hue,
        SliderRole::Saturation,
        SliderRole::Value,
    ];

    /// Registry slot for this role.
    pub const fn index(self) -> usize {
        match self {
            SliderRole::Red => 0,
            SliderRole::Green => 1,
            SliderRole::Blue => 2,
            SliderRole::Hue => 3,
            SliderRole::Saturation => 4,
            SliderRole::Value => 5,
        }
    }

    /// Whether the role belongs to the RGB group (slots 0-2).
    pub const fn is_rgb(self) -> bool {
        matches!(self, SliderRole::Red | SliderRole::Green | SliderRole::Blue)
    }
}

/// A UI rectangle whose width encodes a normalized value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    /// Top-left corner.
    pub position: Point,
    /// Extent; `size.width` stays in `[0, SLIDER_SIZE]`.
    pub size: Size,
    /// Display color of the panel.
    pub color: Color,
    /// Normalized value derived from the width, in [0, 1].
    pub value: f32,
}

impl Slider {
    /// Create a slider rectangle.
    pub const fn new(position: Point, size: Size, color: Color, value: f32) -> Self {
        Self {
            position,
            size,
            color,
            value,
        }
    }
}
