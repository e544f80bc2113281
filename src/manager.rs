//! The slider registry and the RGB/HSV synchronization protocol.
//!
//! One authoritative color, two slider groups viewing it. A key event
//! mutates exactly one slider; the changed group comes back as a
//! [`ChangedGroup`] and the caller propagates into the *other* group before
//! publishing. Exactly one propagation direction runs per event, so
//! repeated lossy round-trips cannot drift the color.

use crate::color::{hsv_to_rgb, rgb_to_hsv, Color, Hsv, Rgb};
use crate::constants::{
    HUE_MAX, PANEL_ORIGIN, PERCENT_MAX, RGB_MAX, SLIDER_LENGTH, SLIDER_SIZE, SLIDER_SPACING,
};
use crate::event::KeyCode;
use crate::geometry::{Point, Size};
use crate::keymap::KeyMap;
use crate::slider::{Slider, SliderRole, BACKGROUND_START, SLIDER_COUNT};

/// Which representation a key event actually moved.
///
/// Returned from [`SliderManager::update_slider_sizes`] instead of being
/// stored as flags, so a caller holding the result can only run one
/// propagation direction for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangedGroup {
    /// Nothing moved: the key was unbound, or the slider was already pinned
    /// at the edge of its track.
    None,
    /// A red/green/blue slider moved.
    Rgb,
    /// A hue/saturation/value slider moved.
    Hsv,
}

impl ChangedGroup {
    /// Whether any slider width actually changed.
    pub fn is_changed(self) -> bool {
        !matches!(self, ChangedGroup::None)
    }
}

/// Owns the twelve sliders and the synchronized color state.
pub struct SliderManager {
    keymap: KeyMap,
    sliders: Vec<Slider>,
    rgb: Rgb,
    hsv: Hsv,
    lighthouse_color: Color,
}

impl SliderManager {
    /// Build the fixed slider registry with the reference defaults.
    pub fn new(keymap: KeyMap) -> Self {
        let mut manager = Self {
            keymap,
            sliders: Vec::with_capacity(SLIDER_COUNT),
            rgb: Rgb::default(),
            hsv: Hsv::default(),
            lighthouse_color: Color::MID_GRAY,
        };
        manager.push_rgb_sliders();
        manager.push_hsv_sliders();
        manager.push_background_sliders();
        manager
    }

    /// Slots 0-2: the RGB column, stacked below the panel origin.
    fn push_rgb_sliders(&mut self) {
        let (x, mut y) = PANEL_ORIGIN;
        let size = Size::new(SLIDER_SIZE, SLIDER_LENGTH);
        for color in [
            Color::rgb(1.0, 0.0, 0.0),
            Color::rgb(0.0, 1.0, 0.0),
            Color::rgb(0.0, 0.0, 1.0),
        ] {
            self.sliders
                .push(Slider::new(Point::new(x, y), size, color, 0.0));
            y += SLIDER_LENGTH + SLIDER_SPACING;
        }
    }

    /// Slots 3-5: the HSV column, one track-width to the right.
    fn push_hsv_sliders(&mut self) {
        let x = PANEL_ORIGIN.0 + SLIDER_SIZE + SLIDER_SPACING;
        let size = Size::new(SLIDER_SIZE, SLIDER_LENGTH);
        for (slot, color) in [
            Color::rgb(0.2, 0.2, 0.2),
            Color::rgb(0.2, 0.2, 0.2),
            Color::rgb(0.25, 0.25, 0.25),
        ]
        .into_iter()
        .enumerate()
        {
            let y = self.sliders[slot].position.y;
            self.sliders
                .push(Slider::new(Point::new(x, y), size, color, 0.0));
        }
    }

    /// Slots 6-11: one static backdrop per foreground slider. Created once,
    /// never resynchronized.
    fn push_background_sliders(&mut self) {
        for slot in 0..BACKGROUND_START {
            let color = if slot < 3 {
                Color::rgb(0.2, 0.2, 0.2)
            } else {
                Color::rgb(0.25, 0.25, 0.25)
            };
            let foreground = self.sliders[slot];
            self.sliders
                .push(Slider::new(foreground.position, foreground.size, color, 0.0));
        }
    }

    /// Apply one key press to the registry.
    ///
    /// Unbound keys, and presses whose clamped width equals the old width,
    /// report [`ChangedGroup::None`] and leave all state untouched.
    pub fn update_slider_sizes(&mut self, key: KeyCode) -> ChangedGroup {
        let Some(binding) = self.keymap.binding_for_key(key) else {
            return ChangedGroup::None;
        };

        let slider = &mut self.sliders[binding.role.index()];
        let old_width = slider.size.width;
        slider.size.width = (old_width + binding.delta).clamp(0.0, SLIDER_SIZE);
        if slider.size.width == old_width {
            return ChangedGroup::None;
        }

        log::trace!(
            "{:?} width {} -> {}",
            binding.role,
            old_width,
            slider.size.width
        );
        if binding.role.is_rgb() {
            ChangedGroup::Rgb
        } else {
            ChangedGroup::Hsv
        }
    }

    /// Re-derive `value` from width for the six foreground sliders.
    /// Idempotent; background panels are not touched.
    pub fn update_slider_values(&mut self) {
        for slider in &mut self.sliders[..BACKGROUND_START] {
            slider.value = slider.size.width / SLIDER_SIZE;
        }
    }

    /// Overwrite the RGB sliders from the current HSV slider values.
    pub fn update_rgb_sliders(&mut self) {
        self.hsv = self.assemble_hsv();
        self.rgb = hsv_to_rgb(self.hsv);

        let channels = [self.rgb.red, self.rgb.green, self.rgb.blue];
        for (role, channel) in [SliderRole::Red, SliderRole::Green, SliderRole::Blue]
            .into_iter()
            .zip(channels)
        {
            let ratio = channel as f32 / RGB_MAX;
            let slider = &mut self.sliders[role.index()];
            slider.size.width = ratio * SLIDER_SIZE;
            slider.value = ratio;
        }
    }

    /// Overwrite the HSV sliders from the current RGB slider values.
    pub fn update_hsv_sliders(&mut self) {
        self.rgb = self.assemble_rgb();
        self.hsv = rgb_to_hsv(self.rgb);

        let ratios = [
            self.hsv.hue as f32 / HUE_MAX,
            self.hsv.saturation as f32 / PERCENT_MAX,
            self.hsv.value as f32 / PERCENT_MAX,
        ];
        for (role, ratio) in [SliderRole::Hue, SliderRole::Saturation, SliderRole::Value]
            .into_iter()
            .zip(ratios)
        {
            let slider = &mut self.sliders[role.index()];
            slider.size.width = ratio * SLIDER_SIZE;
            slider.value = ratio;
        }
    }

    /// Publish the lighthouse color from the RGB slider values.
    pub fn set_color(&mut self) {
        self.lighthouse_color = Color::rgb(
            self.sliders[SliderRole::Red.index()].value,
            self.sliders[SliderRole::Green.index()].value,
            self.sliders[SliderRole::Blue.index()].value,
        );
    }

    /// The color the renderer tints the lighthouse with.
    pub fn lighthouse_color(&self) -> Color {
        self.lighthouse_color
    }

    /// Read-only view of all twelve sliders, in fixed registry order.
    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    /// Current integer RGB view of the color.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Current integer HSV view of the color.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    fn assemble_rgb(&self) -> Rgb {
        Rgb::new(
            (self.sliders[SliderRole::Red.index()].value * RGB_MAX) as i32,
            (self.sliders[SliderRole::Green.index()].value * RGB_MAX) as i32,
            (self.sliders[SliderRole::Blue.index()].value * RGB_MAX) as i32,
        )
    }

    fn assemble_hsv(&self) -> Hsv {
        // A full-width hue slider reads as 360 degrees; the hue circle
        // stores that as 0.
        let hue =
            (self.sliders[SliderRole::Hue.index()].value * HUE_MAX) as i32 % HUE_MAX as i32;
        Hsv::new(
            hue,
            (self.sliders[SliderRole::Saturation.index()].value * PERCENT_MAX) as i32,
            (self.sliders[SliderRole::Value.index()].value * PERCENT_MAX) as i32,
        )
    }
}
