//! Per-event orchestration of the slider synchronization cycle.

use crate::config::AppConfig;
use crate::event::KeyCode;
use crate::manager::{ChangedGroup, SliderManager};

/// Application state driving the slider engine from key events.
///
/// The renderer is external: each frame it reads `manager().sliders()` for
/// rectangle generation and `manager().lighthouse_color()` for tinting the
/// 3-D geometry.
pub struct BeaconApp {
    manager: SliderManager,
}

impl BeaconApp {
    /// Build the app from a configuration (which supplies the keymap).
    pub fn new(config: &AppConfig) -> Self {
        Self {
            manager: SliderManager::new(config.keymap.clone()),
        }
    }

    /// Process one key press to completion.
    ///
    /// Mutates at most one slider, re-derives the foreground values,
    /// propagates into the other representation (never both directions) and
    /// republishes the lighthouse color. Returns whether anything visible
    /// changed.
    pub fn on_key_press(&mut self, key: KeyCode) -> bool {
        let changed = self.manager.update_slider_sizes(key);
        if !changed.is_changed() {
            return false;
        }

        self.manager.update_slider_values();
        if changed == ChangedGroup::Rgb {
            self.manager.update_hsv_sliders();
        } else {
            self.manager.update_rgb_sliders();
        }
        self.manager.set_color();
        self.log_debug_info();
        true
    }

    /// Read access to the slider registry and published color.
    pub fn manager(&self) -> &SliderManager {
        &self.manager
    }

    fn log_debug_info(&self) {
        let rgb = self.manager.rgb();
        let hsv = self.manager.hsv();
        log::debug!("RGB: [{}, {}, {}]", rgb.red, rgb.green, rgb.blue);
        log::debug!(
            "HSV: [{} (Hue), {}% (Saturation), {}% (Value)]",
            hsv.hue,
            hsv.saturation,
            hsv.value
        );
    }
}
