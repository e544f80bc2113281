//! Beacon - dual-representation color engine for the lighthouse scene picker.
//!
//! The crate owns the slider registry and the synchronized RGB/HSV color
//! state. Discrete key presses come in through [`BeaconApp::on_key_press`];
//! the external 3-D renderer reads [`SliderManager::sliders`] for rectangle
//! generation and [`SliderManager::lighthouse_color`] for tinting, once per
//! frame, and performs no color arithmetic itself.

mod app;
mod color;
mod config;
mod constants;
mod event;
mod geometry;
mod keymap;
mod manager;
mod slider;

pub use app::BeaconApp;
pub use color::{hsv_to_rgb, rgb_to_hsv, Color, Hsv, Rgb};
pub use config::{AppConfig, ConfigError, LogLevel, CONFIG_VERSION};
pub use constants::SLIDER_SIZE;
pub use event::KeyCode;
pub use geometry::{Point, Size};
pub use keymap::{KeyMap, SliderBinding, KEY_STEP};
pub use manager::{ChangedGroup, SliderManager};
pub use slider::{Slider, SliderRole};
