//! Customizable key-to-slider mapping.
//!
//! The map is built once and handed to the [`SliderManager`] at
//! construction; alternate control schemes come in through the exported
//! configuration, not recompilation.
//!
//! [`SliderManager`]: crate::SliderManager

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::event::KeyCode;
use crate::slider::SliderRole;

/// Width change applied per key press, in slider-width units.
pub const KEY_STEP: f32 = 10.0;

/// What a bound key does: which slider it moves and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderBinding {
    /// Target slider.
    pub role: SliderRole,
    /// Signed width delta.
    pub delta: f32,
}

/// Immutable key-to-slider mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyMap {
    bindings: HashMap<KeyCode, SliderBinding>,
}

impl Default for KeyMap {
    fn default() -> Self {
        // Digit pairs drive RGB, home-row pairs drive HSV.
        Self::from_bindings([
            (KeyCode::Key1, SliderRole::Red, KEY_STEP),
            (KeyCode::Key2, SliderRole::Red, -KEY_STEP),
            (KeyCode::Key3, SliderRole::Green, KEY_STEP),
            (KeyCode::Key4, SliderRole::Green, -KEY_STEP),
            (KeyCode::Key5, SliderRole::Blue, KEY_STEP),
            (KeyCode::Key6, SliderRole::Blue, -KEY_STEP),
            (KeyCode::F, SliderRole::Hue, KEY_STEP),
            (KeyCode::G, SliderRole::Hue, -KEY_STEP),
            (KeyCode::H, SliderRole::Saturation, KEY_STEP),
            (KeyCode::J, SliderRole::Saturation, -KEY_STEP),
            (KeyCode::K, SliderRole::Value, KEY_STEP),
            (KeyCode::L, SliderRole::Value, -KEY_STEP),
        ])
    }
}

impl KeyMap {
    /// Build a map from `(key, role, delta)` triples. Later entries win on
    /// duplicate keys.
    pub fn from_bindings<I>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (KeyCode, SliderRole, f32)>,
    {
        Self {
            bindings: bindings
                .into_iter()
                .map(|(key, role, delta)| (key, SliderBinding { role, delta }))
                .collect(),
        }
    }

    /// Look up the binding for a key, if any.
    pub fn binding_for_key(&self, key: KeyCode) -> Option<SliderBinding> {
        self.bindings.get(&key).copied()
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no keys are bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
