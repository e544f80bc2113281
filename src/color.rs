//! Color types and RGB/HSV conversion.
//!
//! Stored representations are integer-quantized: RGB channels in [0, 255],
//! hue in whole degrees, saturation and value in whole percent. Conversions
//! run through `f32` intermediates and truncate (never round) on the way
//! back to integers; the truncation direction is a compatibility contract
//! the round-trip tests depend on.

use crate::constants::{HUE_MAX, HUE_SECTOR, PERCENT_MAX, RGB_MAX};

/// An RGB color with integer channels in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Rgb {
    /// Create an RGB color.
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }
}

/// An HSV color: hue in [0, 360) degrees, saturation and value in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hsv {
    pub hue: i32,
    pub saturation: i32,
    pub value: i32,
}

impl Hsv {
    /// Create an HSV color.
    pub const fn new(hue: i32, saturation: i32, value: i32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

/// A display color with normalized float channels, as consumed by the
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const MID_GRAY: Color = Color {
        r: 0.5,
        g: 0.5,
        b: 0.5,
    };

    /// Create a color from normalized channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Convert RGB to HSV.
///
/// Hue falls out of the dominant-channel branch and is corrected by +360
/// after truncation when negative. `delta == 0` (achromatic) pins hue to 0
/// and `c_max == 0` (black) pins saturation to 0, so no branch divides by
/// zero.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let red = rgb.red as f32 / RGB_MAX;
    let green = rgb.green as f32 / RGB_MAX;
    let blue = rgb.blue as f32 / RGB_MAX;

    let c_max = red.max(green).max(blue);
    let c_min = red.min(green).min(blue);
    let delta = c_max - c_min;

    let mut hue = if delta == 0.0 {
        0
    } else if c_max == red {
        (HUE_SECTOR * (((green - blue) / delta) % 6.0)) as i32
    } else if c_max == green {
        (HUE_SECTOR * ((blue - red) / delta + 2.0)) as i32
    } else {
        (HUE_SECTOR * ((red - green) / delta + 4.0)) as i32
    };
    if hue < 0 {
        hue += HUE_MAX as i32;
    }

    let saturation = if c_max == 0.0 {
        0
    } else {
        (delta / c_max * PERCENT_MAX) as i32
    };
    let value = (c_max * PERCENT_MAX) as i32;

    Hsv::new(hue, saturation, value)
}

/// Convert HSV to RGB.
///
/// The hue circle splits into six 60-degree sectors; sector 5 and any
/// out-of-range sector take the `(v, p, q)` assignment.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = hsv.hue as f32 / HUE_SECTOR;
    let s = hsv.saturation as f32 / PERCENT_MAX;
    let v = hsv.value as f32 / PERCENT_MAX;

    let i = h.floor() as i32;
    let f = h - i as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match i {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(
        (r * RGB_MAX) as i32,
        (g * RGB_MAX) as i32,
        (b * RGB_MAX) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achromatic_gray() {
        let hsv = rgb_to_hsv(Rgb::new(128, 128, 128));
        assert_eq!(hsv, Hsv::new(0, 0, 50));
    }

    #[test]
    fn test_black_has_zero_saturation() {
        // c_max == 0 takes the guarded branch
        let hsv = rgb_to_hsv(Rgb::new(0, 0, 0));
        assert_eq!(hsv, Hsv::new(0, 0, 0));
    }

    #[test]
    fn test_white() {
        let hsv = rgb_to_hsv(Rgb::new(255, 255, 255));
        assert_eq!(hsv, Hsv::new(0, 0, 100));
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(rgb_to_hsv(Rgb::new(255, 0, 0)).hue, 0);
        assert_eq!(rgb_to_hsv(Rgb::new(0, 255, 0)).hue, 120);
        assert_eq!(rgb_to_hsv(Rgb::new(0, 0, 255)).hue, 240);
    }

    #[test]
    fn test_negative_hue_wraps() {
        // red dominant with blue > green lands in the negative half of the
        // fmod and gets the +360 correction
        let hsv = rgb_to_hsv(Rgb::new(255, 0, 128));
        assert_eq!(hsv.hue, 330);
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(hsv_to_rgb(Hsv::new(0, 100, 100)), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(120, 100, 100)), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(240, 100, 100)), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_zero_saturation_yields_gray() {
        let rgb = hsv_to_rgb(Hsv::new(180, 0, 50));
        assert_eq!(rgb.red, rgb.green);
        assert_eq!(rgb.green, rgb.blue);
    }

    #[test]
    fn test_zero_value_yields_black() {
        assert_eq!(hsv_to_rgb(Hsv::new(275, 80, 0)), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_round_trip_within_quantization_bound() {
        // Hue is quantized to whole degrees and saturation/value to whole
        // percent before the trip back; one percent of value alone is worth
        // 2.55 channel units, so the achievable bound is several units, not
        // the ideal +-1.
        const TOLERANCE: i32 = 11;

        for red in (0..=255).step_by(15) {
            for green in (0..=255).step_by(15) {
                for blue in (0..=255).step_by(15) {
                    let original = Rgb::new(red, green, blue);
                    let back = hsv_to_rgb(rgb_to_hsv(original));
                    assert!(
                        (back.red - original.red).abs() <= TOLERANCE
                            && (back.green - original.green).abs() <= TOLERANCE
                            && (back.blue - original.blue).abs() <= TOLERANCE,
                        "{original:?} round-tripped to {back:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_round_trip_exact_for_pure_colors() {
        for original in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0),
        ] {
            assert_eq!(hsv_to_rgb(rgb_to_hsv(original)), original);
        }
    }
}
