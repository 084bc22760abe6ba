// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! HSV (hue, saturation, value) color representations.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/HSL_and_HSV#From_RGB>
//! - <https://www.rapidtables.com/convert/color/rgb-to-hsv.html>

use crate::RgbNormalized;

/// HSV with every component in `[0.0, 1.0]`. Hue is a fraction of a full turn, so `0.5`
/// is 180 degrees.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct HsvNormalized {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

/// HSV on a human scale: hue in degrees `[0, 360]`, saturation and value in percent
/// `[0, 100]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct HsvScaled {
    pub hue: u16,
    pub saturation: u8,
    pub value: u8,
}

impl From<RgbNormalized> for HsvNormalized {
    /// Chroma based conversion. When two channels tie for the max, blue wins over green,
    /// and green wins over red. The resulting hue is the same either way.
    fn from(rgb: RgbNormalized) -> Self {
        let RgbNormalized { red, green, blue } = rgb;
        let max = rgb.max_component();
        let min = rgb.min_component();
        let chroma = max - min;

        let saturation = if max > 0.0 { chroma / max } else { 0.0 };

        let sextant = if chroma > 0.0 {
            if blue == max {
                4.0 + (red - green) / chroma
            } else if green == max {
                2.0 + (blue - red) / chroma
            } else {
                (green - blue) / chroma
            }
        } else {
            0.0
        };
        let hue = (sextant / 6.0).rem_euclid(1.0);

        Self {
            hue,
            saturation,
            value: max,
        }
    }
}

impl From<(f64, f64, f64)> for HsvNormalized {
    fn from((hue, saturation, value): (f64, f64, f64)) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

impl From<HsvNormalized> for (f64, f64, f64) {
    fn from(it: HsvNormalized) -> Self { (it.hue, it.saturation, it.value) }
}

impl From<HsvScaled> for (u16, u8, u8) {
    fn from(it: HsvScaled) -> Self { (it.hue, it.saturation, it.value) }
}

impl HsvNormalized {
    /// Scales hue to degrees and saturation and value to percent, then rounds each to
    /// the nearest integer. Ties (exact `.5`) round up, see [`round_half_up`].
    #[must_use]
    pub fn scale(&self) -> HsvScaled {
        HsvScaled {
            hue: round_half_up_u16(self.hue * 360.0),
            saturation: round_half_up_u8(self.saturation * 100.0),
            value: round_half_up_u8(self.value * 100.0),
        }
    }
}

/// Rounds to the nearest integer, with exact `.5` ties going up (away from zero for the
/// non-negative values produced by [`HsvNormalized::scale`]). So `62.5` becomes `63`
/// and `12.5` becomes `13`. This is [`f64::round`], which is *not* round-half-to-even.
#[must_use]
pub fn round_half_up(value: f64) -> f64 { value.round() }

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_half_up_u16(value: f64) -> u16 { round_half_up(value) as u16 }

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_half_up_u8(value: f64) -> u8 { round_half_up(value) as u8 }
