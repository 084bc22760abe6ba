// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{RgbValue, TransformColor};

/// RGB with each component as a fraction in `[0.0, 1.0]`.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct RgbNormalized {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl From<(f64, f64, f64)> for RgbNormalized {
    fn from((red, green, blue): (f64, f64, f64)) -> Self { Self { red, green, blue } }
}

impl From<RgbNormalized> for (f64, f64, f64) {
    fn from(value: RgbNormalized) -> Self { (value.red, value.green, value.blue) }
}

impl RgbNormalized {
    /// Multiplies each component by 255 and truncates toward zero. Out of range
    /// components saturate at `0` and `255`.
    #[must_use]
    pub fn truncate_to_rgb(&self) -> RgbValue {
        RgbValue {
            red: truncate_to_u8(self.red * 255.0),
            green: truncate_to_u8(self.green * 255.0),
            blue: truncate_to_u8(self.blue * 255.0),
        }
    }

    #[must_use]
    pub fn max_component(&self) -> f64 { self.red.max(self.green).max(self.blue) }

    #[must_use]
    pub fn min_component(&self) -> f64 { self.red.min(self.green).min(self.blue) }
}

impl TransformColor for RgbNormalized {
    fn as_rgb_normalized(&self) -> RgbNormalized { *self }
}

/// A float to int `as` cast truncates toward zero and saturates, which is the behavior
/// needed here.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_to_u8(value: f64) -> u8 { value as u8 }
