// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{HsvNormalized, HsvScaled, RgbNormalized, RgbValue};

/// Conversions between the color models. Implementors only provide
/// [`TransformColor::as_rgb_normalized`], which is the linear decode step that every
/// other numeric model is derived from.
pub trait TransformColor {
    /// Returns each RGB component as a fraction in `[0.0, 1.0]`.
    fn as_rgb_normalized(&self) -> RgbNormalized;

    /// Returns each normalized component multiplied by 255 and truncated (not rounded)
    /// to a byte.
    fn as_rgb(&self) -> RgbValue { self.as_rgb_normalized().truncate_to_rgb() }

    /// Returns the HSV representation with every component in `[0.0, 1.0]`. Hue is a
    /// fraction of a full turn, not degrees.
    fn as_hsv(&self) -> HsvNormalized { HsvNormalized::from(self.as_rgb_normalized()) }

    /// Returns the HSV representation with hue in degrees and saturation and value in
    /// percent, each rounded to the nearest integer.
    fn as_hsv_scaled(&self) -> HsvScaled { self.as_hsv().scale() }
}
