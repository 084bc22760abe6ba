// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color primitives shared by the palette and the converter.
//!
//! - [`RgbValue`]: 8-bit RGB, decoded from `#RRGGBB` by [`parse_hex_color`].
//! - [`RgbNormalized`]: RGB with each component in `[0.0, 1.0]`.
//! - [`HsvNormalized`] and [`HsvScaled`]: HSV as fractions, or as degrees and percent.
//!
//! All conversions go through [`RgbNormalized`], via the [`TransformColor`] trait.

// Attach.
mod hex_color_parser;
mod hsv_value;
mod rgb_normalized;
mod rgb_value;
mod transform_color;

// Re-export.
pub use hex_color_parser::*;
pub use hsv_value::*;
pub use rgb_normalized::*;
pub use rgb_value::*;
pub use transform_color::*;
