// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::RgbValue;

/// The value stored for each palette name: the canonical `#rrggbb` string and its
/// decoded bytes. Both are computed at compile time, see
/// [`PaletteColor::from_hex_literal`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PaletteColor {
    pub hex: &'static str,
    pub rgb: RgbValue,
}

impl PaletteColor {
    /// # Panics
    ///
    /// Panics (a compile error in a `const` context) if `hex` is not `#` followed by 6
    /// hex digits.
    #[must_use]
    pub const fn from_hex_literal(hex: &'static str) -> Self {
        Self {
            hex,
            rgb: RgbValue::from_hex_literal(hex),
        }
    }
}
