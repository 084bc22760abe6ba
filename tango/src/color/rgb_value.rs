// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! 8-bit RGB color representation. This is what a `#RRGGBB` string decodes to.

use crate::{RgbNormalized, TangoResult, TransformColor, try_parse_hex_color_exact};

/// Represents a color in RGB (24-bit truecolor) format, one byte per component.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<RgbValue> for (u8, u8, u8) {
    fn from(value: RgbValue) -> Self { (value.red, value.green, value.blue) }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Decodes a `#RRGGBB` string literal at compile time. Used to build the palette
    /// table, so a malformed literal fails the build instead of a lookup.
    ///
    /// # Panics
    ///
    /// Panics (which is a compile error in a `const` context) if `hex` is not `#`
    /// followed by 6 hex digits.
    #[must_use]
    pub const fn from_hex_literal(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        assert!(
            bytes.len() == 7 && bytes[0] == b'#',
            "hex color literal must be in the `#RRGGBB` format"
        );
        Self {
            red: const_hex::decode_pair(bytes[1], bytes[2]),
            green: const_hex::decode_pair(bytes[3], bytes[4]),
            blue: const_hex::decode_pair(bytes[5], bytes[6]),
        }
    }

    /// # Errors
    ///
    /// Returns [`crate::TangoError::InvalidColorFormat`] if the input string is not
    /// exactly `#` followed by 6 hex digits.
    pub fn try_from_hex_color(input: &str) -> TangoResult<RgbValue> {
        try_parse_hex_color_exact(input)
    }

    /// Formats this color as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl TransformColor for RgbValue {
    fn as_rgb_normalized(&self) -> RgbNormalized {
        RgbNormalized {
            red: f64::from(self.red) / 255.0,
            green: f64::from(self.green) / 255.0,
            blue: f64::from(self.blue) / 255.0,
        }
    }
}

mod const_hex {
    /// # Panics
    ///
    /// Panics if either byte is not an ASCII hex digit.
    pub const fn decode_pair(high: u8, low: u8) -> u8 {
        decode_digit(high) * 16 + decode_digit(low)
    }

    const fn decode_digit(byte: u8) -> u8 {
        match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            b'A'..=b'F' => byte - b'A' + 10,
            _ => panic!("hex color literal contains a character that is not a hex digit"),
        }
    }
}
