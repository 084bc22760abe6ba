// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;

use crate::{ColorModel, HsvNormalized, HsvScaled, RgbNormalized, RgbValue};

/// Stack allocated string that fits a `#rrggbb` color without a heap allocation.
pub type HexString = SmallString<[u8; HEX_STRING_INLINE_SIZE]>;
pub const HEX_STRING_INLINE_SIZE: usize = 8;

/// A color in the representation of one [`ColorModel`]. The `as_*` accessors return
/// plain tuples, and [`None`] if the variant is for a different model.
#[derive(Clone, PartialEq, Debug)]
pub enum ColorRepr {
    Hex(HexString),
    RgbNormalized(RgbNormalized),
    RgbInt(RgbValue),
    HsvNormalized(HsvNormalized),
    HsvScaled(HsvScaled),
}

impl ColorRepr {
    /// The model this representation belongs to.
    #[must_use]
    pub fn model(&self) -> ColorModel {
        match self {
            ColorRepr::Hex(_) => ColorModel::Hex,
            ColorRepr::RgbNormalized(_) => ColorModel::RgbNormalized,
            ColorRepr::RgbInt(_) => ColorModel::RgbInt,
            ColorRepr::HsvNormalized(_) => ColorModel::HsvNormalized,
            ColorRepr::HsvScaled(_) => ColorModel::HsvScaled,
        }
    }

    #[must_use]
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            ColorRepr::Hex(it) => Some(it.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_rgb_normalized(&self) -> Option<(f64, f64, f64)> {
        match self {
            ColorRepr::RgbNormalized(it) => Some((*it).into()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_rgb_int(&self) -> Option<(u8, u8, u8)> {
        match self {
            ColorRepr::RgbInt(it) => Some((*it).into()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_hsv_normalized(&self) -> Option<(f64, f64, f64)> {
        match self {
            ColorRepr::HsvNormalized(it) => Some((*it).into()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_hsv_scaled(&self) -> Option<(u16, u8, u8)> {
        match self {
            ColorRepr::HsvScaled(it) => Some((*it).into()),
            _ => None,
        }
    }
}

impl Display for ColorRepr {
    /// Hex is printed as is. Every other model is printed as comma separated components,
    /// eg: `245,121,0`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ColorRepr::Hex(it) => write!(f, "{it}"),
            ColorRepr::RgbNormalized(RgbNormalized { red, green, blue }) => {
                write!(f, "{red:.4},{green:.4},{blue:.4}")
            }
            ColorRepr::RgbInt(RgbValue { red, green, blue }) => {
                write!(f, "{red},{green},{blue}")
            }
            ColorRepr::HsvNormalized(HsvNormalized {
                hue,
                saturation,
                value,
            }) => write!(f, "{hue:.4},{saturation:.4},{value:.4}"),
            ColorRepr::HsvScaled(HsvScaled {
                hue,
                saturation,
                value,
            }) => write!(f, "{hue},{saturation},{value}"),
        }
    }
}
