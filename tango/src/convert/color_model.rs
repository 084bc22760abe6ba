// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use crate::{TangoError, TangoResult};

/// The output representation a [`crate::TangoConverter`] produces.
///
/// The string ids (used by [`ColorModel::try_parse`], [`Display`], and serde) are
/// `hex`, `rgb-normalized`, `rgb-int`, `hsv-normalized`, and `hsv-scaled`. They are
/// matched case sensitively. This lets a host application put the model in its own
/// config file:
///
/// ```
/// use r3bl_tango::ColorModel;
///
/// #[derive(serde::Deserialize)]
/// struct ThemeConfig {
///     model: ColorModel,
/// }
///
/// let config: ThemeConfig = serde_json::from_str(r#"{ "model": "hsv-scaled" }"#).unwrap();
/// assert_eq!(config.model, ColorModel::HsvScaled);
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ColorModel {
    /// `#rrggbb` web notation, returned exactly as given.
    #[default]
    Hex,
    /// RGB components in `[0.0, 1.0]`.
    RgbNormalized,
    /// RGB components in `[0, 255]`.
    RgbInt,
    /// Hue, saturation, value in `[0.0, 1.0]`.
    HsvNormalized,
    /// Hue in degrees `[0, 360]`, saturation and value in percent `[0, 100]`.
    HsvScaled,
}

impl ColorModel {
    /// # Errors
    ///
    /// Returns [`TangoError::InvalidModel`] if `id` is not one of the five model ids.
    pub fn try_parse(id: &str) -> TangoResult<Self> {
        id.parse::<Self>().map_err(|_| TangoError::invalid_model(id))
    }
}
