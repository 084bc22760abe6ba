// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorModel,
            ColorRepr,
            DEBUG_TANGO_CONVERT,
            HexString,
            PaletteColor,
            RgbValue,
            TangoHue,
            TangoResult,
            TransformColor,
            palette_consts,
            tango_palette,
            try_parse_hex_color_exact};

/// Converts hex colors, and Tango palette colors by name, into one [`ColorModel`].
///
/// The model is fixed when the converter is created. Make another converter to get
/// another model; they are `Copy` and hold nothing else.
///
/// Besides [`TangoConverter::lookup`], there is one accessor method per palette name.
/// Canonical names keep their spelling (`orange2()`) and aliases are snake cased
/// (`light_orange()`, `sky_blue()`, `dark_scarlet_red()`).
///
/// ```
/// use r3bl_tango::{ColorModel, TangoConverter};
///
/// let converter = TangoConverter::from(ColorModel::RgbInt);
/// assert_eq!(converter.sky_blue().as_rgb_int(), Some((52, 101, 164)));
/// assert_eq!(converter.sky_blue(), converter.skyblue2());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TangoConverter {
    model: ColorModel,
}

impl From<ColorModel> for TangoConverter {
    fn from(model: ColorModel) -> Self { Self::with_model(model) }
}

impl TangoConverter {
    /// Creates a converter from a model id: `hex`, `rgb-normalized`, `rgb-int`,
    /// `hsv-normalized`, or `hsv-scaled` (case sensitive).
    ///
    /// # Errors
    ///
    /// Returns [`crate::TangoError::InvalidModel`] for any other id.
    pub fn new(model_id: &str) -> TangoResult<Self> {
        ColorModel::try_parse(model_id)
            .inspect_err(|err| {
                DEBUG_TANGO_CONVERT.then(|| {
                    tracing::debug!(message = "TangoConverter::new", error = %err);
                });
            })
            .map(Self::with_model)
    }

    #[must_use]
    pub const fn with_model(model: ColorModel) -> Self { Self { model } }

    #[must_use]
    pub const fn model(&self) -> ColorModel { self.model }

    /// Converts a `#RRGGBB` string into this converter's model. For
    /// [`ColorModel::Hex`] the input is returned unchanged, including the case of its
    /// digits.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TangoError::InvalidColorFormat`] if `hex` is not exactly `#`
    /// followed by 6 hex digits. This is checked for every model, including
    /// [`ColorModel::Hex`].
    pub fn resolve(&self, hex: &str) -> TangoResult<ColorRepr> {
        let rgb = try_parse_hex_color_exact(hex).inspect_err(|err| {
            DEBUG_TANGO_CONVERT.then(|| {
                tracing::debug!(
                    message = "TangoConverter::resolve",
                    model = %self.model,
                    error = %err
                );
            });
        })?;
        Ok(self.convert(hex, rgb))
    }

    /// Looks up a canonical name or alias in the Tango palette, and converts it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TangoError::UnknownName`] if `name` is not in the palette.
    pub fn lookup(&self, name: &str) -> TangoResult<ColorRepr> {
        let color = tango_palette().lookup(name).inspect_err(|err| {
            DEBUG_TANGO_CONVERT.then(|| {
                tracing::debug!(message = "TangoConverter::lookup", error = %err);
            });
        })?;
        Ok(self.convert_palette_color(color))
    }

    /// Looks up a canonical entry by family and shade, eg: `(TangoHue::Plum, 3)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TangoError::UnknownName`] if the shade is out of range for
    /// the family.
    pub fn lookup_shade(&self, hue: TangoHue, shade: u8) -> TangoResult<ColorRepr> {
        let color = tango_palette().shade(hue, shade)?;
        Ok(self.convert_palette_color(color))
    }

    /// Every canonical palette entry converted into this converter's model, in palette
    /// order.
    pub fn convert_all(self) -> impl Iterator<Item = (&'static str, ColorRepr)> {
        tango_palette()
            .canonical_entries()
            .iter()
            .map(move |(name, color)| (*name, self.convert_palette_color(*color)))
    }

    /// Palette values are decoded at compile time, so they skip the parser.
    #[must_use]
    pub fn convert_palette_color(&self, color: PaletteColor) -> ColorRepr {
        self.convert(color.hex, color.rgb)
    }

    fn convert(&self, hex: &str, rgb: RgbValue) -> ColorRepr {
        match self.model {
            ColorModel::Hex => ColorRepr::Hex(HexString::from(hex)),
            ColorModel::RgbNormalized => ColorRepr::RgbNormalized(rgb.as_rgb_normalized()),
            ColorModel::RgbInt => ColorRepr::RgbInt(rgb.as_rgb_normalized().as_rgb()),
            ColorModel::HsvNormalized => ColorRepr::HsvNormalized(rgb.as_hsv()),
            ColorModel::HsvScaled => ColorRepr::HsvScaled(rgb.as_hsv_scaled()),
        }
    }
}

/// Generates one accessor method on [`TangoConverter`] per canonical name and alias.
macro_rules! define_converter_accessors {
    (
        canonical { $($canonical:ident : $hex:literal),+ $(,)? }
        aliases { $($alias:ident => $target:ident),+ $(,)? }
    ) => {
        paste::paste! {
            impl TangoConverter {
                $(
                    #[must_use]
                    pub fn $canonical(&self) -> ColorRepr {
                        self.convert_palette_color(palette_consts::[<$canonical:upper>])
                    }
                )+

                $(
                    #[must_use]
                    pub fn [<$alias:snake>](&self) -> ColorRepr {
                        self.convert_palette_color(palette_consts::[<$target:upper>])
                    }
                )+
            }
        }
    };
}

crate::with_tango_palette!(define_converter_accessors);
