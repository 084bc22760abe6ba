// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every error in this crate is a precondition violation by the caller. They are raised
//! synchronously at the offending call, and never retried or recovered internally.
//!
//! [`TangoError`] derives [`miette::Diagnostic`] so that applications that return
//! [`miette::Result`] from `main()` get a code and help text for free when they use `?`.

/// Type alias for results returned by this crate.
pub type TangoResult<T> = Result<T, TangoError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum TangoError {
    /// A converter was requested for a model id that isn't one of the five recognized
    /// ones. Matching is case sensitive.
    #[error("🎨 Color model '{model}' is not available")]
    #[diagnostic(
        code(r3bl_tango::invalid_model),
        help("Use one of: hex, rgb-normalized, rgb-int, hsv-normalized, hsv-scaled")
    )]
    InvalidModel { model: String },

    /// The input is not exactly `#` followed by 6 hex digits.
    #[error("🔢 Color '{input}' is not a valid hex color")]
    #[diagnostic(
        code(r3bl_tango::invalid_color_format),
        help("Use the `#RRGGBB` format, eg: `#f57900`")
    )]
    InvalidColorFormat { input: String },

    /// The name is neither a canonical palette name nor an alias.
    #[error("🔍 Color name '{name}' is not in the Tango palette")]
    #[diagnostic(
        code(r3bl_tango::unknown_name),
        help(
            "Use a canonical name like `orange2` or `aluminium6`, \
             or an alias like `LightOrange`, `Orange`, `DarkOrange`"
        )
    )]
    UnknownName { name: String },
}

impl TangoError {
    #[must_use]
    pub fn invalid_model(model: impl Into<String>) -> Self {
        Self::InvalidModel {
            model: model.into(),
        }
    }

    #[must_use]
    pub fn invalid_color_format(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
        }
    }

    #[must_use]
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownName { name: name.into() }
    }
}
