// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversion of hex colors and Tango palette colors into a selected [`ColorModel`].

/// Enable or disable debug logging for this `convert` module.
pub const DEBUG_TANGO_CONVERT: bool = true;

// Attach.
mod color_model;
mod color_repr;
mod tango_converter;

// Re-export.
pub use color_model::*;
pub use color_repr::*;
pub use tango_converter::*;
