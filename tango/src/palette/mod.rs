// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The Tango palette: 27 canonical entries and 21 aliases, built once and never
//! mutated. See [`tango_palette`].

/// Enable or disable debug logging for this `palette` module.
pub const DEBUG_TANGO_PALETTE: bool = true;

// Attach sources.
pub mod palette_color;
pub mod palette_table;
pub mod tango_hue;
pub mod tango_palette_data;

// Re-export.
pub use palette_color::*;
pub use palette_table::*;
pub use tango_hue::*;
