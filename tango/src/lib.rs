// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_tango
//!
//! The [Tango icon theme palette](http://tango.freedesktop.org/Tango_Icon_Theme_Guidelines#Color_Palette)
//! as a constant table, plus a converter that renders any of its colors (or any `#RRGGBB`
//! string) in one of five color models.
//!
//! | model id         | [`ColorRepr`] variant           | example for `#f57900`     |
//! |------------------|---------------------------------|---------------------------|
//! | `hex`            | [`ColorRepr::Hex`]              | `#f57900`                 |
//! | `rgb-normalized` | [`ColorRepr::RgbNormalized`]    | `(0.9608, 0.4745, 0.0)`   |
//! | `rgb-int`        | [`ColorRepr::RgbInt`]           | `(245, 121, 0)`           |
//! | `hsv-normalized` | [`ColorRepr::HsvNormalized`]    | `(0.0823, 1.0, 0.9608)`   |
//! | `hsv-scaled`     | [`ColorRepr::HsvScaled`]        | `(30, 100, 96)`           |
//!
//! # Palette
//!
//! The palette has seven hue families with three shades each (`butter`, `orange`,
//! `chocolate`, `chameleon`, `skyblue`, `plum`, `scarletred`) and six shades of
//! `aluminium`. Canonical names are the family name followed by the shade index, eg:
//! `orange2`. Every 3-shade family also has three aliases: `LightOrange` (shade 1),
//! `Orange` (shade 2) and `DarkOrange` (shade 3).
//!
//! # Usage
//!
//! ```
//! use r3bl_tango::{ColorRepr, TangoConverter, TangoError};
//!
//! let converter = TangoConverter::new("rgb-int").unwrap();
//!
//! // Generated accessor, one per canonical name and alias.
//! assert_eq!(converter.orange2().as_rgb_int(), Some((245, 121, 0)));
//! assert_eq!(converter.light_orange(), converter.orange1());
//!
//! // Lookup by name.
//! assert_eq!(converter.lookup("Orange").unwrap(), converter.orange2());
//! assert!(matches!(
//!     converter.lookup("Teal"),
//!     Err(TangoError::UnknownName { .. })
//! ));
//!
//! // Any `#RRGGBB` string.
//! let hsv = TangoConverter::new("hsv-scaled").unwrap().resolve("#f57900").unwrap();
//! assert_eq!(hsv.as_hsv_scaled(), Some((30, 100, 96)));
//! ```
//!
//! Both the palette and every [`TangoConverter`] are immutable, so they can be shared
//! across threads freely.

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod color;
pub mod common;
pub mod convert;
pub mod log;
pub mod palette;

// Re-export.
pub use color::*;
pub use common::*;
pub use convert::*;
pub use log::*;
pub use palette::*;
