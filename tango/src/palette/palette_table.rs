// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The process wide, immutable Tango palette table.
//!
//! There are two flat maps:
//! 1. canonical name (eg: `orange1`) to [`PaletteColor`].
//! 2. alias (eg: `LightOrange`) to a *copy* of its target's [`PaletteColor`].
//!
//! The alias map holds values, not references to canonical entries, so a lookup is a
//! single hash probe and never follows a chain of redirects.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::{DEBUG_TANGO_PALETTE, PaletteColor, TangoError, TangoHue, TangoResult};

/// Generates one `const` [`PaletteColor`] per canonical name (upper cased, eg:
/// `ORANGE2`), and the ordered [`CANONICAL_ENTRIES`] and [`ALIAS_ENTRIES`] slices.
///
/// [`CANONICAL_ENTRIES`]: palette_consts::CANONICAL_ENTRIES
/// [`ALIAS_ENTRIES`]: palette_consts::ALIAS_ENTRIES
macro_rules! define_palette_consts {
    (
        canonical { $($canonical:ident : $hex:literal),+ $(,)? }
        aliases { $($alias:ident => $target:ident),+ $(,)? }
    ) => {
        paste::paste! {
            $(
                pub const [<$canonical:upper>]: PaletteColor =
                    PaletteColor::from_hex_literal($hex);
            )+

            /// Canonical entries, in palette order.
            pub const CANONICAL_ENTRIES: &[(&str, PaletteColor)] = &[
                $((stringify!($canonical), [<$canonical:upper>])),+
            ];

            /// Aliases paired with a copy of their target's value, in palette order.
            pub const ALIAS_ENTRIES: &[(&str, PaletteColor)] = &[
                $((stringify!($alias), [<$target:upper>])),+
            ];
        }
    };
}

/// Compile time constants for every palette entry.
pub mod palette_consts {
    use crate::PaletteColor;

    crate::with_tango_palette!(define_palette_consts);
}

static TANGO_PALETTE: LazyLock<PaletteTable> = LazyLock::new(PaletteTable::build);

/// Returns the palette table. It is built on first access and lives for the rest of the
/// process.
#[must_use]
pub fn tango_palette() -> &'static PaletteTable { &TANGO_PALETTE }

#[derive(Debug)]
pub struct PaletteTable {
    canonical: FxHashMap<&'static str, PaletteColor>,
    aliases: FxHashMap<&'static str, PaletteColor>,
}

impl PaletteTable {
    fn build() -> Self {
        let canonical: FxHashMap<&'static str, PaletteColor> =
            palette_consts::CANONICAL_ENTRIES.iter().copied().collect();
        let aliases: FxHashMap<&'static str, PaletteColor> =
            palette_consts::ALIAS_ENTRIES.iter().copied().collect();

        DEBUG_TANGO_PALETTE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "PaletteTable::build",
                canonical_count = %canonical.len(),
                alias_count = %aliases.len()
            );
        });

        Self { canonical, aliases }
    }

    /// Looks up a canonical name (eg: `orange2`) or an alias (eg: `Orange`). Names are
    /// case sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`TangoError::UnknownName`] if `name` is neither.
    pub fn lookup(&self, name: &str) -> TangoResult<PaletteColor> {
        self.canonical
            .get(name)
            .or_else(|| self.aliases.get(name))
            .copied()
            .ok_or_else(|| TangoError::unknown_name(name))
    }

    /// Looks up a canonical entry by family and shade index, eg: `(Orange, 2)` is
    /// `orange2`. Shades start at 1.
    ///
    /// # Errors
    ///
    /// Returns [`TangoError::UnknownName`] if `shade` is `0` or greater than
    /// [`TangoHue::shade_count`].
    pub fn shade(&self, hue: TangoHue, shade: u8) -> TangoResult<PaletteColor> {
        let name = hue.canonical_name(shade);
        if shade == 0 || shade > hue.shade_count() {
            return Err(TangoError::unknown_name(name));
        }
        self.canonical
            .get(name.as_str())
            .copied()
            .ok_or_else(|| TangoError::unknown_name(name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.canonical.contains_key(name) || self.aliases.contains_key(name)
    }

    /// Canonical entries in palette order (by family, then by shade).
    #[must_use]
    pub fn canonical_entries(&self) -> &'static [(&'static str, PaletteColor)] {
        palette_consts::CANONICAL_ENTRIES
    }

    /// Alias entries in palette order, each paired with a copy of its target's value.
    #[must_use]
    pub fn aliases(&self) -> &'static [(&'static str, PaletteColor)] {
        palette_consts::ALIAS_ENTRIES
    }

    /// Number of names, canonical and alias.
    #[must_use]
    pub fn len(&self) -> usize { self.canonical.len() + self.aliases.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}
