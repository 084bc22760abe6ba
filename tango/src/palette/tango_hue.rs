// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// The color families of the Tango palette. The [`Display`] form is the prefix of the
/// canonical names, eg: [`TangoHue::SkyBlue`] is `skyblue`, and its shades are
/// `skyblue1` to `skyblue3`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter, EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum TangoHue {
    Butter,
    Orange,
    Chocolate,
    Chameleon,
    SkyBlue,
    Plum,
    ScarletRed,
    Aluminium,
}

impl TangoHue {
    /// Aluminium is the neutral gray family with 6 shades. Every other family has 3,
    /// from light (1) to dark (3).
    #[must_use]
    pub const fn shade_count(self) -> u8 {
        match self {
            TangoHue::Aluminium => 6,
            _ => 3,
        }
    }

    /// Only the 3-shade families have `Light<Hue>`, `<Hue>`, and `Dark<Hue>` aliases.
    #[must_use]
    pub const fn has_aliases(self) -> bool { self.shade_count() == 3 }

    /// Canonical name for `shade` of this family, eg: `orange2`. The shade is not range
    /// checked.
    #[must_use]
    pub fn canonical_name(self, shade: u8) -> String { format!("{self}{shade}") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    #[test_case(TangoHue::Butter, "butter")]
    #[test_case(TangoHue::SkyBlue, "skyblue")]
    #[test_case(TangoHue::ScarletRed, "scarletred")]
    #[test_case(TangoHue::Aluminium, "aluminium")]
    fn test_display_and_parse(hue: TangoHue, expected: &str) {
        assert_eq!(hue.to_string(), expected);
        assert_eq!(hue.as_ref(), expected);
        assert_eq!(TangoHue::from_str(expected).unwrap(), hue);
    }

    #[test]
    fn test_shade_counts_add_up() {
        assert_eq!(TangoHue::COUNT, 8);
        let total: u32 = TangoHue::iter().map(|it| u32::from(it.shade_count())).sum();
        assert_eq!(total, 27);
        assert_eq!(TangoHue::iter().filter(|it| it.has_aliases()).count(), 7);
    }

    #[test]
    fn test_canonical_name() {
        assert_eq!(TangoHue::Orange.canonical_name(2), "orange2");
        assert_eq!(TangoHue::Aluminium.canonical_name(6), "aluminium6");
    }
}
