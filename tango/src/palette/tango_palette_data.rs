// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The one place where the Tango palette is written down. Everything else (the palette
//! constants, the lookup maps, the converter accessor methods) is generated from this by
//! passing a callback macro to [`with_tango_palette!`].
//!
//! Values are from the
//! [Tango Icon Theme Guidelines](http://tango.freedesktop.org/Tango_Icon_Theme_Guidelines#Color_Palette).

/// Invokes `$callback!` with the whole palette in this shape:
///
/// ```text
/// canonical { butter1: "#fce94f", ... }
/// aliases { LightButter => butter1, ... }
/// ```
///
/// Every alias names its target canonical entry by identifier, so an alias to a missing
/// entry fails to compile in whatever the callback generates.
#[macro_export]
macro_rules! with_tango_palette {
    ($callback:ident) => {
        $callback! {
            canonical {
                butter1: "#fce94f",
                butter2: "#edd400",
                butter3: "#c4a000",
                orange1: "#fcaf3e",
                orange2: "#f57900",
                orange3: "#ce5c00",
                chocolate1: "#e9b96e",
                chocolate2: "#c17d11",
                chocolate3: "#8f5902",
                chameleon1: "#8ae234",
                chameleon2: "#73d216",
                chameleon3: "#4e9a06",
                skyblue1: "#729fcf",
                skyblue2: "#3465a4",
                skyblue3: "#204a87",
                plum1: "#ad7fa8",
                plum2: "#75507b",
                plum3: "#5c3566",
                scarletred1: "#ef2929",
                scarletred2: "#cc0000",
                scarletred3: "#a40000",
                aluminium1: "#eeeeec",
                aluminium2: "#d3d7cf",
                aluminium3: "#babdb6",
                aluminium4: "#888a85",
                aluminium5: "#555753",
                aluminium6: "#2e3436",
            }
            aliases {
                LightButter => butter1,
                Butter => butter2,
                DarkButter => butter3,
                LightOrange => orange1,
                Orange => orange2,
                DarkOrange => orange3,
                LightChocolate => chocolate1,
                Chocolate => chocolate2,
                DarkChocolate => chocolate3,
                LightChameleon => chameleon1,
                Chameleon => chameleon2,
                DarkChameleon => chameleon3,
                LightSkyBlue => skyblue1,
                SkyBlue => skyblue2,
                DarkSkyBlue => skyblue3,
                LightPlum => plum1,
                Plum => plum2,
                DarkPlum => plum3,
                LightScarletRed => scarletred1,
                ScarletRed => scarletred2,
                DarkScarletRed => scarletred3,
            }
        }
    };
}
