// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prints every Tango palette entry in every color model, then every alias.
//!
//! ```sh
//! cargo run --example palette_table
//! cargo run --example palette_table -- hsv-scaled
//! ```
//!
//! Passing an unknown model id (eg: `cmyk`) shows how a [`r3bl_tango::TangoError`] is
//! reported by miette.

use r3bl_tango::{ColorModel,
                 TangoConverter,
                 setup_default_miette_global_report_handler,
                 tango_palette,
                 try_initialize_logging_global};
use strum::IntoEnumIterator;
use tracing_core::LevelFilter;

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues";

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);
    try_initialize_logging_global(LevelFilter::DEBUG)?;

    // Only the requested model, if one is given.
    if let Some(model_id) = std::env::args().nth(1) {
        let converter = TangoConverter::new(&model_id)?;
        for (name, repr) in converter.convert_all() {
            println!("{name:<12} {repr}");
        }
        return Ok(());
    }

    // Every model.
    {
        let converters: Vec<TangoConverter> =
            ColorModel::iter().map(TangoConverter::from).collect();

        print!("{:<12}", "name");
        for it in &converters {
            print!(" {:<24}", it.model());
        }
        println!();

        for (name, color) in tango_palette().canonical_entries() {
            print!("{name:<12}");
            for it in &converters {
                print!(" {:<24}", it.convert_palette_color(*color).to_string());
            }
            println!();
        }
    }

    // Aliases, with the stored hex next to the hex re-encoded from the decoded bytes.
    {
        println!();
        for (alias, color) in tango_palette().aliases() {
            println!("{alias:<16} {} {}", color.hex, color.rgb.to_hex_string());
        }
    }

    Ok(())
}
