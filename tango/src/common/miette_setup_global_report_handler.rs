// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Binaries that use this crate (and return [`miette::Result`] from `main()`) can call
//! [`setup_default_miette_global_report_handler`] so that a [`crate::TangoError`] is
//! reported with its diagnostic code, help text, and an issues link footer.
//!
//! The hook registered via [`miette::set_hook`] is lazy. It only runs when a report is
//! actually displayed.

use miette::MietteHandlerOpts;

/// Used when the terminal size can't be queried, eg: output is not a tty.
pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// Registers a graphical report handler. Calling this more than once is a no-op, since
/// [`miette::set_hook`] only succeeds the first time.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = report_width();
        tracing::debug!(message = "miette::set_hook", terminal_width = %terminal_width);
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}

/// The width is queried when a report is displayed, not when the hook is registered.
fn report_width() -> usize { width_from_terminal_size(crossterm::terminal::size()) }

fn width_from_terminal_size(size: std::io::Result<(u16, u16)>) -> usize {
    size.ok()
        .map(|(columns, _rows)| usize::from(columns))
        .filter(|it| *it > 0)
        .unwrap_or(DEFAULT_REPORT_WIDTH)
}
