// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, registry::LookupSpan};

use crate::{DisplayPreference, TracingConfig};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers. This does not initialize the tracing system. Use
/// [`try_initialize_logging_global`], or do it manually:
/// `try_create_layers(..).map(|layers| tracing_subscriber::registry().with(layers).init());`
///
/// # Errors
///
/// Returns an error if a layer can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<Registry>>> = vec![];

    // Level filter for the whole registry, not just the display layer.
    return_it.push(Box::new(tracing_config.level_filter));

    return_it.push(try_create_display_layer(
        tracing_config.level_filter,
        tracing_config.display_preference,
    )?);

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// This never fails today; the [`miette::Result`] keeps the signature the same as
/// [`try_create_layers`].
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    display_preference: DisplayPreference,
) -> miette::Result<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    Ok(match display_preference {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    })
}

/// Logging is **DISABLED** by **default**. Call this once from `main()` with a level
/// other than [`LevelFilter::OFF`] to see the crate's debug events.
///
/// # Errors
///
/// Returns an error if a global default subscriber has already been set.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.level_filter == LevelFilter::OFF {
        return Ok(());
    }

    it.install_global()
}

/// Same as [`try_initialize_logging_global`], but only for the current thread, and only
/// until the returned guard is dropped. Returns [`None`] if logging is off.
///
/// # Errors
///
/// Returns an error if the layers can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.level_filter == LevelFilter::OFF {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
