// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::try_create_layers;

/// Configure where log output goes, and the log level.
///
/// Fields:
/// - `level_filter`: [`LevelFilter`] to use. [`LevelFilter::OFF`] disables logging.
/// - `display_preference`: [`DisplayPreference`] to choose between `stdout` and
///   `stderr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub display_preference: DisplayPreference,
}

/// Logs go to `stderr` by default, so they don't mix with a program's regular output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    #[default]
    Stderr,
}

impl Default for TracingConfig {
    fn default() -> Self { Self::from(LevelFilter::DEBUG) }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            display_preference: DisplayPreference::default(),
        }
    }
}

impl From<(LevelFilter, DisplayPreference)> for TracingConfig {
    fn from((level_filter, display_preference): (LevelFilter, DisplayPreference)) -> Self {
        Self {
            level_filter,
            display_preference,
        }
    }
}

impl TracingConfig {
    /// Sets the global default subscriber. It can't be unset or changed once it is set,
    /// so this is meant for applications.
    ///
    /// # Errors
    ///
    /// Returns an error if a global default subscriber has already been set.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|err| {
                miette::miette!(
                    code = "r3bl_tango::logging_already_initialized",
                    "Could not install global tracing subscriber: {err}"
                )
            })
    }

    /// Sets a subscriber for the current thread only, until the returned guard is
    /// dropped. This is meant for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the layers can't be created.
    pub fn install_thread_local(self) -> miette::Result<DefaultGuard> {
        let layers = try_create_layers(self)?;
        Ok(tracing_subscriber::registry().with(layers).set_default())
    }
}
