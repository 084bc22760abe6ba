// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Optional [`tracing_subscriber`] setup for applications that use this crate.
//!
//! The library itself only emits `tracing::debug!` events (gated by
//! [`crate::DEBUG_TANGO_PALETTE`] and [`crate::DEBUG_TANGO_CONVERT`]). Nothing is printed
//! unless the application installs a subscriber, eg with
//! [`try_initialize_logging_global`].

// Attach sources.
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
