// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

use super::tracing_init;

/// Configure the tracing log output for this app. Logs are only ever written to a
/// file, never to the display, since `stdout` is reserved for the printed user
/// guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// Where the log output should be written to. [`WriterConfig::File`] holds the path
/// to the log file (relative paths resolve against the process working directory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    File(String),
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    /// Install a global default subscriber, which once set, can't be unset or
    /// changed.
    /// - This is great for apps.
    /// - Docs for [Global default tracing
    ///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
    ///
    /// # Errors
    ///
    /// Returns an error if the log file (from the [`WriterConfig`]) can't be created.
    pub fn install_global(self) -> miette::Result<()> {
        tracing_init::try_create_layers(self).map(|layers| {
            tracing_subscriber::registry().with(layers).init();
        })
    }

    /// Install a thread local subscriber, which is dropped (and uninstalled) along
    /// with the returned guard.
    /// - This is great for tests.
    /// - Docs for [Thread local tracing
    ///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
    ///
    /// # Errors
    ///
    /// Returns an error if the log file (from the [`WriterConfig`]) can't be created.
    pub fn install_thread_local(
        self,
    ) -> miette::Result<tracing::dispatcher::DefaultGuard> {
        tracing_init::try_create_layers(self).map(|layers| {
            let subscriber = tracing_subscriber::registry().with(layers);
            tracing::subscriber::set_default(subscriber)
        })
    }
}
