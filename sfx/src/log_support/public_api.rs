// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ok;
use super::tracing_config::{TracingConfig, WriterConfig};

// XMARK: Clever Rust, use of `impl Into<ConfigStruct>` for elegant constructor config options.
/// This module makes it easier to configure the logging system. Instead of having lots
/// of complex arguments, [`try_initialize_logging_global`] and
/// [`try_initialize_logging_thread_local`] both receive a type that implements the
/// [`Into<TracingConfig>`] trait. Here are some examples of what is possible:
///
/// ```no_run
/// use r3bl_sfx::{TracingConfig, WriterConfig, try_initialize_logging_global};
///
/// let level = tracing::Level::DEBUG;
/// let config_1: TracingConfig = level.into();
///
/// let level_filter = tracing_core::LevelFilter::DEBUG;
/// let config_2: TracingConfig = level_filter.into();
///
/// let writer_config = WriterConfig::File("log.txt".to_string());
/// let config_3: TracingConfig = writer_config.into();
///
/// try_initialize_logging_global(config_2);
/// ```
pub mod tracing_config_options {
    use super::{TracingConfig, WriterConfig};

    pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<tracing_core::LevelFilter> for TracingConfig {
        fn from(level_filter: tracing_core::LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::DEBUG,
                writer_config,
            }
        }
    }
}

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
/// - Configure this using the [mod@tracing_config_options] module (which converts many
///   types into [`Into<TracingConfig>`]). Look at this module for default configuration.
///
/// Logging is **DISABLED** by **default**.
///
/// If you don't call this function w/ a value other than
/// [`tracing_core::LevelFilter::OFF`], then logging won't be enabled. It won't matter
/// if you directly use the [`tracing::info!`], [`tracing::debug!`], etc. macros.
///
/// # Errors
///
/// Returns an error if the log file (from the [`WriterConfig`]) can't be created.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return ok!();
    }

    // Try to initialize the tracing system w/ file log output.
    it.install_global()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - This is great for tests.
/// - Docs for [Thread local tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
/// - Configure this using the [mod@tracing_config_options] module (which converts many
///   types into [`Into<TracingConfig>`]). Look at this module for default configuration.
///
/// Logging is **DISABLED** by **default**.
///
/// Unlike [`try_initialize_logging_global`], this function initializes the logging
/// system per thread. This is useful when you want to have different log levels for
/// different threads, eg in different tests.
///
/// # Errors
///
/// Returns an error if the log file (from the [`WriterConfig`]) can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<tracing::dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    // Try to initialize the tracing system w/ file log output.
    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests_public_api {
    use super::{tracing_config_options::DEFAULT_LOG_FILE_NAME, *};
    use crate::try_create_temp_dir;

    #[test]
    fn test_from_level_filter_uses_default_log_file() {
        let config: TracingConfig = tracing_core::LevelFilter::DEBUG.into();

        assert_eq!(config.get_level_filter(), tracing_core::LevelFilter::DEBUG);
        assert_eq!(
            config.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
    }

    #[test]
    fn test_initialize_logging_off_is_a_noop() {
        // OFF must not install anything (and must not create a log file).
        let result =
            try_initialize_logging_thread_local(tracing_core::LevelFilter::OFF);
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_initialize_logging_thread_local_writes_to_file() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("log.txt");
        let file_path_str = file_path.to_str().unwrap().to_string();

        let config: TracingConfig = WriterConfig::File(file_path_str).into();
        let guard = try_initialize_logging_thread_local(config).unwrap();
        assert!(guard.is_some());

        tracing::debug!(message = "writing to the thread local subscriber");

        assert!(file_path.exists());

        drop(guard);
    }
}
