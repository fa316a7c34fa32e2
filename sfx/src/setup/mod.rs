// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub mod clap_config;
pub mod fetch_command;
pub mod setup_command;
pub mod types;
pub mod ui_str;

pub use clap_config::*;
pub use fetch_command::*;
pub use setup_command::*;
pub use types::*;
