// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// What one `setup` run produced: the resolved asset directory and the guide text
/// for the binary to print.
#[derive(Debug)]
pub struct SetupDetails {
    pub sounds_dir: PathBuf,
    pub guide: String,
}

/// Outcome of one `fetch` run. A download that fails is a value here, not an
/// `Err`, so the caller can report it and the process still exits 0.
#[derive(Debug)]
pub enum FetchDetails {
    Fetched {
        destination: PathBuf,
        message: String,
    },
    FetchFailed {
        destination: PathBuf,
        message: String,
    },
}

/// Command run details for the sfx binary.
#[derive(Debug)]
pub enum CommandRunDetails {
    Setup(SetupDetails),
    Fetch(FetchDetails),
}

impl std::fmt::Display for CommandRunDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandRunDetails::Setup(details) => write!(f, "{}", details.guide),
            CommandRunDetails::Fetch(
                FetchDetails::Fetched { message, .. }
                | FetchDetails::FetchFailed { message, .. },
            ) => write!(f, "{message}"),
        }
    }
}
