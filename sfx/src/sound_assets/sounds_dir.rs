// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs,
          io::ErrorKind,
          path::{Path, PathBuf}};

use miette::Diagnostic;

use crate::DEBUG_SOUND_ASSETS_MOD;

/// Where the game loads its sound effects from, relative to the process working
/// directory (like the rest of the project's asset tree).
pub const SOUNDS_DIR: &str = "assets/sounds";

pub type SoundsDirResult<T> = core::result::Result<T, SoundsDirError>;

/// Failure categories for creating the sounds directory chain. These are rare
/// precondition violations (not part of normal operation), so callers are expected to
/// propagate them and let the process exit non-zero.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum SoundsDirError {
    /// Mapped from [`ErrorKind::PermissionDenied`] and
    /// [`ErrorKind::ReadOnlyFilesystem`].
    #[error("Permission denied: {0}")]
    #[diagnostic(
        code(r3bl_sfx::sounds_dir::permission_denied),
        help("Run sfx from a folder you can write to, eg: the root of the game project")
    )]
    PermissionDenied(String),

    /// Mapped from [`ErrorKind::InvalidInput`].
    #[error("Invalid directory name: {0}")]
    #[diagnostic(code(r3bl_sfx::sounds_dir::invalid_name))]
    InvalidName(String),

    /// Everything else the filesystem can raise.
    #[error(transparent)]
    #[diagnostic(code(r3bl_sfx::sounds_dir::io))]
    IoError(#[from] std::io::Error),
}

/// Idempotently ensure that [`SOUNDS_DIR`] exists, creating any missing intermediate
/// folders. If the directory (or the full chain) already exists this succeeds
/// silently. Returns the absolute path to the directory, for display.
///
/// # Errors
///
/// Returns a [`SoundsDirError`] if the directory chain can't be created, eg: due to
/// permissions, or a read-only filesystem.
pub fn try_ensure_sounds_dir() -> SoundsDirResult<PathBuf> {
    let sounds_dir = Path::new(SOUNDS_DIR);

    if let Err(err) = fs::create_dir_all(sounds_dir) {
        // % is Display, ? is Debug.
        tracing::error!(
            message = "Could not create sounds directory",
            sounds_dir = %sounds_dir.display(),
            error = ?err
        );
        return handle_err(err);
    }

    let abs_sounds_dir = std::path::absolute(sounds_dir)?;

    DEBUG_SOUND_ASSETS_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Ensured sounds directory exists",
            abs_sounds_dir = %abs_sounds_dir.display()
        );
    });

    Ok(abs_sounds_dir)
}

fn handle_err<T>(err: std::io::Error) -> SoundsDirResult<T> {
    match err.kind() {
        ErrorKind::PermissionDenied => {
            Err(SoundsDirError::PermissionDenied(err.to_string()))
        }
        ErrorKind::InvalidInput => Err(SoundsDirError::InvalidName(err.to_string())),
        ErrorKind::ReadOnlyFilesystem => {
            Err(SoundsDirError::PermissionDenied(err.to_string()))
        }
        _ => Err(SoundsDirError::IoError(err)),
    }
}
