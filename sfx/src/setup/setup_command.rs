// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{types::{CommandRunDetails, SetupDetails},
            ui_str};
use crate::{CommonResult, DEBUG_SOUND_ASSETS_MOD, sound_assets::try_ensure_sounds_dir};

/// Run the entry routine: ensure the asset directory exists, then assemble the
/// manual download guide for the binary to print.
///
/// # Errors
///
/// Directory creation failure is unrecoverable and propagates to the caller; the
/// binary turns it into a non-zero exit.
pub fn handle_setup_command() -> CommonResult<CommandRunDetails> {
    let sounds_dir = try_ensure_sounds_dir()?;

    let guide = ui_str::setup_guide_msg(&sounds_dir);

    DEBUG_SOUND_ASSETS_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Assembled setup guide",
            sounds_dir = ?sounds_dir,
            guide_bytes = %guide.len()
        );
    });

    let it = CommandRunDetails::Setup(SetupDetails { sounds_dir, guide });
    Ok(it)
}

#[cfg(test)]
mod tests_setup_command {
    use std::path::Path;

    use super::*;
    use crate::{SOUNDS_DIR, serial_preserve_pwd_test, try_create_temp_dir};

    serial_preserve_pwd_test!(test_setup_creates_dir_and_mentions_every_filename, {
        let root = try_create_temp_dir().unwrap();
        std::env::set_current_dir(&root.inner).unwrap();

        let details = handle_setup_command().unwrap();

        assert!(Path::new(SOUNDS_DIR).is_dir());

        let CommandRunDetails::Setup(setup_details) = details else {
            panic!("expected setup details");
        };
        let guide = &setup_details.guide;
        assert!(guide.contains("flip.mp3"));
        assert!(guide.contains("match.mp3"));
        assert!(guide.contains("victory.mp3"));
        assert!(setup_details.sounds_dir.ends_with(SOUNDS_DIR));
    });

    serial_preserve_pwd_test!(test_setup_twice_succeeds_both_times, {
        let root = try_create_temp_dir().unwrap();
        std::env::set_current_dir(&root.inner).unwrap();

        let first = handle_setup_command();
        let second = handle_setup_command();

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert!(Path::new(SOUNDS_DIR).is_dir());
    });
}
