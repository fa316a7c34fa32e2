// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use crate::{SOUND_ASSETS, common::fmt, sound_assets::DownloadError};

/// Banner that opens the guide.
#[must_use]
pub fn banner_msg() -> String {
    format!(
        "{a}\n{b}",
        a = fmt::heading("🎵 Memory Match Game - Sound Setup Helper"),
        b = fmt::dim("=".repeat(50))
    )
}

/// Confirmation that the asset directory exists, with its resolved location.
#[must_use]
pub fn sounds_dir_created_msg(sounds_dir: &Path) -> String {
    format!(
        "{a} {b}",
        a = fmt::normal("📁 Created sounds directory at:"),
        b = fmt::emphasis(sounds_dir.display())
    )
}

/// Recommended places to find free sound effects.
#[must_use]
pub fn sound_sources_msg() -> String {
    format!(
        "{a}\n{b}\n{c}\n{d}\n{e}",
        a = fmt::heading("🔊 Recommended Free Sound Sources:"),
        b = fmt::normal("1. Freesound.org - Free sounds with Creative Commons licenses"),
        c = fmt::normal("2. Zapsplat.com - Free with account registration"),
        d = fmt::normal("3. Pixabay.com - Free sound effects"),
        e = fmt::normal("4. Mixkit.co - Free sound effects")
    )
}

/// The catalog, one line per required file.
#[must_use]
pub fn sound_files_needed_msg() -> String {
    use std::fmt::Write;

    let mut acc = fmt::heading("🎯 Sound Files Needed:").to_string();
    for asset in SOUND_ASSETS {
        write!(
            acc,
            "\n  • {a} - {b}",
            a = fmt::emphasis(asset.filename),
            b = fmt::normal(asset.description)
        )
        .expect("Writing to String should never fail");
    }
    acc
}

/// Step-by-step instructions for the manual download path.
#[must_use]
pub fn manual_instructions_msg() -> String {
    format!(
        "{a}\n{b}\n{c}\n{d}\n{e}\n{f}",
        a = fmt::heading("📋 Manual Download Instructions:"),
        b = fmt::normal("1. Visit one of the recommended sound sources above"),
        c = fmt::normal("2. Search for sounds matching the descriptions"),
        d = fmt::normal("3. Download and rename files to match the required names"),
        e = fmt::normal("4. Place files in the assets/sounds/ directory"),
        f = fmt::normal("5. Run 'flutter pub get' to refresh assets")
    )
}

/// Tone-generator route for users who can't find suitable downloads.
#[must_use]
pub fn tone_generator_alternative_msg() -> String {
    format!(
        "{a}\n{b}\n{c}\n{d}\n{e}",
        a = fmt::heading("🔧 Alternative - Create Simple Beep Sounds:"),
        b = fmt::normal(
            "You can also create simple beep sounds using online tone generators:"
        ),
        c = fmt::normal("• Online Tone Generator: https://www.szynalski.com/tone-generator/"),
        d = fmt::normal("• Generate different frequency tones (e.g., 800Hz, 1000Hz, 1200Hz)"),
        e = fmt::normal("• Export as MP3 files")
    )
}

/// What to do once the files are in place.
#[must_use]
pub fn post_install_msg() -> String {
    format!(
        "{a}\n{b}\n{c}\n{d}",
        a = fmt::heading("✅ After adding sound files:"),
        b = fmt::normal(
            "1. Make sure files are named exactly: flip.mp3, match.mp3, victory.mp3"
        ),
        c = fmt::normal("2. Run: flutter clean && flutter pub get"),
        d = fmt::normal("3. Test sounds using the Sound Test Panel in the app")
    )
}

/// The full guide, assembled in the fixed order the user reads it. Sections are
/// separated by blank lines; the caller prints the result with `println!` which
/// supplies the final newline.
#[must_use]
pub fn setup_guide_msg(sounds_dir: &Path) -> String {
    [
        banner_msg(),
        sounds_dir_created_msg(sounds_dir),
        sound_sources_msg(),
        sound_files_needed_msg(),
        manual_instructions_msg(),
        tone_generator_alternative_msg(),
        post_install_msg(),
    ]
    .join("\n\n")
}

/// Confirmation for a completed download.
#[must_use]
pub fn fetch_success_msg(destination: &Path) -> String {
    format!(
        "{a} {b}",
        a = fmt::emphasis("✅ Downloaded:"),
        b = fmt::normal(destination.display())
    )
}

/// Report for a download that failed gracefully.
#[must_use]
pub fn fetch_failed_msg(destination: &Path, reason: &DownloadError) -> String {
    format!(
        "{a} {b}{c} {d}",
        a = fmt::error("❌ Failed to download"),
        b = fmt::error(destination.display()),
        c = fmt::colon(),
        d = fmt::normal(reason)
    )
}

#[cfg(test)]
mod tests_ui_str {
    use super::*;

    #[test]
    fn test_guide_contains_every_catalog_filename() {
        let guide = setup_guide_msg(Path::new("/tmp/assets/sounds"));
        for asset in SOUND_ASSETS {
            assert!(guide.contains(asset.filename));
            assert!(guide.contains(asset.description));
        }
    }

    #[test]
    fn test_guide_contains_every_section_in_order() {
        let guide = setup_guide_msg(Path::new("/tmp/assets/sounds"));

        let section_markers = [
            "Memory Match Game - Sound Setup Helper",
            "Created sounds directory at:",
            "Recommended Free Sound Sources:",
            "Sound Files Needed:",
            "Manual Download Instructions:",
            "Alternative - Create Simple Beep Sounds:",
            "After adding sound files:",
        ];

        let mut last_index = 0;
        for marker in section_markers {
            let index = guide.find(marker);
            let index = index.unwrap_or_else(|| panic!("missing section: {marker}"));
            assert!(index >= last_index, "section out of order: {marker}");
            last_index = index;
        }
    }

    #[test]
    fn test_guide_mentions_the_resolved_directory() {
        let guide = setup_guide_msg(Path::new("/tmp/some/project/assets/sounds"));
        assert!(guide.contains("/tmp/some/project/assets/sounds"));
    }

    #[test]
    fn test_fetch_messages_name_the_destination() {
        let destination = Path::new("assets/sounds/flip.mp3");

        let success = fetch_success_msg(destination);
        assert!(success.contains("✅ Downloaded:"));
        assert!(success.contains("assets/sounds/flip.mp3"));

        let reason = DownloadError::Connection("connection refused".into());
        let failed = fetch_failed_msg(destination, &reason);
        assert!(failed.contains("❌ Failed to download"));
        assert!(failed.contains("assets/sounds/flip.mp3"));
        assert!(failed.contains("connection refused"));
    }
}
