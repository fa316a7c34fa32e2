// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use super::{types::{CommandRunDetails, FetchDetails},
            ui_str};
use crate::{CommonResult, DEBUG_SOUND_ASSETS_MOD, sound_assets::try_download_file};

/// Run one best-effort download. A download that fails comes back as
/// [`FetchDetails::FetchFailed`] inside `Ok`, so the caller reports it in text and
/// the process still exits 0.
pub async fn handle_fetch_command(
    url: &str,
    destination: &Path,
) -> CommonResult<CommandRunDetails> {
    let details = match try_download_file(url, destination).await {
        Ok(()) => FetchDetails::Fetched {
            destination: destination.to_path_buf(),
            message: ui_str::fetch_success_msg(destination),
        },
        Err(download_error) => {
            DEBUG_SOUND_ASSETS_MOD.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "Download failed gracefully",
                    url = %url,
                    error = %download_error
                );
            });
            FetchDetails::FetchFailed {
                destination: destination.to_path_buf(),
                message: ui_str::fetch_failed_msg(destination, &download_error),
            }
        }
    };

    let it = CommandRunDetails::Fetch(details);
    Ok(it)
}

#[cfg(test)]
mod tests_fetch_command {
    use super::*;
    use crate::try_create_temp_dir;

    #[tokio::test]
    async fn test_fetch_failure_is_graceful() {
        let root = try_create_temp_dir().unwrap();
        let destination = root.join("flip.mp3");

        // Nothing listens on port 1, so the download fails. The command layer must
        // still return Ok.
        let result =
            handle_fetch_command("http://127.0.0.1:1/flip.mp3", &destination).await;

        let details = result.unwrap();
        match details {
            CommandRunDetails::Fetch(FetchDetails::FetchFailed { message, .. }) => {
                assert!(message.contains("❌ Failed to download"));
            }
            other => panic!("expected a graceful fetch failure, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_url_is_graceful() {
        let root = try_create_temp_dir().unwrap();
        let destination = root.join("flip.mp3");

        let result = handle_fetch_command("not a url at all", &destination).await;

        assert!(matches!(
            result,
            Ok(CommandRunDetails::Fetch(FetchDetails::FetchFailed { .. }))
        ));
    }
}
