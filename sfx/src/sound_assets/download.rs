// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs, io::Write as _, path::Path};

use miette::Diagnostic;

use crate::{DEBUG_SOUND_ASSETS_MOD, ok};

mod constants {
    pub const USER_AGENT: &str = "sfx/1.0";
}

pub type DownloadResult<T> = core::result::Result<T, DownloadError>;

/// What can go wrong while fetching a single file over HTTP. Each variant names one
/// failure category, so callers can report connection problems, HTTP status errors,
/// body transfer errors, and local write errors differently instead of folding them
/// all into one opaque message.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum DownloadError {
    #[error("Invalid URL: {0}")]
    #[diagnostic(code(r3bl_sfx::download::invalid_url))]
    InvalidUrl(String),

    #[error("Connection failed: {0}")]
    #[diagnostic(code(r3bl_sfx::download::connection))]
    Connection(String),

    #[error("Server responded with HTTP status {status}")]
    #[diagnostic(code(r3bl_sfx::download::http_status))]
    HttpStatus { status: reqwest::StatusCode },

    #[error("Failed to read response body: {0}")]
    #[diagnostic(code(r3bl_sfx::download::body))]
    Body(String),

    #[error("Failed to write destination file: {0}")]
    #[diagnostic(code(r3bl_sfx::download::write))]
    Write(#[from] std::io::Error),
}

/// Sort a [`reqwest::Error`] into the matching [`DownloadError`] category.
fn classify_reqwest_error(err: reqwest::Error) -> DownloadError {
    // A request that never produced a valid URL fails before anything hits the wire.
    if err.is_builder() {
        return DownloadError::InvalidUrl(err.to_string());
    }
    // `error_for_status` attaches the status to the error.
    if let Some(status) = err.status() {
        return DownloadError::HttpStatus { status };
    }
    if err.is_body() || err.is_decode() {
        return DownloadError::Body(err.to_string());
    }
    DownloadError::Connection(err.to_string())
}

pub fn create_client_with_user_agent(
    user_agent: Option<&str>,
) -> DownloadResult<reqwest::Client> {
    let it = reqwest::Client::builder()
        .user_agent(user_agent.map_or_else(
            || constants::USER_AGENT.to_owned(),
            |user_agent| user_agent.to_owned(),
        ))
        .build();
    it.map_err(classify_reqwest_error)
}

/// Download `source_url` into `destination_file`, overwriting any existing file. The
/// whole body is buffered in memory before the destination is created, so a transfer
/// that dies partway through never leaves a truncated file behind.
///
/// # Errors
///
/// Returns a [`DownloadError`] naming which stage failed. Never panics on bad input;
/// a malformed URL comes back as [`DownloadError::InvalidUrl`].
pub async fn try_download_file(
    source_url: &str,
    destination_file: impl AsRef<Path>,
) -> DownloadResult<()> {
    let destination = destination_file.as_ref();

    let client = create_client_with_user_agent(None)?;
    let response = client
        .get(source_url)
        .send()
        .await
        .map_err(classify_reqwest_error)?;
    let response = response.error_for_status().map_err(classify_reqwest_error)?;
    let response = response.bytes().await.map_err(classify_reqwest_error)?;

    let mut dest_file = fs::File::create(destination)?;
    dest_file.write_all(&response)?;

    DEBUG_SOUND_ASSETS_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Downloaded file",
            source_url = %source_url,
            destination = ?destination,
            size_bytes = %response.len()
        );
    });

    ok!()
}

#[cfg(test)]
mod tests_download {
    use std::{io::{Read as _, Write as _},
              net::TcpListener,
              thread};

    use super::*;
    use crate::{assert_eq2, try_create_temp_dir};

    /// Serve one canned HTTP response on a loopback port, then exit. Returns the URL
    /// to hit. Keeps the tests hermetic, so they pass with no network access.
    fn spawn_one_shot_server(canned_response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                // Drain the request headers before replying.
                let mut req = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    match stream.read(&mut chunk) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            req.extend_from_slice(&chunk[..n]);
                            if req.windows(4).any(|window| window == b"\r\n\r\n") {
                                break;
                            }
                        }
                    }
                }
                let _ = stream.write_all(canned_response.as_bytes());
            }
        });
        format!("http://{addr}/flip.mp3")
    }

    #[tokio::test]
    async fn test_download_success_writes_non_empty_file() {
        let root = try_create_temp_dir().unwrap();
        let destination_file = root.join("flip.mp3");

        let source_url = spawn_one_shot_server(
            "HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
        );

        let result = try_download_file(&source_url, &destination_file).await;

        assert!(result.is_ok());
        assert!(destination_file.exists());
        assert!(destination_file.metadata().unwrap().len() > 0);
    }

    #[tokio::test]
    async fn test_download_overwrites_existing_destination_file() {
        let root = try_create_temp_dir().unwrap();
        let destination_file = root.join("flip.mp3");

        // Re-fetching over a stale file replaces its content wholesale.
        fs::write(&destination_file, "stale bytes from an earlier run").unwrap();

        let source_url = spawn_one_shot_server(
            "HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nfresh",
        );

        let result = try_download_file(&source_url, &destination_file).await;

        assert!(result.is_ok());
        assert_eq2!(fs::read_to_string(&destination_file).unwrap(), "fresh");
    }

    #[tokio::test]
    async fn test_download_http_error_status_is_reported() {
        let root = try_create_temp_dir().unwrap();
        let destination_file = root.join("flip.mp3");

        let source_url = spawn_one_shot_server(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );

        let result = try_download_file(&source_url, &destination_file).await;

        match result {
            Err(DownloadError::HttpStatus { status }) => {
                assert_eq2!(status, reqwest::StatusCode::NOT_FOUND);
            }
            other => panic!("expected HttpStatus error, got: {other:?}"),
        }
        // A failed download must not leave a destination file behind.
        assert!(!destination_file.exists());
    }

    #[tokio::test]
    async fn test_download_unreachable_host_is_connection_error() {
        let root = try_create_temp_dir().unwrap();
        let destination_file = root.join("flip.mp3");

        // Port 1 is reserved and nothing listens on it, so connect fails right away.
        let result = try_download_file("http://127.0.0.1:1/flip.mp3", &destination_file).await;

        assert!(matches!(result, Err(DownloadError::Connection(_))));
        assert!(!destination_file.exists());
    }

    #[tokio::test]
    async fn test_download_malformed_url_is_invalid_url_error() {
        let root = try_create_temp_dir().unwrap();
        let destination_file = root.join("flip.mp3");

        let result = try_download_file("not a url at all", &destination_file).await;

        assert!(matches!(result, Err(DownloadError::InvalidUrl(_))));
        assert!(!destination_file.exists());
    }

    #[tokio::test]
    async fn test_download_write_failure_is_write_error() {
        let root = try_create_temp_dir().unwrap();
        // The parent folder does not exist, so creating the destination file fails.
        let destination_file = root.join("missing_subdir").join("flip.mp3");

        let source_url = spawn_one_shot_server(
            "HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
        );

        let result = try_download_file(&source_url, &destination_file).await;

        assert!(matches!(result, Err(DownloadError::Write(_))));
        assert!(!destination_file.exists());
    }
}
