//! HTTP capability used by the installer.
//!
//! The installer only depends on [`Transport`]; [`CurlTransport`] is the real
//! implementation and tests substitute an in-memory one.

mod http;

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::error::{InstallError, Result};
use crate::url_model;

pub use http::CurlTransport;

pub trait Transport {
    /// GET `url` and return the whole body.
    fn get(&self, url: &str) -> Result<Vec<u8>>;

    /// GET `url` and stream the body into `dest` (created or truncated).
    /// Returns the number of bytes written. A failed transfer leaves whatever
    /// was written so far on disk.
    fn download(&self, url: &str, dest: &Path) -> Result<u64>;
}

/// Fetch and deserialize a JSON document. Transport and parse failures are both `FetchError`.
pub fn fetch_json<T: DeserializeOwned>(transport: &dyn Transport, url: &str) -> Result<T> {
    let body = transport.get(url)?;
    tracing::debug!(url, bytes = body.len(), "fetched json");
    serde_json::from_slice(&body).map_err(|e| InstallError::fetch(url, e))
}

/// Download `url` into `dest_dir` (file named after the URL's last path
/// segment) and check its SHA-512 against `expected_sha512`.
pub fn fetch_and_verify(
    transport: &dyn Transport,
    url: &str,
    expected_sha512: &str,
    dest_dir: &Path,
) -> Result<PathBuf> {
    let path = dest_dir.join(url_model::archive_filename(url));
    let written = transport.download(url, &path)?;
    tracing::info!(url, path = %path.display(), bytes = written, "download finished");
    checksum::verify_sha512(&path, expected_sha512)?;
    Ok(path)
}
