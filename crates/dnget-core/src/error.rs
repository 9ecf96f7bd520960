//! Error taxonomy for resolving and fetching a release archive.
//!
//! Every failure is terminal for one invocation. Variants carry whatever
//! channel / release / runtime identifier context was known at the step that
//! failed so the CLI can report it without re-deriving anything.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::install::RuntimeFlavor;

pub type Result<T> = std::result::Result<T, InstallError>;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error(
        "invalid channel '{input}': expected lts, sts, a two-part version (8.0) or a feature band (8.0.2xx)"
    )]
    InvalidChannelSpec { input: String },

    #[error("unsupported platform '{os}'")]
    UnsupportedPlatform { os: String },

    #[error("could not resolve a runtime identifier for os '{os}' and architecture '{arch}'")]
    UnresolvedRuntimeIdentifier {
        os: String,
        arch: String,
        #[source]
        source: Box<InstallError>,
    },

    #[error("releases index at {url} is empty or unavailable")]
    CatalogUnavailable { url: String },

    #[error("no channel matches '{channel}'")]
    NoMatchingChannel { channel: String },

    #[error("no releases found for channel '{channel_version}'")]
    NoReleasesForChannel { channel_version: String },

    #[error("no release for '{channel}' found in channel '{channel_version}'")]
    NoMatchingRelease {
        channel: String,
        channel_version: String,
    },

    #[error("no SDK for '{channel}' found in release '{release_version}'")]
    NoMatchingSdk {
        channel: String,
        release_version: String,
    },

    #[error("release '{release_version}' does not ship a {runtime} runtime")]
    NoMatchingRuntime {
        runtime: RuntimeFlavor,
        release_version: String,
    },

    #[error(
        "no archive for runtime identifier {rid} found in release '{release_version}' ({component_version})"
    )]
    NoMatchingFile {
        rid: String,
        release_version: String,
        component_version: String,
    },

    #[error("fetching {url} failed: {reason}")]
    FetchError { url: String, reason: String },

    #[error("SHA-512 of {} does not match the catalog (expected {expected}, got {actual})", path.display())]
    IntegrityMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InstallError {
    pub(crate) fn fetch(url: &str, reason: impl ToString) -> Self {
        InstallError::FetchError {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        InstallError::Io {
            path: path.into(),
            source,
        }
    }
}
