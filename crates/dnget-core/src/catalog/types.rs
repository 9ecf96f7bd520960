//! Release catalog documents (`releases-index.json` and per-channel `releases.json`).
//!
//! Only the fields used for selection are modeled; everything else in the
//! published documents is ignored.

use serde::Deserialize;

/// Root of `releases-index.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleasesIndex {
    #[serde(rename = "releases-index", default)]
    pub channels: Vec<ChannelEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelEntry {
    #[serde(rename = "channel-version")]
    pub channel_version: String,
    /// `lts`, `sts`, or anything else the index publishes.
    #[serde(rename = "release-type", default)]
    pub release_type: String,
    /// Location of this channel's release list.
    #[serde(rename = "releases.json")]
    pub releases_url: String,
}

/// Root of a channel's `releases.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelReleases {
    #[serde(default)]
    pub releases: Vec<Release>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    #[serde(rename = "release-version")]
    pub release_version: String,
    /// Newest first; selection relies on this order.
    #[serde(default)]
    pub sdks: Vec<Component>,
    #[serde(default)]
    pub runtime: Option<Component>,
    #[serde(rename = "aspnetcore-runtime", default)]
    pub aspnetcore_runtime: Option<Component>,
}

/// An SDK or shared runtime build with its downloadable files.
#[derive(Debug, Clone, Deserialize)]
pub struct Component {
    /// `major.minor.patchBB` for SDKs, e.g. `8.0.203`.
    pub version: String,
    #[serde(default)]
    pub files: Vec<ReleaseFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseFile {
    #[serde(default)]
    pub rid: String,
    #[serde(default)]
    pub name: String,
    pub url: String,
    /// Lowercase hex SHA-512 of the file.
    #[serde(default)]
    pub hash: String,
}
