//! Resolution and download of one archive: index -> channel -> release list
//! -> release -> SDK or runtime -> file -> verified download.
//!
//! Strictly sequential; nothing is retried or cached.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::catalog::{self, ChannelReleases, Component, Release, ReleasesIndex};
use crate::channel::ChannelSpec;
use crate::error::{InstallError, Result};
use crate::platform::{self, RuntimeIdentifier};
use crate::transport::{self, Transport};

/// Shared runtime flavors published next to the SDKs in each release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeFlavor {
    /// `Microsoft.NETCore.App` (`runtime` in the catalog).
    Dotnet,
    /// `Microsoft.AspNetCore.App` (`aspnetcore-runtime` in the catalog).
    Aspnetcore,
}

impl fmt::Display for RuntimeFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeFlavor::Dotnet => f.write_str("dotnet"),
            RuntimeFlavor::Aspnetcore => f.write_str("aspnetcore"),
        }
    }
}

/// Which component of a release to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtifactKind {
    #[default]
    Sdk,
    Runtime(RuntimeFlavor),
}

#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub channel: ChannelSpec,
    pub kind: ArtifactKind,
    /// Raw architecture name (`x86_64`, `arm64`, ...).
    pub arch: String,
    /// Raw OS name (`linux`, `macos`, `Windows`, ...).
    pub os: String,
}

impl InstallRequest {
    pub fn new(channel: ChannelSpec, os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            channel,
            kind: ArtifactKind::Sdk,
            arch: arch.into(),
            os: os.into(),
        }
    }

    pub fn with_kind(mut self, kind: ArtifactKind) -> Self {
        self.kind = kind;
        self
    }

    /// Runtime identifier for this request; computed on every call.
    pub fn rid(&self) -> Result<RuntimeIdentifier> {
        platform::resolve_rid(&self.os, &self.arch)
    }
}

/// The file a request resolved to, with the catalog context it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub channel_version: String,
    pub release_version: String,
    /// Version of the selected SDK or runtime build.
    pub component_version: String,
    pub rid: String,
    pub file_name: String,
    pub url: String,
    pub sha512: String,
}

#[derive(Debug, Clone)]
pub struct InstalledArtifact {
    pub artifact: ResolvedArtifact,
    pub path: PathBuf,
}

/// Walk the catalog at `index_url` down to the single file matching `request`.
pub fn resolve(
    transport: &dyn Transport,
    index_url: &str,
    request: &InstallRequest,
) -> Result<ResolvedArtifact> {
    let rid = request.rid()?;

    let index: ReleasesIndex = transport::fetch_json(transport, index_url)?;
    if index.channels.is_empty() {
        return Err(InstallError::CatalogUnavailable {
            url: index_url.to_string(),
        });
    }

    let channel = catalog::select_channel(&index.channels, &request.channel)?;
    tracing::info!(
        requested = %request.channel,
        channel = %channel.channel_version,
        release_type = %channel.release_type,
        "selected channel"
    );

    let releases: ChannelReleases = transport::fetch_json(transport, &channel.releases_url)?;
    if releases.releases.is_empty() {
        return Err(InstallError::NoReleasesForChannel {
            channel_version: channel.channel_version.clone(),
        });
    }

    let release =
        catalog::select_release(&releases.releases, &request.channel, &channel.channel_version)?;
    tracing::info!(release = %release.release_version, "selected release");

    let component = select_component(release, request)?;
    tracing::info!(kind = ?request.kind, version = %component.version, "selected component");

    let file = catalog::select_file(
        &component.files,
        &rid,
        &release.release_version,
        &component.version,
    )?;
    tracing::info!(rid = %rid, file = %file.name, "selected file");

    Ok(ResolvedArtifact {
        channel_version: channel.channel_version.clone(),
        release_version: release.release_version.clone(),
        component_version: component.version.clone(),
        rid: rid.to_string(),
        file_name: file.name.clone(),
        url: file.url.clone(),
        sha512: file.hash.clone(),
    })
}

fn select_component<'a>(release: &'a Release, request: &InstallRequest) -> Result<&'a Component> {
    match request.kind {
        ArtifactKind::Sdk => catalog::select_sdk(release, &request.channel),
        ArtifactKind::Runtime(flavor) => {
            let runtime = match flavor {
                RuntimeFlavor::Dotnet => release.runtime.as_ref(),
                RuntimeFlavor::Aspnetcore => release.aspnetcore_runtime.as_ref(),
            };
            runtime.ok_or_else(|| InstallError::NoMatchingRuntime {
                runtime: flavor,
                release_version: release.release_version.clone(),
            })
        }
    }
}

/// Resolve `request`, then download the archive into `dest_dir` and verify its SHA-512.
pub fn install(
    transport: &dyn Transport,
    index_url: &str,
    request: &InstallRequest,
    dest_dir: &Path,
) -> Result<InstalledArtifact> {
    let artifact = resolve(transport, index_url, request)?;
    let path = transport::fetch_and_verify(transport, &artifact.url, &artifact.sha512, dest_dir)?;
    Ok(InstalledArtifact { artifact, path })
}
