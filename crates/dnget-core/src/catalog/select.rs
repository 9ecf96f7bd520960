//! First-match selection over the catalog hierarchy.
//!
//! Every selector is a linear scan in catalog order and returns a typed
//! not-found error instead of an empty result.

use crate::channel::ChannelSpec;
use crate::error::InstallError;
use crate::platform::RuntimeIdentifier;

use super::types::{ChannelEntry, Component, Release, ReleaseFile};

/// File name suffixes of archive payloads. Installers (`.exe`, `.pkg`, ...) are never picked.
const ARCHIVE_SUFFIXES: [&str; 2] = [".tar.gz", ".zip"];

pub fn select_channel<'a>(
    channels: &'a [ChannelEntry],
    spec: &ChannelSpec,
) -> Result<&'a ChannelEntry, InstallError> {
    let found = match spec {
        ChannelSpec::Lts => channels.iter().find(|c| c.release_type == "lts"),
        ChannelSpec::Sts => channels.iter().find(|c| c.release_type == "sts"),
        ChannelSpec::ChannelVersion(version)
        | ChannelSpec::FeatureBand {
            channel_version: version,
            ..
        } => channels.iter().find(|c| &c.channel_version == version),
    };
    found.ok_or_else(|| InstallError::NoMatchingChannel {
        channel: spec.to_string(),
    })
}

/// Newest release for lts/sts/channel requests; for a feature band, the first
/// release carrying an SDK that [`find_matching_sdk`] accepts.
pub fn select_release<'a>(
    releases: &'a [Release],
    spec: &ChannelSpec,
    channel_version: &str,
) -> Result<&'a Release, InstallError> {
    let found = match spec {
        ChannelSpec::Lts | ChannelSpec::Sts | ChannelSpec::ChannelVersion(_) => releases.first(),
        ChannelSpec::FeatureBand { band, .. } => releases
            .iter()
            .find(|r| find_matching_sdk(&r.sdks, *band).is_some()),
    };
    found.ok_or_else(|| InstallError::NoMatchingRelease {
        channel: spec.to_string(),
        channel_version: channel_version.to_string(),
    })
}

/// First SDK whose third version component, read as an integer, is strictly
/// greater than `band`. A `250` SDK satisfies band `200`; so does `310`.
/// SDKs whose third component is not a plain integer (previews) never match.
pub fn find_matching_sdk(sdks: &[Component], band: u32) -> Option<&Component> {
    sdks.iter()
        .find(|sdk| feature_band_component(&sdk.version).is_some_and(|b| b > band))
}

fn feature_band_component(version: &str) -> Option<u32> {
    version.split('.').nth(2)?.parse().ok()
}

pub fn select_sdk<'a>(release: &'a Release, spec: &ChannelSpec) -> Result<&'a Component, InstallError> {
    let found = match spec {
        ChannelSpec::Lts | ChannelSpec::Sts | ChannelSpec::ChannelVersion(_) => release.sdks.first(),
        ChannelSpec::FeatureBand { band, .. } => find_matching_sdk(&release.sdks, *band),
    };
    found.ok_or_else(|| InstallError::NoMatchingSdk {
        channel: spec.to_string(),
        release_version: release.release_version.clone(),
    })
}

/// First file for `rid` whose name is an archive (`.tar.gz` or `.zip`).
pub fn select_file<'a>(
    files: &'a [ReleaseFile],
    rid: &RuntimeIdentifier,
    release_version: &str,
    component_version: &str,
) -> Result<&'a ReleaseFile, InstallError> {
    let rid = rid.to_string();
    files
        .iter()
        .find(|f| f.rid == rid && is_archive(&f.name))
        .ok_or_else(|| InstallError::NoMatchingFile {
            rid,
            release_version: release_version.to_string(),
            component_version: component_version.to_string(),
        })
}

fn is_archive(name: &str) -> bool {
    ARCHIVE_SUFFIXES.iter().any(|s| name.ends_with(s))
}
