//! Release catalog: document types and the selectors that walk
//! channel -> release -> SDK/runtime -> file.

mod select;
mod types;

pub use select::{find_matching_sdk, select_channel, select_file, select_release, select_sdk};
pub use types::{ChannelEntry, ChannelReleases, Component, Release, ReleaseFile, ReleasesIndex};
