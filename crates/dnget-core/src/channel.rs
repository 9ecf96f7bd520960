//! Parsing of the user's `--channel` argument into a typed request.

use std::fmt;
use std::str::FromStr;

use crate::error::InstallError;

/// What the user asked for. Exactly one shape is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelSpec {
    /// Newest channel marked `lts` in the releases index.
    Lts,
    /// Newest channel marked `sts` in the releases index.
    Sts,
    /// A two-part channel such as `8.0`. Not validated as numeric.
    ChannelVersion(String),
    /// A feature band such as `8.0.2xx`: channel `8.0`, band `200`.
    FeatureBand { channel_version: String, band: u32 },
}

impl ChannelSpec {
    /// Parse `input`. Fails with `InvalidChannelSpec` when it is empty or has
    /// neither two nor three dot-separated parts.
    pub fn parse(input: &str) -> Result<Self, InstallError> {
        let invalid = || InstallError::InvalidChannelSpec {
            input: input.to_string(),
        };
        if input.is_empty() {
            return Err(invalid());
        }
        match input {
            "lts" => return Ok(ChannelSpec::Lts),
            "sts" => return Ok(ChannelSpec::Sts),
            _ => {}
        }

        let parts: Vec<&str> = input.split('.').collect();
        match parts.as_slice() {
            [_, _] => Ok(ChannelSpec::ChannelVersion(input.to_string())),
            [major, minor, patch] => {
                let digit = patch
                    .chars()
                    .next()
                    .and_then(|c| c.to_digit(10))
                    .ok_or_else(invalid)?;
                Ok(ChannelSpec::FeatureBand {
                    channel_version: format!("{major}.{minor}"),
                    band: digit * 100,
                })
            }
            _ => Err(invalid()),
        }
    }

    /// The two-part channel version for version-shaped requests.
    pub fn channel_version(&self) -> Option<&str> {
        match self {
            ChannelSpec::ChannelVersion(v) => Some(v),
            ChannelSpec::FeatureBand {
                channel_version, ..
            } => Some(channel_version),
            ChannelSpec::Lts | ChannelSpec::Sts => None,
        }
    }
}

impl FromStr for ChannelSpec {
    type Err = InstallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChannelSpec::parse(s)
    }
}

impl fmt::Display for ChannelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelSpec::Lts => f.write_str("lts"),
            ChannelSpec::Sts => f.write_str("sts"),
            ChannelSpec::ChannelVersion(v) => f.write_str(v),
            ChannelSpec::FeatureBand {
                channel_version,
                band,
            } => write!(f, "{}.{}xx", channel_version, band / 100),
        }
    }
}
