pub mod config;
pub mod error;
pub mod logging;

pub mod catalog;
pub mod channel;
pub mod checksum;
pub mod install;
pub mod platform;
pub mod transport;
pub mod url_model;

pub use channel::ChannelSpec;
pub use error::{InstallError, Result};
pub use install::{
    install, resolve, ArtifactKind, InstallRequest, InstalledArtifact, ResolvedArtifact,
    RuntimeFlavor,
};
pub use platform::RuntimeIdentifier;
