//! CLI for dnget.

mod install;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use dnget_core::platform::{HOST_ARCH, HOST_OS};
use dnget_core::{config, ArtifactKind, ChannelSpec, InstallRequest, RuntimeFlavor};
use std::path::PathBuf;

use install::{run_dry_run, run_install};

/// Fetch a .NET SDK or shared runtime archive and verify it against the release catalog.
#[derive(Debug, Parser)]
#[command(name = "dnget")]
#[command(
    about = "dnget: download a verified .NET SDK or runtime archive",
    long_about = None
)]
pub struct Cli {
    /// The release grouping to download from: sts, lts, a two-part version
    /// number (8.0) or a three-part version in major.minor.patchxx format (8.0.2xx).
    #[arg(short = 'c', long)]
    pub channel: ChannelSpec,

    /// Download a shared runtime instead of the SDK.
    #[arg(long, value_enum)]
    pub runtime: Option<RuntimeArg>,

    /// Target architecture (arm64, s390x, ppc64le, loongarch64; anything else means x64).
    #[arg(long, default_value = HOST_ARCH)]
    pub architecture: String,

    /// Target operating system (linux, linux-musl, osx/macos, win/windows, freebsd, rhel.6).
    #[arg(long, default_value = HOST_OS)]
    pub os: String,

    /// Directory to save the archive in (default: config `install_dir`, else current directory).
    #[arg(short = 'i', long, value_name = "DIR")]
    pub install_dir: Option<PathBuf>,

    /// Override the releases index URL from the config file.
    #[arg(long, value_name = "URL")]
    pub releases_index_url: Option<String>,

    /// Resolve and print the archive URL and digest without downloading.
    #[arg(long)]
    pub dry_run: bool,

    /// Log everything at debug level.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RuntimeArg {
    Dotnet,
    Aspnetcore,
}

impl From<RuntimeArg> for RuntimeFlavor {
    fn from(arg: RuntimeArg) -> Self {
        match arg {
            RuntimeArg::Dotnet => RuntimeFlavor::Dotnet,
            RuntimeArg::Aspnetcore => RuntimeFlavor::Aspnetcore,
        }
    }
}

impl Cli {
    pub fn request(&self) -> InstallRequest {
        let kind = self
            .runtime
            .map(|r| ArtifactKind::Runtime(r.into()))
            .unwrap_or_default();
        InstallRequest::new(self.channel.clone(), &self.os, &self.architecture).with_kind(kind)
    }

    pub fn run(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let index_url = self
            .releases_index_url
            .clone()
            .unwrap_or_else(|| cfg.releases_index_url.clone());
        let request = self.request();

        if self.dry_run {
            return run_dry_run(&cfg, &index_url, &request);
        }

        let install_dir = match self.install_dir.clone().or_else(|| cfg.install_dir.clone()) {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        run_install(&cfg, &index_url, &request, &install_dir)
    }
}
