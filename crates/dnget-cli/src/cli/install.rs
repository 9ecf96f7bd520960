//! Install and dry-run handlers.

use anyhow::{Context, Result};
use dnget_core::config::DngetConfig;
use dnget_core::transport::CurlTransport;
use dnget_core::{install, resolve, InstallRequest, ResolvedArtifact};
use std::path::Path;

fn print_artifact(artifact: &ResolvedArtifact) {
    println!("channel:  {}", artifact.channel_version);
    println!("release:  {}", artifact.release_version);
    println!("version:  {}", artifact.component_version);
    println!("rid:      {}", artifact.rid);
    println!("url:      {}", artifact.url);
    println!("sha512:   {}", artifact.sha512);
}

/// Resolve the request and print what would be downloaded.
pub fn run_dry_run(cfg: &DngetConfig, index_url: &str, request: &InstallRequest) -> Result<()> {
    let transport = CurlTransport::from_config(cfg);
    let artifact = resolve(&transport, index_url, request)?;
    print_artifact(&artifact);
    Ok(())
}

/// Resolve, download into `install_dir` and verify.
pub fn run_install(
    cfg: &DngetConfig,
    index_url: &str,
    request: &InstallRequest,
    install_dir: &Path,
) -> Result<()> {
    std::fs::create_dir_all(install_dir)
        .with_context(|| format!("create install dir {}", install_dir.display()))?;
    let transport = CurlTransport::from_config(cfg);
    tracing::info!(channel = %request.channel, os = %request.os, arch = %request.arch, "install requested");
    let installed = install(&transport, index_url, request, install_dir)?;
    print_artifact(&installed.artifact);
    println!("saved:    {}", installed.path.display());
    Ok(())
}
