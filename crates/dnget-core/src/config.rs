use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Releases index published by the .NET team.
pub const DEFAULT_RELEASES_INDEX_URL: &str =
    "https://builds.dotnet.microsoft.com/dotnet/release-metadata/releases-index.json";

/// Global configuration loaded from `~/.config/dnget/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DngetConfig {
    /// URL of `releases-index.json`.
    pub releases_index_url: String,
    /// Connect timeout in seconds for every HTTP request.
    pub connect_timeout_secs: u64,
    /// Overall timeout in seconds for one request (covers the archive download).
    pub timeout_secs: u64,
    /// Directory the archive is saved into (None = current directory).
    #[serde(default)]
    pub install_dir: Option<PathBuf>,
}

impl Default for DngetConfig {
    fn default() -> Self {
        Self {
            releases_index_url: DEFAULT_RELEASES_INDEX_URL.to_string(),
            connect_timeout_secs: 30,
            timeout_secs: 3600,
            install_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dnget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DngetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DngetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DngetConfig = toml::from_str(&data)?;
    Ok(cfg)
}
