use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Where and how to talk to a portal. Held read-only by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalOptions {
    /// Portal base URL, e.g. `https://siasky.net`.
    pub base_url: String,
    /// Upload endpoint path, joined onto `base_url`.
    pub upload_path: String,
    /// Multipart field name for single-file uploads.
    pub file_field_name: String,
    /// Multipart field name for each part of a directory upload.
    pub directory_field_name: String,
}

impl Default for PortalOptions {
    fn default() -> Self {
        Self {
            base_url: "https://siasky.net".to_string(),
            upload_path: "/skynet/skyfile".to_string(),
            file_field_name: "file".to_string(),
            directory_field_name: "files[]".to_string(),
        }
    }
}

/// Fresh copy of the built-in public portal options.
pub fn default_portal_options() -> PortalOptions {
    PortalOptions::default()
}

/// Global configuration loaded from `~/.config/skynet/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkynetConfig {
    pub portal: PortalOptions,
    /// Seconds to wait for the TCP/TLS connection.
    pub connect_timeout_secs: u64,
    /// Upper bound in seconds for one whole request, body included.
    pub timeout_secs: u64,
}

impl Default for SkynetConfig {
    fn default() -> Self {
        Self {
            portal: PortalOptions::default(),
            connect_timeout_secs: 30,
            timeout_secs: 3600,
        }
    }
}

impl SkynetConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("skynet")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SkynetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SkynetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SkynetConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
