//! `skynet download <skylink>` – save skylink content to disk.

use anyhow::{Context, Result};
use skynet_core::checksum;
use skynet_core::url_model::local_filename;
use skynet_core::SkynetClient;
use std::path::{Path, PathBuf};

pub async fn run_download(
    client: SkynetClient,
    skylink: String,
    output: Option<PathBuf>,
    download_dir: &Path,
) -> Result<()> {
    let link = skylink.clone();
    let result = tokio::task::spawn_blocking(move || client.read(&link))
        .await?
        .with_context(|| format!("download {}", skylink))?;

    let path = output.unwrap_or_else(|| download_dir.join(local_filename(&result.filename)));
    std::fs::write(&path, &result.data).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = result.data.len(), "saved download");

    println!(
        "{}  {} ({} bytes)",
        checksum::sha256_bytes(&result.data),
        path.display(),
        result.data.len()
    );
    Ok(())
}
