//! `skynet upload <path>` – upload a file or directory.

use anyhow::{Context, Result};
use skynet_core::SkynetClient;
use std::path::PathBuf;

pub async fn run_upload(client: SkynetClient, path: PathBuf) -> Result<()> {
    let shown = path.display().to_string();
    let skylink = tokio::task::spawn_blocking(move || client.upload_path(&path))
        .await?
        .with_context(|| format!("upload {}", shown))?;
    println!("{}", skylink);
    Ok(())
}
