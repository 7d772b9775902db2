//! `skynet query <skylink>` – print metadata without downloading.

use anyhow::{Context, Result};
use skynet_core::{SkynetClient, SubfileMetadata};

pub async fn run_query(client: SkynetClient, skylink: String) -> Result<()> {
    let link = skylink.clone();
    let result = tokio::task::spawn_blocking(move || client.query(&link))
        .await?
        .with_context(|| format!("query {}", skylink))?;

    println!("skylink:  {}", result.skylink);
    println!("filename: {}", result.filename);
    print!("{}", render_tree(&result.metadata));
    Ok(())
}

/// One line per node: the root, then each subfile indented by depth.
pub(crate) fn render_tree(metadata: &SubfileMetadata) -> String {
    let mut out = format!(
        "{} ({}, {} bytes)\n",
        metadata.filename, metadata.content_type, metadata.length
    );
    metadata.walk(|depth, name, node| {
        out.push_str(&format!(
            "{}{} ({}, {} bytes)\n",
            "  ".repeat(depth),
            name,
            node.content_type,
            node.length
        ));
    });
    out
}
