//! Local directory collection for directory uploads.

use std::fs;
use std::path::Path;

use super::UploadFile;
use crate::error::Result;

/// Reads every regular file below `dir` into [`UploadFile`]s named by their
/// `/`-separated path relative to `dir`, sorted by that name.
pub fn collect_dir(dir: &Path) -> Result<Vec<UploadFile>> {
    let mut files = Vec::new();
    visit(dir, "", &mut files)?;
    files.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(files)
}

fn visit(dir: &Path, prefix: &str, out: &mut Vec<UploadFile>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let rel = if prefix.is_empty() {
            name
        } else {
            format!("{}/{}", prefix, name)
        };
        let path = entry.path();
        if fs::metadata(&path)?.is_dir() {
            visit(&path, &rel, out)?;
        } else {
            out.push(UploadFile::new(rel, fs::read(&path)?));
        }
    }
    Ok(())
}
