//! Single-file and multi-file uploads.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{local, SkynetClient, UploadFile};
use crate::error::{Result, SkynetError};
use crate::transport::{HttpRequest, Method, MultipartPart, Transport};
use crate::url_model::{join_url, with_sia_prefix};

/// Fallback logical name when a local path has no final component.
const DEFAULT_UPLOAD_NAME: &str = "upload";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    skylink: String,
}

impl<T: Transport> SkynetClient<T> {
    /// Uploads one buffer under the file field and returns its `sia://` skylink.
    pub fn write(&self, data: &[u8], filename: &str) -> Result<String> {
        let file = UploadFile::new(filename, data);
        self.write_to_field(std::slice::from_ref(&file), filename, &self.options.file_field_name)
    }

    pub fn write_str(&self, text: &str, filename: &str) -> Result<String> {
        self.write(text.as_bytes(), filename)
    }

    /// Uploads `files` as one directory named `filename`. Each file becomes a
    /// part under the directory field. An empty list is sent as-is.
    pub fn write_files(&self, files: &[UploadFile], filename: &str) -> Result<String> {
        self.write_to_field(files, filename, &self.options.directory_field_name)
    }

    /// Uploads a local file, or a local directory as a multi-file upload with
    /// parts named by their `/`-separated path relative to `path`.
    pub fn upload_path(&self, path: &Path) -> Result<String> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_UPLOAD_NAME.to_string());

        if fs::metadata(path)?.is_dir() {
            let files = local::collect_dir(path)?;
            tracing::info!(dir = %path.display(), files = files.len(), "uploading directory");
            self.write_files(&files, &name)
        } else {
            let data = fs::read(path)?;
            tracing::info!(file = %path.display(), bytes = data.len(), "uploading file");
            self.write(&data, &name)
        }
    }

    fn write_to_field(&self, files: &[UploadFile], filename: &str, field: &str) -> Result<String> {
        let url = join_url(&self.options.base_url, &self.options.upload_path);
        let parts = files
            .iter()
            .map(|f| MultipartPart {
                field: field.to_string(),
                filename: f.filename.clone(),
                data: f.data.clone(),
            })
            .collect();
        let request = HttpRequest::new(Method::Post, url)
            .query("filename", filename)
            .parts(parts);

        let response = self.transport.send(&request)?;
        let parsed: UploadResponse = serde_json::from_slice(&response.body).map_err(|e| {
            SkynetError::Upload(format!(
                "HTTP {}: unexpected response ({}): {}",
                response.status,
                e,
                response.text()
            ))
        })?;

        let skylink = with_sia_prefix(&parsed.skylink);
        tracing::info!(%skylink, filename, "upload complete");
        Ok(skylink)
    }
}
