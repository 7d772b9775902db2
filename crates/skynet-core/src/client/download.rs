//! Metadata queries and content reads.

use super::{QueryResult, SkynetClient};
use crate::error::{Result, SkynetError};
use crate::metadata::metadata_from_headers;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::url_model::{extract_filename, join_url, trim_sia_prefix};

impl<T: Transport> SkynetClient<T> {
    /// URL a skylink is served at; the `sia://` prefix is optional.
    pub fn skylink_url(&self, skylink: &str) -> String {
        join_url(&self.options.base_url, trim_sia_prefix(skylink))
    }

    /// Fetches only the metadata of `skylink` (HEAD).
    pub fn query(&self, skylink: &str) -> Result<QueryResult> {
        let request = HttpRequest::new(Method::Head, self.skylink_url(skylink));
        let response = self.transport.send(&request)?;
        check_status(&response)?;
        self.to_result(skylink, response, false)
    }

    /// Fetches metadata and content of `skylink` (GET). Directory content is
    /// returned concatenated into one byte stream.
    pub fn read(&self, skylink: &str) -> Result<QueryResult> {
        let request =
            HttpRequest::new(Method::Get, self.skylink_url(skylink)).query("format", "concat");
        let response = self.transport.send(&request)?;
        check_status(&response)?;
        let result = self.to_result(skylink, response, true)?;
        tracing::info!(skylink, bytes = result.data.len(), "read complete");
        Ok(result)
    }

    fn to_result(&self, skylink: &str, response: HttpResponse, keep_body: bool) -> Result<QueryResult> {
        let filename = extract_filename(response.headers.get("content-disposition").unwrap_or(""));
        let metadata = metadata_from_headers(&response.headers)?;
        Ok(QueryResult {
            skylink: skylink.to_string(),
            portal: self.options.clone(),
            filename,
            metadata,
            data: if keep_body { response.body } else { Vec::new() },
        })
    }
}

/// Anything but 200 is a failure carrying the server's body text.
fn check_status(response: &HttpResponse) -> Result<()> {
    if response.status == 200 {
        return Ok(());
    }
    tracing::warn!(status = response.status, "portal returned an error");
    Err(SkynetError::Download {
        status: response.status,
        body: response.text(),
    })
}
