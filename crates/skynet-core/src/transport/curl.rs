//! libcurl-backed [`Transport`].

use std::str;
use std::time::Duration;

use curl::easy::{Easy, Form, List};

use super::{parse_header_lines, HttpRequest, HttpResponse, Method, Transport};
use crate::error::{Result, SkynetError};
use crate::url_model::with_query;

const EMPTY_FORM_BOUNDARY: &str = "skynet-empty-form";

/// A `multipart/form-data` body with zero parts.
fn empty_multipart_body() -> String {
    format!("--{}--\r\n", EMPTY_FORM_BOUNDARY)
}

/// Blocking HTTP transport using one curl `Easy` handle per request.
///
/// Holds no connection state between calls, so one instance can be shared
/// across threads. Call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(30), Duration::from_secs(3600))
    }
}

impl CurlTransport {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }
}

impl Transport for CurlTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = with_query(&request.url, &request.query)?;
        tracing::debug!(method = %request.method, url = %url, parts = request.parts.len(), "sending request");

        let mut easy = Easy::new();
        easy.url(&url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        match request.method {
            Method::Head => easy.nobody(true)?,
            Method::Get => easy.get(true)?,
            Method::Post => {
                // No `Expect: 100-continue` round trip before the body.
                let mut list = List::new();
                list.append("Expect:")?;

                if request.parts.is_empty() {
                    // curl sends no body for a form without parts; write the
                    // closing delimiter of an empty multipart body instead.
                    list.append(&format!(
                        "Content-Type: multipart/form-data; boundary={}",
                        EMPTY_FORM_BOUNDARY
                    ))?;
                    easy.post(true)?;
                    easy.post_fields_copy(empty_multipart_body().as_bytes())?;
                } else {
                    let mut form = Form::new();
                    for part in &request.parts {
                        form.part(&part.field)
                            .buffer(part.filename.as_str(), part.data.clone())
                            .add()?;
                    }
                    easy.httppost(form)?;
                }
                easy.http_headers(list)?;
            }
        }

        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform().map_err(|e| {
                SkynetError::Transport(format!("{} {} failed: {}", request.method, url, e))
            })?;
        }

        let status = easy.response_code()?;
        tracing::debug!(method = %request.method, status, bytes = body.len(), "response received");

        Ok(HttpResponse {
            status,
            headers: parse_header_lines(&header_lines),
            body,
        })
    }
}
