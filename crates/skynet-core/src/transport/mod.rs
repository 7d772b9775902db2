//! HTTP transport seam.
//!
//! The portal client only needs "send one request, get status, headers and
//! body back". [`Transport`] is that contract; [`CurlTransport`] implements it
//! with libcurl and tests substitute an in-memory implementation.

mod curl;
mod parse;

pub use self::curl::CurlTransport;
pub use parse::parse_header_lines;

use std::collections::BTreeMap;
use std::fmt;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Head,
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::Head => "HEAD",
            Method::Get => "GET",
            Method::Post => "POST",
        };
        f.write_str(s)
    }
}

/// One named byte buffer of a multipart body. Framing is the transport's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartPart {
    /// Form field name (e.g. `file` or `files[]`).
    pub field: String,
    pub filename: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Target URL without query string.
    pub url: String,
    /// Query parameters, encoded by the transport.
    pub query: Vec<(String, String)>,
    /// Multipart body parts, in order. Only meaningful for POST.
    pub parts: Vec<MultipartPart>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            parts: Vec::new(),
        }
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn parts(mut self, parts: Vec<MultipartPart>) -> Self {
        self.parts = parts;
        self
    }
}

/// Case-insensitive response header map. Later values replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    inner: BTreeMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.inner
            .insert(name.trim().to_ascii_lowercase(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u32,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends exactly one HTTP request. Implementations own connection handling,
/// TLS, redirects and timeouts.
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse>;
}
