//! Portal client: upload files, query and read skylinks.
//!
//! Each operation issues exactly one request through the configured
//! [`Transport`]. The client holds only read-only options, so it can be shared
//! by reference across threads.

mod download;
mod local;
mod upload;


pub use local::collect_dir;

use crate::config::{PortalOptions, SkynetConfig};
use crate::metadata::SubfileMetadata;
use crate::transport::{CurlTransport, Transport};

/// One file of a multi-file upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub filename: String,
    pub data: Vec<u8>,
}

impl UploadFile {
    pub fn new(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }
}

/// What `query` / `read` found at a skylink.
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// Skylink as passed by the caller.
    pub skylink: String,
    /// Options of the client that made the request.
    pub portal: PortalOptions,
    /// Content-Disposition filename, empty if the portal sent none.
    pub filename: String,
    pub metadata: SubfileMetadata,
    /// Response body; empty for `query`.
    pub data: Vec<u8>,
}

pub struct SkynetClient<T: Transport = CurlTransport> {
    options: PortalOptions,
    transport: T,
}

impl SkynetClient<CurlTransport> {
    /// Client for `options` over a default curl transport.
    pub fn new(options: PortalOptions) -> Self {
        Self::with_transport(options, CurlTransport::default())
    }

    /// Client using the portal and timeouts of a loaded config.
    pub fn from_config(cfg: &SkynetConfig) -> Self {
        let transport = CurlTransport::new(cfg.connect_timeout(), cfg.timeout());
        Self::with_transport(cfg.portal.clone(), transport)
    }
}

impl Default for SkynetClient<CurlTransport> {
    fn default() -> Self {
        Self::new(PortalOptions::default())
    }
}

impl<T: Transport> SkynetClient<T> {
    pub fn with_transport(options: PortalOptions, transport: T) -> Self {
        Self { options, transport }
    }

    pub fn options(&self) -> &PortalOptions {
        &self.options
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
