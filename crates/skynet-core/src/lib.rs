//! Client library for Skynet-style content-addressed storage portals.
//!
//! Upload files or directories and get back a skylink; query or read a
//! skylink to get its metadata tree and content.

pub mod checksum;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod transport;
pub mod url_model;

pub use client::{QueryResult, SkynetClient, UploadFile};
pub use config::{default_portal_options, PortalOptions, SkynetConfig};
pub use error::{Result, SkynetError};
pub use metadata::SubfileMetadata;
