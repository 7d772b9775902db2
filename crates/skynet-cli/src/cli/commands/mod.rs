//! CLI command handlers, one per file.

mod checksum;
mod download;
mod query;
mod upload;

pub use checksum::run_checksum;
pub use download::run_download;
pub use query::run_query;
pub use upload::run_upload;
