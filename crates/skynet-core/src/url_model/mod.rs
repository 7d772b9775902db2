//! Skylink and URL string handling.
//!
//! Pure string transforms: skylink prefix handling, portal URL joining and
//! the `filename` parameter of a Content-Disposition header.

mod content_disposition;
mod path;
mod skylink;

pub use content_disposition::extract_filename;
pub use path::{join_url, trim_trailing_slash, with_query};
pub use skylink::{trim_sia_prefix, with_sia_prefix, SIA_PREFIX};

/// Fallback local name when a download carries no Content-Disposition filename.
pub const DEFAULT_FILENAME: &str = "download.bin";

/// Picks a local filename for saving downloaded content.
///
/// Uses the Content-Disposition filename when non-empty, otherwise
/// [`DEFAULT_FILENAME`]. Path separators are replaced so the result never
/// escapes the target directory.
pub fn local_filename(disposition_filename: &str) -> String {
    let name: String = disposition_filename
        .chars()
        .map(|c| if c == '/' || c == '\\' || c.is_control() { '_' } else { c })
        .collect();
    let name = name.trim();
    if name.is_empty() || name == "." || name == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        name.to_string()
    }
}
