//! Root metadata assembly from response headers.

use serde_json::Value;

use super::{parse_subfile, SubfileMetadata};
use crate::error::{Result, SkynetError};
use crate::transport::HeaderMap;

/// Response header carrying the JSON description of the stored content.
pub const METADATA_HEADER: &str = "skynet-file-metadata";

/// Builds the root [`SubfileMetadata`] of a query/read response.
///
/// The metadata header is parsed as JSON, then `len` and `contenttype` are
/// overwritten at the root with `content-length` and `content-type`. Children
/// keep the values from the JSON.
pub fn metadata_from_headers(headers: &HeaderMap) -> Result<SubfileMetadata> {
    let raw = headers
        .get(METADATA_HEADER)
        .ok_or_else(|| SkynetError::MetadataFormat(format!("missing `{}` header", METADATA_HEADER)))?;

    let mut json: Value = serde_json::from_str(raw)
        .map_err(|e| SkynetError::MetadataFormat(format!("`{}`: {}", METADATA_HEADER, e)))?;

    let content_length = headers.get("content-length").unwrap_or("");
    let len: u64 = content_length.trim().parse().map_err(|_| {
        SkynetError::MetadataFormat(format!("content-length {:?} is not a number", content_length))
    })?;
    let content_type = headers.get("content-type").unwrap_or("").to_string();

    let obj = json.as_object_mut().ok_or_else(|| {
        SkynetError::MetadataFormat(format!("`{}` is not a JSON object", METADATA_HEADER))
    })?;
    obj.insert("len".to_string(), Value::from(len));
    obj.insert("contenttype".to_string(), Value::String(content_type));

    parse_subfile(&json)
}
