//! JSON value to [`SubfileMetadata`] conversion.

use serde_json::{Map, Value};

use super::SubfileMetadata;
use crate::error::{Result, SkynetError};

/// Converts a metadata JSON object into a [`SubfileMetadata`] tree.
///
/// Requires string `filename`, string `contenttype` and unsigned `len`. When a
/// `subfiles` object is present each entry is parsed recursively, keeping the
/// object's key order.
pub fn parse_subfile(value: &Value) -> Result<SubfileMetadata> {
    let obj = value
        .as_object()
        .ok_or_else(|| SkynetError::MetadataFormat("metadata is not a JSON object".into()))?;

    let mut metadata = SubfileMetadata {
        filename: required_str(obj, "filename")?,
        content_type: required_str(obj, "contenttype")?,
        length: required_u64(obj, "len")?,
        subfiles: Vec::new(),
    };

    let subfiles = match obj.get("subfiles") {
        None => return Ok(metadata),
        Some(v) => v.as_object().ok_or_else(|| {
            SkynetError::MetadataFormat("`subfiles` is not a JSON object".into())
        })?,
    };

    for (name, child) in subfiles {
        let child = parse_subfile(child).map_err(|e| match e {
            SkynetError::MetadataFormat(msg) => {
                SkynetError::MetadataFormat(format!("subfile {:?}: {}", name, msg))
            }
            other => other,
        })?;
        metadata.subfiles.push((name.clone(), child));
    }
    Ok(metadata)
}

fn required_str(obj: &Map<String, Value>, key: &str) -> Result<String> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(SkynetError::MetadataFormat(format!("`{}` is not a string", key))),
        None => Err(SkynetError::MetadataFormat(format!("missing `{}`", key))),
    }
}

fn required_u64(obj: &Map<String, Value>, key: &str) -> Result<u64> {
    match obj.get(key) {
        Some(v) => v.as_u64().ok_or_else(|| {
            SkynetError::MetadataFormat(format!("`{}` is not an unsigned integer", key))
        }),
        None => Err(SkynetError::MetadataFormat(format!("missing `{}`", key))),
    }
}
