//! `sia://` prefix handling.

/// Scheme prefix of a canonically rendered skylink.
pub const SIA_PREFIX: &str = "sia://";

/// Strips a leading `sia://` if present; otherwise returns `skylink` unchanged.
pub fn trim_sia_prefix(skylink: &str) -> &str {
    skylink.strip_prefix(SIA_PREFIX).unwrap_or(skylink)
}

/// Renders a bare skylink in canonical `sia://` form.
pub fn with_sia_prefix(skylink: &str) -> String {
    format!("{}{}", SIA_PREFIX, trim_sia_prefix(skylink))
}
