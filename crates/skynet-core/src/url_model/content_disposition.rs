//! Content-Disposition `filename` extraction.

/// Returns the value of the `filename=` parameter of a raw Content-Disposition
/// header value, or an empty string if there is none.
///
/// A value opening with `'` or `"` runs to the matching quote; an unquoted one
/// runs to the next `;`. A missing terminator means the value runs to the end
/// of the header. No whitespace is trimmed.
pub fn extract_filename(header_value: &str) -> String {
    const KEY: &str = "filename=";

    let start = match header_value.find(KEY) {
        Some(i) => i + KEY.len(),
        None => return String::new(),
    };
    let rest = &header_value[start..];

    let (value, delimiter) = match rest.chars().next() {
        Some(q @ ('\'' | '"')) => (&rest[q.len_utf8()..], q),
        _ => (rest, ';'),
    };

    let end = value.find(delimiter).unwrap_or(value.len());
    value[..end].to_string()
}
