//! Parse raw HTTP response header lines into a [`HeaderMap`].

use super::HeaderMap;

/// Collects `Name: value` lines into a [`HeaderMap`].
///
/// A status line (`HTTP/...`) starts a new response, dropping headers of any
/// earlier one, so after a redirect chain only the final response's headers
/// remain.
pub fn parse_header_lines(lines: &[String]) -> HeaderMap {
    let mut headers = HeaderMap::new();

    for line in lines {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name, value.trim());
        }
    }

    headers
}
