//! Portal URL construction.

/// Removes one trailing `/`, if any. Empty input is returned as-is.
pub fn trim_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Joins a portal base URL and a path with exactly one `/` between them.
///
/// One trailing slash is dropped from both `base` and `path`, and leading
/// slashes of `path` are dropped, so `("https://x/", "/skynet/skyfile")` and
/// `("https://x", "skynet/skyfile")` both give `https://x/skynet/skyfile`.
pub fn join_url(base: &str, path: &str) -> String {
    let path = trim_trailing_slash(path).trim_start_matches('/');
    format!("{}/{}", trim_trailing_slash(base), path)
}

/// Normalizes `url` (percent-encoding its path) and appends percent-encoded
/// query parameters, if any.
pub fn with_query(url: &str, params: &[(String, String)]) -> Result<String, url::ParseError> {
    let mut parsed = url::Url::parse(url)?;
    if !params.is_empty() {
        parsed
            .query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    Ok(parsed.to_string())
}
