//! Local file name derivation from archive URLs.

/// Used when the URL has no usable final path segment.
const DEFAULT_FILENAME: &str = "dotnet-archive.bin";

/// Extracts the last path segment from a URL for use as a filename hint.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Name to save the archive under: the URL's final path segment, or a fixed fallback.
pub fn archive_filename(url: &str) -> String {
    filename_from_url_path(url).unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}
